use tracing::Level;

pub trait ResultExt<T, E> {
	/// Converts into an `Option`, logging the error at `level`.
	fn ok_or_log(self, level: Level) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, level: Level) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|err| {
				if level == Level::ERROR {
					tracing::error!("{}", err)
				} else if level == Level::WARN {
					tracing::warn!("{}", err)
				} else if level == Level::INFO {
					tracing::info!("{}", err)
				} else if level == Level::DEBUG {
					tracing::debug!("{}", err)
				} else {
					tracing::trace!("{}", err)
				}
			})
			.ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_ok_values() {
		let result: Result<u32, String> = Ok(3);
		assert_eq!(result.ok_or_log(Level::ERROR), Some(3));
	}

	#[test]
	fn drops_errors() {
		let result: Result<u32, String> = Err("nope".into());
		assert_eq!(result.ok_or_log(Level::DEBUG), None);
	}
}
