use airdraw::{CaptureSettings, DrawingSession, Interactable};
use glam::{vec2, vec3, EulerRot, Quat, Vec2, Vec3};
use itertools::Itertools;

/// Distance the controller travels between two frames in the demo strokes.
const FRAME_STEP: f32 = 0.004;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::DEBUG
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, the
	// reverse direction is only taken if setting the global subscriber above failed.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

/// Splits each segment of `polyline` into steps of at most `step`, one per frame.
fn frames_along(polyline: &[Vec2], step: f32) -> Vec<Vec2> {
	let mut frames: Vec<Vec2> = polyline.first().copied().into_iter().collect();
	for (a, b) in polyline.iter().tuple_windows() {
		let steps = (a.distance(*b) / step).ceil().max(1.0) as usize;
		frames.extend((1..=steps).map(|i| a.lerp(*b, i as f32 / steps as f32)));
	}
	frames
}

/// A "V", a "C" and an underline, drawn on a tilted board in front of the user.
fn demo_strokes() -> Vec<Vec<Vec3>> {
	let rotation = Quat::from_euler(EulerRot::XYZ, 0.4, -0.3, 0.1);
	let origin = vec3(0.1, 1.2, -0.4);
	let to_world = |p: Vec2| origin + rotation * vec3(p.x, p.y, 0.0);

	let v = [vec2(-0.1, 0.15), vec2(0.0, -0.1), vec2(0.1, 0.15)];
	let c: Vec<Vec2> = (0..=50)
		.map(|i| {
			let angle = (30.0 + 300.0 * i as f32 / 50.0).to_radians();
			vec2(0.3, 0.0) + 0.1 * Vec2::from_angle(angle)
		})
		.collect();
	let underline = [vec2(-0.12, -0.2), vec2(0.45, -0.2)];

	[&v[..], &c[..], &underline[..]]
		.into_iter()
		.map(|polyline| {
			frames_along(polyline, FRAME_STEP)
				.into_iter()
				.map(to_world)
				.collect()
		})
		.collect()
}

fn run() -> anyhow::Result<()> {
	let settings = CaptureSettings::builder().build()?;
	let mut session = DrawingSession::new(settings);

	for (index, samples) in demo_strokes().iter().enumerate() {
		let Some((first, rest)) = samples.split_first() else {
			continue;
		};
		session.update(*first);
		session.on_interaction(true);
		for sample in rest {
			session.update(*sample);
		}
		match session.on_interaction(false) {
			Some(plane) => tracing::info!(stroke = index, normal = %plane.normal(), "plane refitted"),
			None => tracing::info!(stroke = index, "plane unchanged"),
		}
	}

	let reduced = session
		.reduce()
		.ok_or_else(|| anyhow::anyhow!("the demo drawing did not define a plane"))?;
	if let Some(bounds) = session.drawing().bounds() {
		tracing::info!(center = %bounds.center(), size = %bounds.size(), "drawing bounds");
	}

	let plane = reduced.plane();
	println!("support {}", plane.support());
	println!("normal  {}", plane.normal());
	println!("basis   {} {}", plane.basis1(), plane.basis2());
	for (index, stroke) in reduced.strokes().iter().enumerate() {
		println!(
			"stroke {index}: {}",
			stroke
				.iter()
				.map(|p| format!("({:.3}, {:.3})", p.x, p.y))
				.join(" ")
		);
	}
	Ok(())
}

fn main() {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	if let Err(error) = run() {
		tracing::error!(error = error.to_string(), "demo failed");
		std::process::exit(1);
	}
}
