use super::stroke::{ActiveStroke, Stroke};
use crate::config::CaptureSettings;
use crate::geom::angle_degrees;
use glam::Vec3;

/// Something that reacts to an interaction starting or stopping, e.g. a grab button on a tracked
/// controller.
pub trait Interactable {
	type Output;

	fn on_interaction(&mut self, start: bool) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
	Idle,
	Drawing,
}

/// What a single [`StrokeCapture::update`] did to the in-progress stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SampleOutcome {
	/// No stroke in progress; only the tool position was recorded.
	#[display("ignored")]
	Ignored,
	/// The sample had a non-finite coordinate and was dropped; neither the tool position nor the
	/// stroke changed.
	#[display("rejected")]
	Rejected,
	/// The live point moved but stayed within the segment distance.
	#[display("tracked")]
	Tracked,
	#[display("appended")]
	Appended,
	/// The sample continued the last segment in (nearly) the same direction and replaced its end.
	#[display("collapsed")]
	Collapsed,
	/// The stroke reached the vertex cap and was discarded.
	#[display("capacity exceeded")]
	CapacityExceeded,
}

#[derive(Debug, Clone, Default)]
enum CaptureState {
	#[default]
	Idle,
	Drawing(ActiveStroke),
}

/// Turns the per-frame positions of a drawing tool into simplified polylines.
#[derive(Debug, Clone)]
pub struct StrokeCapture {
	settings: CaptureSettings,
	position: Vec3,
	state: CaptureState,
}

impl Default for StrokeCapture {
	fn default() -> Self {
		Self::new(CaptureSettings::default())
	}
}

impl StrokeCapture {
	pub fn new(settings: CaptureSettings) -> Self {
		Self {
			settings,
			position: Vec3::ZERO,
			state: CaptureState::Idle,
		}
	}

	pub fn settings(&self) -> &CaptureSettings {
		&self.settings
	}

	/// Last position reported through [`Self::update`].
	pub fn position(&self) -> Vec3 {
		self.position
	}

	pub fn phase(&self) -> CapturePhase {
		match self.state {
			CaptureState::Idle => CapturePhase::Idle,
			CaptureState::Drawing(_) => CapturePhase::Drawing,
		}
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.state, CaptureState::Drawing(_))
	}

	/// The in-progress points including the live point, for rendering while drawing.
	pub fn current_stroke(&self) -> Option<&[Vec3]> {
		match &self.state {
			CaptureState::Idle => None,
			CaptureState::Drawing(stroke) => Some(stroke.points()),
		}
	}

	/// The in-progress points without the live point.
	pub fn committed_vertices(&self) -> Option<&[Vec3]> {
		match &self.state {
			CaptureState::Idle => None,
			CaptureState::Drawing(stroke) => Some(stroke.committed()),
		}
	}

	/// Starts a stroke at the current tool position. An unfinished stroke is thrown away.
	pub fn begin(&mut self) {
		if self.is_drawing() {
			tracing::debug!("restarting stroke before the previous one ended");
		}
		self.state = CaptureState::Drawing(ActiveStroke::start(self.position));
	}

	/// Ends the current stroke and hands it over, unless it was trivial or there was none.
	pub fn end(&mut self) -> Option<Stroke> {
		let CaptureState::Drawing(stroke) = std::mem::take(&mut self.state) else {
			return None;
		};
		let stroke = stroke.finish();
		match &stroke {
			Some(stroke) => tracing::debug!(
				points = stroke.point_count(),
				length = stroke.length(),
				"stroke finished"
			),
			None => tracing::debug!("dropping stroke that never left its anchor"),
		}
		stroke
	}

	/// Feeds the tool position for one frame.
	pub fn update(&mut self, position: Vec3) -> SampleOutcome {
		if !position.is_finite() {
			tracing::warn!(%position, "dropping non-finite tool position");
			return SampleOutcome::Rejected;
		}
		self.position = position;
		let CaptureState::Drawing(stroke) = &mut self.state else {
			return SampleOutcome::Ignored;
		};

		stroke.track(position);
		let last = stroke.last_committed();
		if last.distance_squared(position) <= self.settings.max_segment_distance_squared() {
			return SampleOutcome::Tracked;
		}

		let outcome = match stroke.root() {
			Some(root)
				if angle_degrees(last - root, position - last) < self.settings.min_corner_angle() =>
			{
				stroke.collapse(position);
				SampleOutcome::Collapsed
			}
			_ => {
				stroke.append(position);
				SampleOutcome::Appended
			}
		};

		let vertices = stroke.len();
		if vertices >= self.settings.max_vertices() {
			tracing::warn!(vertices, "stroke reached the vertex cap and was discarded");
			self.state = CaptureState::Idle;
			return SampleOutcome::CapacityExceeded;
		}

		tracing::trace!(%outcome, vertices);
		outcome
	}
}

impl Interactable for StrokeCapture {
	type Output = Option<Stroke>;

	fn on_interaction(&mut self, start: bool) -> Option<Stroke> {
		if start {
			self.begin();
			None
		} else {
			self.end()
		}
	}
}
