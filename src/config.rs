use bon::bon;
use thiserror::Error;

pub const DEFAULT_MAX_SEGMENT_DISTANCE: f32 = 0.02;
pub const DEFAULT_MIN_CORNER_ANGLE: f32 = 10.0;
pub const DEFAULT_MAX_VERTICES: usize = 50;

/// Smallest vertex cap that still leaves room for one committed segment.
pub const MIN_VERTEX_CAP: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
	#[error("segment distance must be finite and non-negative, got {0}")]
	InvalidSegmentDistance(f32),

	#[error("corner angle must lie within [0, 180] degrees, got {0}")]
	InvalidCornerAngle(f32),

	#[error("vertex cap must be at least {MIN_VERTEX_CAP}, got {0}")]
	VertexCapTooSmall(usize),
}

static_assertions::assert_impl_all!(SettingsError: std::error::Error, Send, Sync);

/// The three knobs of stroke simplification.
///
/// Values are validated once on construction, so the capture loop never has to recheck them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSettings {
	max_segment_distance: f32,
	min_corner_angle: f32,
	max_vertices: usize,
}

#[bon]
impl CaptureSettings {
	#[builder]
	pub fn new(
		// A new vertex is committed only once the controller is further than this from the last
		// committed vertex.
		#[builder(default = DEFAULT_MAX_SEGMENT_DISTANCE)]
		max_segment_distance: f32,
		// Consecutive segments that turn by less than this many degrees are merged.
		#[builder(default = DEFAULT_MIN_CORNER_ANGLE)]
		min_corner_angle: f32,
		// A stroke reaching this many points is discarded.
		#[builder(default = DEFAULT_MAX_VERTICES)]
		max_vertices: usize,
	) -> Result<Self, SettingsError> {
		use SettingsError::*;
		if !(max_segment_distance.is_finite() && max_segment_distance >= 0.0) {
			Err(InvalidSegmentDistance(max_segment_distance))?;
		}
		if !(0.0..=180.0).contains(&min_corner_angle) {
			Err(InvalidCornerAngle(min_corner_angle))?;
		}
		if max_vertices < MIN_VERTEX_CAP {
			Err(VertexCapTooSmall(max_vertices))?;
		}
		Ok(Self {
			max_segment_distance,
			min_corner_angle,
			max_vertices,
		})
	}
}

impl CaptureSettings {
	pub fn max_segment_distance(&self) -> f32 {
		self.max_segment_distance
	}

	pub fn max_segment_distance_squared(&self) -> f32 {
		self.max_segment_distance * self.max_segment_distance
	}

	pub fn min_corner_angle(&self) -> f32 {
		self.min_corner_angle
	}

	pub fn max_vertices(&self) -> usize {
		self.max_vertices
	}
}

impl Default for CaptureSettings {
	fn default() -> Self {
		Self {
			max_segment_distance: DEFAULT_MAX_SEGMENT_DISTANCE,
			min_corner_angle: DEFAULT_MIN_CORNER_ANGLE,
			max_vertices: DEFAULT_MAX_VERTICES,
		}
	}
}
