use glam::Vec3;
use itertools::Itertools;

/// A finalized polyline captured from one continuous interaction.
///
/// Always holds at least two points; the first and last are where the interaction started and
/// ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Vec3>,
}

impl Stroke {
	pub fn new(points: Vec<Vec3>) -> Option<Self> {
		if points.len() < 2 {
			None
		} else {
			Some(Self { points })
		}
	}

	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn point_count(&self) -> usize {
		self.points.len()
	}

	pub fn first(&self) -> Vec3 {
		self.points[0]
	}

	pub fn last(&self) -> Vec3 {
		self.points[self.points.len() - 1]
	}

	/// Total polyline length.
	pub fn length(&self) -> f32 {
		self
			.points
			.iter()
			.tuple_windows()
			.map(|(a, b)| a.distance(*b))
			.sum()
	}
}

/// The stroke being drawn.
///
/// The last point is the live point that follows the controller every frame; everything before it
/// is committed. There are always at least two points.
#[derive(Debug, Clone)]
pub(crate) struct ActiveStroke {
	points: Vec<Vec3>,
}

impl ActiveStroke {
	/// Starts with the anchor recorded twice, a zero-length first segment.
	pub fn start(anchor: Vec3) -> Self {
		Self {
			points: vec![anchor, anchor],
		}
	}

	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn committed(&self) -> &[Vec3] {
		&self.points[..self.points.len() - 1]
	}

	pub fn last_committed(&self) -> Vec3 {
		self.points[self.points.len() - 2]
	}

	/// The committed vertex before the last one, if the stroke has a corner to inspect.
	pub fn root(&self) -> Option<Vec3> {
		self
			.points
			.len()
			.checked_sub(3)
			.map(|index| self.points[index])
	}

	pub fn track(&mut self, position: Vec3) {
		let last = self.points.len() - 1;
		self.points[last] = position;
	}

	pub fn append(&mut self, position: Vec3) {
		self.points.push(position);
	}

	/// Moves the last committed vertex onto `position`, merging its two adjacent segments.
	pub fn collapse(&mut self, position: Vec3) {
		let index = self.points.len() - 2;
		self.points[index] = position;
	}

	/// Turns the in-progress points into a [`Stroke`].
	///
	/// A live point sitting on the last committed vertex is dropped. Returns `None` if the
	/// controller never left the anchor.
	pub fn finish(mut self) -> Option<Stroke> {
		let anchor = self.points[0];
		if self.points.iter().all(|p| *p == anchor) {
			return None;
		}
		let n = self.points.len();
		if n > 2 && self.points[n - 1] == self.points[n - 2] {
			self.points.pop();
		}
		Stroke::new(self.points)
	}
}
