use super::stroke::Stroke;
use crate::geom::Bounds;

/// All strokes finished during one drawing session, in the order they were drawn.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
	strokes: Vec<Stroke>,
}

impl Drawing {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_stroke(&mut self, stroke: Stroke) {
		self.strokes.push(stroke);
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn len(&self) -> usize {
		self.strokes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strokes.is_empty()
	}

	/// Number of vertices over all strokes.
	pub fn point_count(&self) -> usize {
		self.strokes.iter().map(Stroke::point_count).sum()
	}

	pub fn bounds(&self) -> Option<Bounds> {
		if self.is_empty() {
			return None;
		}
		Some(Bounds::containing(
			self.strokes.iter().flat_map(|s| s.points().iter().copied()),
		))
	}

	pub fn clear(&mut self) {
		self.strokes.clear();
	}
}

impl FromIterator<Stroke> for Drawing {
	fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
		Self {
			strokes: iter.into_iter().collect(),
		}
	}
}
