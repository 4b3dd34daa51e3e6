use glam::Vec3;

/// Axis-aligned box around a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
	min: Vec3,
	max: Vec3,
}

impl Bounds {
	pub fn new(min: Vec3, max: Vec3) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec3::MAX, Vec3::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.cmpgt(self.max).any()
	}

	pub fn expanded_to_contain(self, point: Vec3) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec3>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn contains(&self, point: Vec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	pub fn min(&self) -> Vec3 {
		self.min
	}

	pub fn max(&self) -> Vec3 {
		self.max
	}

	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}

	pub fn size(&self) -> Vec3 {
		(self.max - self.min).max(Vec3::ZERO)
	}
}

/// Unsigned angle between `a` and `b` in degrees.
///
/// Returns 0 when either vector is too short to have a direction, so a degenerate segment never
/// counts as a corner.
pub fn angle_degrees(a: Vec3, b: Vec3) -> f32 {
	let denominator = (a.length_squared() * b.length_squared()).sqrt();
	if denominator < 1e-15 {
		return 0.0;
	}
	(a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec3;

	#[test]
	fn empty_bounds() {
		let bounds = Bounds::containing(std::iter::empty());
		assert!(bounds.is_empty());
		assert!(!bounds.contains(Vec3::ZERO));
		assert_eq!(bounds.size(), Vec3::ZERO);
	}

	#[test]
	fn bounds_containing_points() {
		let bounds = Bounds::containing(
			[vec3(1.0, -2.0, 0.5), vec3(-1.0, 3.0, 0.0), vec3(0.0, 0.0, 2.0)].into_iter(),
		);
		assert!(!bounds.is_empty());
		assert_eq!(bounds.min(), vec3(-1.0, -2.0, 0.0));
		assert_eq!(bounds.max(), vec3(1.0, 3.0, 2.0));
		assert_eq!(bounds.center(), vec3(0.0, 0.5, 1.0));
		assert!(bounds.contains(vec3(1.0, 3.0, 2.0)));
		assert!(!bounds.contains(vec3(1.5, 0.0, 0.0)));
	}

	#[test]
	fn single_point_bounds() {
		let p = vec3(0.25, 0.5, 0.75);
		let bounds = Bounds::containing(std::iter::once(p));
		assert!(!bounds.is_empty());
		assert!(bounds.contains(p));
		assert_eq!(bounds.size(), Vec3::ZERO);
	}

	#[test]
	fn angles() {
		assert_abs_diff_eq!(angle_degrees(Vec3::X, Vec3::X), 0.0, epsilon = 1e-3);
		assert_abs_diff_eq!(angle_degrees(Vec3::X, Vec3::Y), 90.0, epsilon = 1e-3);
		assert_abs_diff_eq!(angle_degrees(Vec3::X, -Vec3::X), 180.0, epsilon = 1e-3);
		assert_abs_diff_eq!(angle_degrees(vec3(1.0, 1.0, 0.0), Vec3::X), 45.0, epsilon = 1e-3);
	}

	#[test]
	fn angle_with_zero_vector() {
		assert_eq!(angle_degrees(Vec3::ZERO, Vec3::X), 0.0);
		assert_eq!(angle_degrees(Vec3::Y, Vec3::ZERO), 0.0);
	}
}
