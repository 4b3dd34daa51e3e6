//! Least-squares plane through a drawing, and the projection into that plane.
//!
//! The fit samples at most three points per stroke (first, middle, last), so its cost grows with
//! the number of strokes rather than with the number of vertices. The samples are centered on
//! their centroid and decomposed with an SVD; the right singular vector of the smallest singular
//! value is the normal, the other two span the plane.

use super::drawing::Drawing;
use super::stroke::Stroke;
use glam::{vec2, DVec3, Vec2, Vec3};
use nalgebra::DMatrix;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use thiserror::Error;

/// Fewer sampled points than this never define a plane.
pub const MIN_FIT_POINTS: usize = 3;

/// The normal is undefined when the two smallest singular values are closer than this, relative
/// to the largest one.
const DEGENERACY_TOLERANCE: f64 = 1e-5;

/// Components this close to the largest one count as tied when picking a sign.
const SIGN_TIE_TOLERANCE: f64 = 1e-6;

const SVD_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
	#[error("need at least {MIN_FIT_POINTS} sampled points to fit a plane, got {count}")]
	InsufficientSamples { count: usize },

	#[error("sampled points are collinear or coincident (singular value gap {gap:e})")]
	DegenerateGeometry { gap: f64 },

	#[error("sampled points contain non-finite coordinates")]
	NonFiniteSample,

	#[error("singular value decomposition did not converge")]
	NoConvergence,
}

static_assertions::assert_impl_all!(FitError: std::error::Error, Send, Sync);

/// A fitted plane with an orthonormal, right-handed frame `(basis1, basis2, normal)`.
///
/// Planes are plain values. A refit produces a new one, it never edits an existing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
	support: Vec3,
	normal: Vec3,
	basis1: Vec3,
	basis2: Vec3,
}

static_assertions::assert_impl_all!(Plane: Copy, Send, Sync);

impl Plane {
	/// Centroid of the points the plane was fitted to.
	pub fn support(&self) -> Vec3 {
		self.support
	}

	/// Unit normal, the direction of least variance.
	pub fn normal(&self) -> Vec3 {
		self.normal
	}

	/// In-plane direction of greatest variance.
	pub fn basis1(&self) -> Vec3 {
		self.basis1
	}

	pub fn basis2(&self) -> Vec3 {
		self.basis2
	}

	pub fn signed_distance(&self, point: Vec3) -> f32 {
		(point - self.support).dot(self.normal)
	}

	/// Orthogonal projection of `point` onto the plane.
	pub fn project(&self, point: Vec3) -> Vec3 {
		// The normal has unit length, so there is no `normal · normal` to divide by.
		point - self.signed_distance(point) * self.normal
	}

	/// Coordinates of the projection of `point` in the `(basis1, basis2)` frame.
	pub fn to_local(&self, point: Vec3) -> Vec2 {
		let offset = point - self.support;
		vec2(offset.dot(self.basis1), offset.dot(self.basis2))
	}

	/// The point of the plane with the given local coordinates.
	pub fn from_local(&self, local: Vec2) -> Vec3 {
		self.support + local.x * self.basis1 + local.y * self.basis2
	}

	/// Root mean square distance of `points` from the plane.
	pub fn residual(&self, points: &[Vec3]) -> Option<f32> {
		if points.is_empty() {
			return None;
		}
		let sum: f32 = points
			.iter()
			.map(|p| self.signed_distance(*p).powi(2))
			.sum();
		Some((sum / points.len() as f32).sqrt())
	}
}

/// Picks the points of each stroke that go into the fit: all of them for strokes of at most two
/// points, otherwise the first, the middle and the last.
pub fn sample_points(strokes: &[Stroke]) -> Vec<Vec3> {
	let mut samples = Vec::with_capacity(3 * strokes.len());
	for stroke in strokes {
		let points = stroke.points();
		if points.len() <= 2 {
			samples.extend_from_slice(points);
		} else {
			samples.extend([
				points[0],
				points[points.len() / 2],
				points[points.len() - 1],
			]);
		}
	}
	samples
}

/// Flips `v` so that its dominant component is positive, making the result independent of the
/// sign the decomposition happened to choose.
fn canonical_sign(v: DVec3) -> DVec3 {
	let largest = v.abs().max_element();
	let dominant = v
		.to_array()
		.into_iter()
		.find(|c| c.abs() >= largest - SIGN_TIE_TOLERANCE)
		.unwrap_or_default();
	if dominant < 0.0 {
		-v
	} else {
		v
	}
}

#[tracing::instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn fit_plane(points: &[Vec3]) -> Result<Plane, FitError> {
	use FitError::*;
	if points.len() < MIN_FIT_POINTS {
		Err(InsufficientSamples {
			count: points.len(),
		})?;
	}
	if !points.iter().all(|p| p.is_finite()) {
		Err(NonFiniteSample)?;
	}

	let centroid = points.iter().map(|p| p.as_dvec3()).sum::<DVec3>() / points.len() as f64;
	let centered = DMatrix::from_fn(points.len(), 3, |row, col| {
		(points[row].as_dvec3() - centroid)[col]
	});
	let svd = centered
		.try_svd(false, true, f64::EPSILON, SVD_MAX_ITERATIONS)
		.ok_or(NoConvergence)?;
	let sigma = svd.singular_values;
	let v_t = svd.v_t.ok_or(NoConvergence)?;

	// Rows of `v_t` are the right singular vectors; order them by decreasing singular value.
	let mut order: [usize; 3] = [0, 1, 2];
	order.sort_by_key(|&i| Reverse(OrderedFloat(sigma[i])));
	let [major, middle, minor] = order.map(|i| sigma[i]);

	let gap = middle - minor;
	if gap <= DEGENERACY_TOLERANCE * major {
		tracing::debug!(major, middle, minor, "no unique normal");
		Err(DegenerateGeometry { gap })?;
	}

	let axis = |i: usize| DVec3::new(v_t[(i, 0)], v_t[(i, 1)], v_t[(i, 2)]).normalize();
	let basis1 = canonical_sign(axis(order[0]));
	let normal = canonical_sign(axis(order[2]));
	let basis2 = normal.cross(basis1);

	Ok(Plane {
		support: centroid.as_vec3(),
		normal: normal.as_vec3(),
		basis1: basis1.as_vec3(),
		basis2: basis2.as_vec3(),
	})
}

/// A drawing flattened into the coordinates of its plane, one polyline per stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedDrawing {
	plane: Plane,
	strokes: Vec<Vec<Vec2>>,
}

impl ReducedDrawing {
	pub fn plane(&self) -> &Plane {
		&self.plane
	}

	pub fn strokes(&self) -> &[Vec<Vec2>] {
		&self.strokes
	}
}

/// Keeps the most recent successful fit of a drawing.
#[derive(Debug, Clone, Default)]
pub struct PlaneFitter {
	plane: Option<Plane>,
}

impl PlaneFitter {
	pub fn new() -> Self {
		Self::default()
	}

	/// `None` until the first successful [`Self::recompute`].
	pub fn plane(&self) -> Option<&Plane> {
		self.plane.as_ref()
	}

	/// Fits a new plane to `drawing`.
	///
	/// On error the previous plane, if any, stays in place.
	pub fn recompute(&mut self, drawing: &Drawing) -> Result<Plane, FitError> {
		let samples = sample_points(drawing.strokes());
		let plane = fit_plane(&samples)?;
		tracing::debug!(
			support = %plane.support,
			normal = %plane.normal,
			residual = ?plane.residual(&samples),
			"plane updated"
		);
		self.plane = Some(plane);
		Ok(plane)
	}

	pub fn project(&self, point: Vec3) -> Option<Vec2> {
		self.plane.map(|plane| plane.to_local(point))
	}

	/// Projects every stroke of `drawing` into the current plane.
	pub fn reduce(&self, drawing: &Drawing) -> Option<ReducedDrawing> {
		let plane = self.plane?;
		let strokes = drawing
			.strokes()
			.iter()
			.map(|stroke| stroke.points().iter().map(|p| plane.to_local(*p)).collect())
			.collect();
		Some(ReducedDrawing { plane, strokes })
	}

	pub fn clear(&mut self) {
		self.plane = None;
	}
}
