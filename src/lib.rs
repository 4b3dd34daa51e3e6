//! Free-hand 3D stroke capture and planar reduction.
//!
//! A tracked controller reports its position every frame. While an interaction is active,
//! [`StrokeCapture`] simplifies those positions into a polyline. Finished strokes go into a
//! [`Drawing`], and [`PlaneFitter`] fits a least-squares [`Plane`] through the drawing so it can be
//! reduced to 2D. [`DrawingSession`] wires the three together.

pub(crate) mod util;

mod config;
pub use config::*;

mod engine;
pub use engine::*;

mod geom;
pub use geom::*;
