use super::capture::{Interactable, SampleOutcome, StrokeCapture};
use super::drawing::Drawing;
use super::plane::{FitError, Plane, PlaneFitter, ReducedDrawing};
use crate::config::CaptureSettings;
use crate::util::ResultExt;
use glam::{Vec2, Vec3};
use tracing::Level;

/// One drawing session: captures strokes, collects them and keeps the plane through them up to
/// date.
///
/// The plane is refitted every time a stroke is finished.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
	capture: StrokeCapture,
	drawing: Drawing,
	fitter: PlaneFitter,
}

impl DrawingSession {
	pub fn new(settings: CaptureSettings) -> Self {
		Self {
			capture: StrokeCapture::new(settings),
			drawing: Drawing::new(),
			fitter: PlaneFitter::new(),
		}
	}

	pub fn capture(&self) -> &StrokeCapture {
		&self.capture
	}

	pub fn drawing(&self) -> &Drawing {
		&self.drawing
	}

	pub fn plane(&self) -> Option<&Plane> {
		self.fitter.plane()
	}

	/// Feeds the tool position for one frame.
	pub fn update(&mut self, position: Vec3) -> SampleOutcome {
		self.capture.update(position)
	}

	pub fn begin_stroke(&mut self) {
		self.capture.begin();
	}

	/// Ends the current stroke. If it produced a stroke, the stroke is added to the drawing and
	/// the plane is refitted; the result of that refit is returned.
	pub fn end_stroke(&mut self) -> Option<Result<Plane, FitError>> {
		let stroke = self.capture.end()?;
		self.drawing.add_stroke(stroke);
		tracing::debug!(strokes = self.drawing.len(), "stroke added to drawing");
		Some(self.fitter.recompute(&self.drawing))
	}

	pub fn project(&self, point: Vec3) -> Option<Vec2> {
		self.fitter.project(point)
	}

	pub fn reduce(&self) -> Option<ReducedDrawing> {
		self.fitter.reduce(&self.drawing)
	}

	/// Drops every stroke and the plane. A stroke in progress is not affected.
	pub fn clear(&mut self) {
		self.drawing.clear();
		self.fitter.clear();
	}
}

impl Interactable for DrawingSession {
	/// The new plane, when ending the interaction refitted it successfully.
	type Output = Option<Plane>;

	fn on_interaction(&mut self, start: bool) -> Option<Plane> {
		if start {
			self.begin_stroke();
			return None;
		}
		let result = self.end_stroke()?;
		let level = match result {
			Err(FitError::InsufficientSamples { .. }) => Level::DEBUG,
			_ => Level::WARN,
		};
		result.ok_or_log(level)
	}
}
