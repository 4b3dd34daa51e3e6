use airdraw::{
	CaptureSettings, DrawingSession, FitError, Interactable, SampleOutcome, SettingsError,
};
use approx::assert_abs_diff_eq;
use glam::{vec2, vec3, EulerRot, Quat, Vec2, Vec3};

fn board() -> (Vec3, Quat) {
	(
		vec3(0.3, 1.4, -0.6),
		Quat::from_euler(EulerRot::YXZ, 0.7, -0.25, 0.0),
	)
}

/// Controller positions tracing `polyline` on the board, a few millimetres apart, with a little
/// hand tremor perpendicular to the board.
fn trace(rng: &mut fastrand::Rng, polyline: &[Vec2]) -> Vec<Vec3> {
	let (origin, rotation) = board();
	let mut samples = vec![];
	for pair in polyline.windows(2) {
		let steps = (pair[0].distance(pair[1]) / 0.004).ceil() as usize;
		for i in 0..steps {
			let p = pair[0].lerp(pair[1], i as f32 / steps as f32);
			let tremor = (rng.f32() - 0.5) * 0.001;
			samples.push(origin + rotation * vec3(p.x, p.y, tremor));
		}
	}
	if let Some(end) = polyline.last() {
		samples.push(origin + rotation * vec3(end.x, end.y, 0.0));
	}
	samples
}

fn draw(session: &mut DrawingSession, samples: &[Vec3]) -> Option<airdraw::Plane> {
	session.update(samples[0]);
	session.on_interaction(true);
	for sample in &samples[1..] {
		session.update(*sample);
	}
	session.on_interaction(false)
}

#[test]
fn strokes_on_a_tilted_board_recover_the_board() {
	let mut rng = fastrand::Rng::with_seed(0x13371337);
	let mut session = DrawingSession::default();

	let corner = [vec2(0.0, 0.0), vec2(0.2, 0.0), vec2(0.2, 0.15)];
	let plane = draw(&mut session, &trace(&mut rng, &corner)).unwrap();
	let tick = [vec2(-0.1, 0.1), vec2(-0.05, 0.05), vec2(0.05, 0.2)];
	let plane = draw(&mut session, &trace(&mut rng, &tick)).unwrap_or(plane);

	let (origin, rotation) = board();
	let board_normal = rotation * Vec3::Z;
	assert_abs_diff_eq!(plane.normal().dot(board_normal).abs(), 1.0, epsilon = 1e-2);
	assert!(plane.signed_distance(origin).abs() < 2e-3);

	// Every captured vertex lies close to the fitted plane.
	let vertices: Vec<Vec3> = session
		.drawing()
		.strokes()
		.iter()
		.flat_map(|s| s.points().iter().copied())
		.collect();
	assert!(plane.residual(&vertices).unwrap() < 2e-3);

	// The reduced drawing preserves distances within the board.
	let reduced = session.reduce().unwrap();
	assert_eq!(reduced.strokes().len(), 2);
	let first = &reduced.strokes()[0];
	let local_length = first.first().unwrap().distance(*first.last().unwrap());
	assert_abs_diff_eq!(local_length, 0.25, epsilon = 5e-3);
}

#[test]
fn custom_settings_change_how_many_vertices_are_kept() {
	let mut rng = fastrand::Rng::with_seed(0x13371337);
	let square = [
		vec2(0.0, 0.0),
		vec2(0.1, 0.0),
		vec2(0.1, 0.1),
		vec2(0.0, 0.1),
	];
	let samples = trace(&mut rng, &square);

	let mut coarse = DrawingSession::default();
	draw(&mut coarse, &samples);
	// Corners survive, the tremor along each side is merged away.
	let coarse_count = coarse.drawing().strokes()[0].point_count();
	assert!((4..=8).contains(&coarse_count), "{coarse_count} points");

	// Without corner merging every committed segment stays.
	let settings = CaptureSettings::builder()
		.min_corner_angle(0.0)
		.build()
		.unwrap();
	let mut fine = DrawingSession::new(settings);
	draw(&mut fine, &samples);
	let fine_count = fine.drawing().strokes()[0].point_count();
	assert!(fine_count > 10 && fine_count > coarse_count, "{fine_count} points");
}

#[test]
fn strokes_over_the_vertex_cap_are_discarded() {
	let settings = CaptureSettings::builder()
		.min_corner_angle(0.0)
		.max_vertices(5)
		.build()
		.unwrap();
	let mut session = DrawingSession::new(settings);

	let samples: Vec<Vec3> = (0..40).map(|i| vec3(i as f32 * 0.01, 0.0, 0.0)).collect();
	session.update(samples[0]);
	session.on_interaction(true);
	let outcomes: Vec<SampleOutcome> = samples[1..].iter().map(|p| session.update(*p)).collect();
	assert!(outcomes.contains(&SampleOutcome::CapacityExceeded));
	assert!(!session.capture().is_drawing());
	assert_eq!(session.on_interaction(false), None);
	assert!(session.drawing().is_empty());
}

#[test]
fn insufficient_samples_are_reported_but_not_fatal() {
	let mut session = DrawingSession::default();
	session.update(Vec3::ZERO);
	session.begin_stroke();
	session.update(vec3(0.0, 0.0, 0.05));
	assert_eq!(
		session.end_stroke(),
		Some(Err(FitError::InsufficientSamples { count: 2 }))
	);
	assert_eq!(session.drawing().len(), 1);
	assert_eq!(session.project(Vec3::ONE), None);
}

#[test]
fn invalid_settings_are_rejected() {
	assert_eq!(
		CaptureSettings::builder().max_vertices(2).build(),
		Err(SettingsError::VertexCapTooSmall(2))
	);
	assert_eq!(
		CaptureSettings::builder().min_corner_angle(190.0).build(),
		Err(SettingsError::InvalidCornerAngle(190.0))
	);
	assert!(CaptureSettings::builder()
		.max_segment_distance(f32::NAN)
		.build()
		.is_err());
}
