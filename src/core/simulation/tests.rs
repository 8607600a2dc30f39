use super::*;
use approx::assert_relative_eq;

const DT: f32 = 1.0 / 60.0;

fn scene_from_endpoints() -> SimulationClock {
    let points = vec![
        ControlPoint::locked(Vec2::new(0.0, 100.0)),
        ControlPoint::free(Vec2::new(30.0, 60.0)),
        ControlPoint::free(Vec2::new(70.0, 40.0)),
        ControlPoint::locked(Vec2::new(100.0, 0.0)),
    ];
    SimulationClock::from_points(points, Vec2::new(50.0, 50.0), SimulationOptions::default())
        .expect("Layout gültig")
}

fn positions(clock: &SimulationClock) -> Vec<Vec2> {
    clock.control_points().iter().map(|p| p.position).collect()
}

// ── Aufbau ──

#[test]
fn test_default_scene_layout() {
    let clock = SimulationClock::new(SimulationOptions::default());
    let points = clock.control_points();
    assert_eq!(points.len(), CONTROL_POINT_COUNT);
    assert_eq!(points[0].position, Vec2::new(40.0, 720.0));
    assert_eq!(points[3].position, Vec2::new(360.0, 80.0));
    assert_eq!(points[1].position, Vec2::new(90.0, 400.0));
    assert_eq!(points[2].position, Vec2::new(310.0, 400.0));
    assert_eq!(clock.center(), Vec2::new(200.0, 400.0));

    let locked: Vec<bool> = points.iter().map(|p| p.locked).collect();
    assert_eq!(locked, vec![true, false, false, true]);
    assert!(points.iter().all(|p| p.target == p.position));
}

#[test]
fn test_from_points_rejects_wrong_count() {
    let points = vec![ControlPoint::locked(Vec2::ZERO); 3];
    let err = SimulationClock::from_points(points, Vec2::ZERO, SimulationOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("4"));
}

#[test]
fn test_from_points_rejects_wrong_lock_layout() {
    let points = vec![
        ControlPoint::free(Vec2::ZERO),
        ControlPoint::free(Vec2::ZERO),
        ControlPoint::free(Vec2::ZERO),
        ControlPoint::locked(Vec2::ZERO),
    ];
    assert!(
        SimulationClock::from_points(points, Vec2::ZERO, SimulationOptions::default()).is_err()
    );
}

#[test]
fn test_from_points_rejects_non_finite() {
    let mut points = scene_from_endpoints().control_points().to_vec();
    points[1].target = Vec2::new(f32::NAN, 0.0);
    assert!(
        SimulationClock::from_points(points, Vec2::ZERO, SimulationOptions::default()).is_err()
    );
}

// ── Tick ──

#[test]
fn test_tick_without_target_change_keeps_positions() {
    let mut clock = scene_from_endpoints();
    let before = positions(&clock);

    let snapshot = clock.tick(DT, None);

    assert_eq!(snapshot.start(), Some(Vec2::new(0.0, 100.0)));
    assert_eq!(snapshot.end(), Some(Vec2::new(100.0, 0.0)));
    assert_eq!(snapshot.control_points, before);
    assert_eq!(positions(&clock), before);
}

#[test]
fn test_ordinary_frames_use_single_spring_step() {
    let orientation = Orientation::new(0.3, 0.0);
    // 60 Hz mit leichtem Jitter, 30 Hz als Obergrenze
    for dt in [0.0167, 0.018, 0.02, 1.0 / 30.0] {
        let mut clock = scene_from_endpoints();
        let (target_1, target_2) =
            TiltMapper::default().map_to_targets(orientation, clock.center());
        let mut expected_1 = clock.control_points()[1];
        let mut expected_2 = clock.control_points()[2];
        expected_1.set_target(target_1);
        expected_2.set_target(target_2);
        let spring = SpringIntegrator::default();
        spring.integrate(&mut expected_1, dt);
        spring.integrate(&mut expected_2, dt);

        clock.tick(dt, Some(orientation));

        assert_eq!(clock.control_points()[1], expected_1, "dt={dt}");
        assert_eq!(clock.control_points()[2], expected_2, "dt={dt}");
    }
}

#[test]
fn test_tick_invalid_dt_skips_physics() {
    let mut clock = scene_from_endpoints();
    // Griffe aus der Ruhe bringen
    clock.tick(DT, Some(Orientation::new(0.4, -0.3)));
    let before = positions(&clock);

    for dt in [0.0, -DT, f32::NAN, f32::INFINITY] {
        let snapshot = clock.tick(dt, Some(Orientation::new(-1.0, 1.0)));
        assert_eq!(snapshot.control_points, before);
    }
    assert_eq!(positions(&clock), before);
    assert_eq!(clock.frame_count(), 5);
}

#[test]
fn test_tick_orientation_updates_handle_targets_only() {
    let mut clock = scene_from_endpoints();
    clock.tick(DT, Some(Orientation::new(0.0, 0.0)));

    let points = clock.control_points();
    assert_eq!(points[1].target, Vec2::new(50.0 - 70.0, 50.0 + 20.0));
    assert_eq!(points[2].target, Vec2::new(50.0 + 70.0, 50.0 - 20.0));
    assert_eq!(points[0].position, Vec2::new(0.0, 100.0));
    assert_eq!(points[3].position, Vec2::new(100.0, 0.0));
}

#[test]
fn test_missing_orientation_keeps_previous_targets() {
    let mut clock = scene_from_endpoints();
    clock.tick(DT, Some(Orientation::new(0.2, 0.1)));
    let targets: Vec<Vec2> = clock.control_points().iter().map(|p| p.target).collect();

    for _ in 0..10 {
        clock.tick(DT, None);
    }
    let after: Vec<Vec2> = clock.control_points().iter().map(|p| p.target).collect();
    assert_eq!(targets, after);
}

#[test]
fn test_non_finite_orientation_is_ignored() {
    let mut clock = scene_from_endpoints();
    let before: Vec<Vec2> = clock.control_points().iter().map(|p| p.target).collect();
    clock.tick(DT, Some(Orientation::new(f32::NAN, 0.0)));
    let after: Vec<Vec2> = clock.control_points().iter().map(|p| p.target).collect();
    assert_eq!(before, after);
}

#[test]
fn test_handles_settle_on_new_targets() {
    let mut clock = scene_from_endpoints();
    let orientation = Orientation::new(0.3, -0.2);
    for _ in 0..600 {
        clock.tick(DT, Some(orientation));
    }
    assert!(clock.is_settled(1e-2));

    let (t1, t2) = TiltMapper::default().map_to_targets(orientation, clock.center());
    assert_relative_eq!(clock.control_points()[1].position.x, t1.x, epsilon = 1e-2);
    assert_relative_eq!(clock.control_points()[2].position.y, t2.y, epsilon = 1e-2);
}

#[test]
fn test_locked_endpoints_never_move() {
    let mut clock = SimulationClock::default();
    let start = clock.control_points()[0].position;
    let end = clock.control_points()[3].position;
    for i in 0..200 {
        let roll = (i as f32 * 0.1).sin();
        let snapshot = clock.tick(DT * (1 + i % 3) as f32, Some(Orientation::new(roll, -roll)));
        assert_eq!(snapshot.start(), Some(start));
        assert_eq!(snapshot.end(), Some(end));
    }
}

#[test]
fn test_stalled_frame_is_clamped_and_stable() {
    let mut clock = scene_from_endpoints();
    clock.tick(DT, Some(Orientation::new(1.0, 1.0)));

    // 5 Sekunden Stillstand → wird auf max_frame_dt gekappt und unterteilt
    let snapshot = clock.tick(5.0, None);
    assert!(snapshot
        .control_points
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite()));
    let handle = clock.control_points()[1];
    assert!(handle.distance_to_target() < 200.0);
}

// ── Snapshot ──

#[test]
fn test_snapshot_shape_follows_options() {
    let mut options = SimulationOptions::default();
    options.polyline_samples = 21;
    options.tangent_samples = 3;
    options.tangent_length = 10.0;
    let mut clock = SimulationClock::new(options);

    let snapshot = clock.tick(DT, None);
    assert_eq!(snapshot.polyline.len(), 21);
    assert_eq!(snapshot.tangent_segments.len(), 3);
    assert_eq!(snapshot.control_points.len(), 4);
    for seg in &snapshot.tangent_segments {
        assert_relative_eq!(seg.direction().length(), 10.0, epsilon = 1e-3);
    }
}

#[test]
fn test_default_snapshot_sizes() {
    let snapshot = SimulationClock::default().snapshot();
    assert_eq!(snapshot.polyline.len(), 101);
    assert_eq!(snapshot.tangent_segments.len(), 8);
}

#[test]
fn test_snapshot_does_not_advance_time() {
    let clock = scene_from_endpoints();
    let a = clock.snapshot();
    let b = clock.snapshot();
    assert_eq!(a, b);
    assert_eq!(clock.frame_count(), 0);
}

#[test]
fn test_tick_with_slot_reads_latest_sample() {
    let mut clock = scene_from_endpoints();
    let slot = OrientationSlot::new();

    clock.tick_with_slot(DT, &slot);
    assert_eq!(clock.control_points()[1].target, Vec2::new(30.0, 60.0));

    slot.publish(Orientation::new(0.1, 0.0));
    slot.publish(Orientation::new(0.0, 0.0));
    clock.tick_with_slot(DT, &slot);
    assert_eq!(clock.control_points()[1].target, Vec2::new(-20.0, 70.0));
}

#[test]
fn test_set_center_applies_on_next_sample() {
    let mut clock = scene_from_endpoints();
    clock.set_center(Vec2::new(0.0, 0.0));
    assert_eq!(clock.control_points()[1].target, Vec2::new(30.0, 60.0));

    clock.tick(DT, Some(Orientation::default()));
    assert_eq!(clock.control_points()[1].target, Vec2::new(-70.0, 20.0));

    clock.set_center(Vec2::new(f32::NAN, 0.0));
    assert_eq!(clock.center(), Vec2::ZERO);
}
