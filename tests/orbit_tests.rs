// Host-side tests for the orbit camera control.

use glam::{Vec2, Vec3};
use portfolio_hero::scene::orbit::OrbitControl;
use portfolio_hero::scene::{ORBIT_MAX_POLAR, ORBIT_MIN_POLAR};
use std::f32::consts::{FRAC_PI_2, TAU};

#[test]
fn starts_in_front_of_the_scene() {
    let orbit = OrbitControl::default();
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, 9.0)).length() < 1e-4);
    assert!((orbit.polar() - FRAC_PI_2).abs() < 1e-6);
    assert!(orbit.auto_rotate());
    assert_eq!(orbit.target(), Vec3::ZERO);
}

#[test]
fn auto_rotate_turns_at_the_configured_speed() {
    let mut orbit = OrbitControl::default();
    let a0 = orbit.azimuth();
    orbit.advance(1.0);
    let expected = a0 - TAU / 60.0 * 0.4;
    assert!((orbit.azimuth() - expected).abs() < 1e-6);
    // Radius is preserved
    assert!((orbit.eye().length() - 9.0).abs() < 1e-4);
}

#[test]
fn auto_rotate_can_be_disabled() {
    let mut orbit = OrbitControl::default();
    orbit.set_auto_rotate(false);
    let a0 = orbit.azimuth();
    orbit.advance(5.0);
    assert_eq!(orbit.azimuth(), a0);
}

#[test]
fn dragging_pauses_auto_rotate() {
    let mut orbit = OrbitControl::default();
    orbit.begin_drag(10.0, 10.0);
    assert!(orbit.is_dragging());
    let a0 = orbit.azimuth();
    orbit.advance(1.0);
    assert_eq!(orbit.azimuth(), a0);
    orbit.end_drag();
    assert!(!orbit.is_dragging());
    orbit.advance(1.0);
    assert!(orbit.azimuth() < a0);
}

#[test]
fn horizontal_drag_rotates_by_viewport_fraction() {
    let mut orbit = OrbitControl::default();
    orbit.set_auto_rotate(false);
    let a0 = orbit.azimuth();
    orbit.begin_drag(100.0, 100.0);
    orbit.drag_to(150.0, 100.0, 500.0);
    // Queued, not applied until the next advance
    assert_eq!(orbit.azimuth(), a0);
    assert!((orbit.pending_rotation().x + TAU * 50.0 / 500.0).abs() < 1e-6);
    // Deltas are measured from the last sample
    orbit.drag_to(150.0, 100.0, 500.0);
    orbit.advance(10.0);
    assert!((orbit.azimuth() - (a0 - TAU * 50.0 / 500.0)).abs() < 1e-5);
    assert_eq!(orbit.pending_rotation(), Vec2::ZERO);
}

#[test]
fn released_drag_keeps_gliding() {
    let mut orbit = OrbitControl::default();
    orbit.set_auto_rotate(false);
    let a0 = orbit.azimuth();
    let total = TAU * 50.0 / 500.0;
    orbit.begin_drag(100.0, 100.0);
    orbit.drag_to(150.0, 100.0, 500.0);
    orbit.end_drag();

    // One 60 Hz frame releases the damping share of the pending rotation
    orbit.advance(1.0 / 60.0);
    let first = a0 - orbit.azimuth();
    assert!((first - total * 0.05).abs() < 1e-5);

    orbit.advance(1.0 / 60.0);
    let second = a0 - orbit.azimuth();
    assert!(second > first);
    assert!(second < total);
}

#[test]
fn damping_does_not_depend_on_frame_rate() {
    let mut a = OrbitControl::default();
    let mut b = OrbitControl::default();
    for o in [&mut a, &mut b] {
        o.set_auto_rotate(false);
        o.begin_drag(0.0, 0.0);
        o.drag_to(80.0, 0.0, 400.0);
        o.end_drag();
    }
    a.advance(2.0 / 60.0);
    b.advance(1.0 / 60.0);
    b.advance(1.0 / 60.0);
    assert!((a.azimuth() - b.azimuth()).abs() < 1e-5);
}

#[test]
fn undamped_drag_applies_on_next_advance() {
    let mut orbit = OrbitControl::default();
    orbit.set_auto_rotate(false);
    orbit.set_damping(1.0);
    let a0 = orbit.azimuth();
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(100.0, 0.0, 500.0);
    orbit.advance(1.0 / 60.0);
    assert!((orbit.azimuth() - (a0 - TAU * 100.0 / 500.0)).abs() < 1e-5);
}

#[test]
fn polar_angle_is_clamped() {
    let mut orbit = OrbitControl::default();
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(0.0, 10_000.0, 500.0);
    orbit.advance(10.0);
    assert!((orbit.polar() - ORBIT_MIN_POLAR).abs() < 1e-6);
    orbit.drag_to(0.0, -10_000.0, 500.0);
    orbit.advance(10.0);
    assert!((orbit.polar() - ORBIT_MAX_POLAR).abs() < 1e-6);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut orbit = OrbitControl::default();
    let before = (orbit.azimuth(), orbit.polar());
    orbit.drag_to(300.0, 300.0, 500.0);
    assert_eq!((orbit.azimuth(), orbit.polar()), before);
}

#[test]
fn new_clamps_an_overhead_eye() {
    let orbit = OrbitControl::new(Vec3::new(0.0, 9.0, 0.0), Vec3::ZERO);
    assert!((orbit.polar() - ORBIT_MIN_POLAR).abs() < 1e-6);
}
