// Host-side tests for camera math and pointer picking.

use glam::Vec3;
use portfolio_hero::scene::picking::{ray_sphere, screen_to_world_ray};
use portfolio_hero::scene::Camera;

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-6);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_misses() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 2.0).unwrap();
    assert!((t - 2.0).abs() < 1e-6);
}

#[test]
fn hero_camera_lens() {
    let cam = Camera::hero(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, 2.0);
    assert!((cam.fovy_radians - 55.0_f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, 0.1);
    assert_eq!(cam.zfar, 1000.0);
    // Invalid aspect falls back to square
    assert_eq!(Camera::hero(Vec3::Z, Vec3::ZERO, 0.0).aspect, 1.0);
    assert_eq!(Camera::hero(Vec3::Z, Vec3::ZERO, f32::NAN).aspect, 1.0);
}

#[test]
fn screen_centre_ray_points_at_target() {
    let cam = Camera::hero(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, 800.0 / 600.0);
    let (ro, rd) = screen_to_world_ray(&cam, 800.0, 600.0, 400.0, 300.0);
    assert_eq!(ro, cam.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn screen_edges_map_to_expected_sides() {
    let cam = Camera::hero(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, 1.0);
    let (_, right) = screen_to_world_ray(&cam, 500.0, 500.0, 500.0, 250.0);
    let (_, top) = screen_to_world_ray(&cam, 500.0, 500.0, 250.0, 0.0);
    assert!(right.x > 0.0);
    assert!(top.y > 0.0);
    // Top edge sits half a vertical field of view above the axis
    let half_fov = top.y.atan2(-top.z);
    assert!((half_fov - 27.5_f32.to_radians()).abs() < 1e-3);
}

#[test]
fn emblem_at_rest_is_hit_from_screen_centre() {
    let cam = Camera::hero(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, 1.5);
    let (ro, rd) = screen_to_world_ray(&cam, 1200.0, 800.0, 600.0, 400.0);
    assert!(ray_sphere(ro, rd, Vec3::ZERO, 2.7).is_some());
    // Far corner misses
    let (ro, rd) = screen_to_world_ray(&cam, 1200.0, 800.0, 0.0, 0.0);
    assert!(ray_sphere(ro, rd, Vec3::ZERO, 2.7).is_none());
}
