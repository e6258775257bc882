// Host-side tests for scene constants and their relationships.
// The constants file is import-free, so it is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/scene/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_consistent() {
    assert_eq!(PARTICLE_COUNT, 800);
    assert!(PARTICLE_CUBE_SIDE > 0.0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    // Mean sits halfway through the size range
    assert!((PARTICLE_SIZE_MEAN - (PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN / 2.0)).abs() < 1e-6);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn emblem_scales_grow_on_hover() {
    assert!(EMBLEM_SCALE_HOVERED > EMBLEM_SCALE);
    assert!((EMBLEM_SCALE - 2.7).abs() < 1e-6);
    assert!((EMBLEM_SCALE_HOVERED - 3.0).abs() < 1e-6);
    assert!(EMBLEM_METALNESS <= 1.0 && EMBLEM_ROUGHNESS >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lattice_opacities_are_ordered() {
    // Cross edges are fainter than the wireframe; both are translucent
    assert!(CROSS_EDGE_OPACITY < EDGE_OPACITY);
    assert!(EDGE_OPACITY < 1.0);
    assert!(NODE_GLOW_OPACITY < 1.0);
    assert_eq!(LATTICE_NODE_COUNT, 8);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_band_contains_the_horizon() {
    let horizon = std::f32::consts::FRAC_PI_2;
    assert!(ORBIT_MIN_POLAR < horizon);
    assert!(ORBIT_MAX_POLAR > horizon);
    assert!(ORBIT_AUTO_ROTATE_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_fog_ranges_are_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(FOG_NEAR < FOG_FAR);
    // Camera starts in front of the fog
    assert!(CAMERA_DISTANCE < FOG_NEAR);
    assert!(TAGLINE_PERIOD_SEC > 0.0);
}
