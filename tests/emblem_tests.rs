// Host-side tests for the central emblem and its float motion.

use glam::Vec3;
use portfolio_hero::scene::emblem::{Emblem, EmblemMaterial, FloatMotion};
use portfolio_hero::scene::Theme;

fn emblem(offset: f64) -> Emblem {
    let material = EmblemMaterial::for_palette(&Theme::Dark.palette());
    Emblem::new(material, FloatMotion::new(offset))
}

#[test]
fn scale_depends_only_on_hover() {
    let mut e = emblem(0.0);
    for t in [0.0, 1.0, 33.3, 1000.0] {
        e.advance(t);
        e.set_hovered(false);
        assert_eq!(e.scale(), 2.7);
        e.set_hovered(true);
        assert_eq!(e.scale(), 3.0);
    }
}

#[test]
fn hover_reports_edges_only() {
    let mut e = emblem(0.0);
    assert!(!e.is_hovered());
    assert!(e.set_hovered(true));
    assert!(!e.set_hovered(true));
    assert!(e.is_hovered());
    assert!(e.set_hovered(false));
    assert!(!e.set_hovered(false));
}

#[test]
fn rotation_is_pure_in_time() {
    let mut walked = emblem(0.0);
    for t in [0.5, 1.0, 2.0, 3.0, 5.0] {
        walked.advance(t);
        let (rx, ry) = walked.rotation();
        assert_eq!(rx, (t as f32) * 0.12);
        assert_eq!(ry, (t as f32) * 0.2);
    }
    let mut fresh = emblem(0.0);
    fresh.advance(5.0);
    assert_eq!(fresh.rotation(), walked.rotation());
    assert_eq!(fresh.model_matrix(), walked.model_matrix());
}

#[test]
fn float_motion_matches_its_formula() {
    let float = FloatMotion::new(10.0);
    let (rot, lift) = float.sample(2.0);
    let s = (12.0_f64 / 4.0 * 1.2) as f32;
    assert!((lift - s.sin() / 10.0 * 0.8).abs() < 1e-6);
    assert!((rot.x - s.cos() / 8.0 * 0.4).abs() < 1e-6);
    assert!((rot.y - s.sin() / 8.0 * 0.4).abs() < 1e-6);
    assert!((rot.z - s.sin() / 20.0 * 0.4).abs() < 1e-6);
    // Sampling twice gives the same answer
    assert_eq!(float.sample(2.0), (rot, lift));
}

#[test]
fn float_lift_stays_small() {
    let float = FloatMotion::new(1234.5);
    for i in 0..1000 {
        let (rot, lift) = float.sample(i as f64 * 0.37);
        assert!(lift.abs() <= 0.08 + 1e-6);
        assert!(rot.abs().max_element() <= 0.05 + 1e-6);
    }
}

#[test]
fn hit_region_grows_with_hover() {
    let mut e = emblem(0.0);
    e.advance(0.0);
    // Lift is zero at s = 0, so the centre is the origin.
    assert!(e.center().length() < 1e-6);
    let ro = Vec3::new(2.85, 0.0, 9.0);
    let rd = Vec3::NEG_Z;
    assert!(!e.hit_test(ro, rd));
    e.set_hovered(true);
    assert!(e.hit_test(ro, rd));
    // Straight through the middle always hits
    assert!(e.hit_test(Vec3::new(0.0, 0.0, 9.0), rd));
    // Pointing away never does
    assert!(!e.hit_test(Vec3::new(0.0, 0.0, 9.0), Vec3::Z));
}

#[test]
fn material_comes_from_the_theme() {
    let dark = EmblemMaterial::for_palette(&Theme::Dark.palette());
    let light = EmblemMaterial::for_palette(&Theme::Light.palette());
    assert_ne!(dark.color, light.color);
    assert_eq!(dark.metalness, 0.95);
    assert_eq!(dark.roughness, 0.05);
    assert_eq!(dark.distort, 0.35);
    assert_eq!(dark.emissive_intensity, 0.5);
}
