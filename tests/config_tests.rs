// Host-side tests for mount parameters, themes and the shared clock.

use portfolio_hero::scene::clock::SceneClock;
use portfolio_hero::scene::palette::{srgb_hex, srgb_to_linear};
use portfolio_hero::scene::{SceneParams, Theme};

#[test]
fn defaults_are_dark_and_unseeded() {
    let p = SceneParams::default();
    assert_eq!(p.theme, Theme::Dark);
    assert_eq!(p.seed, None);
    assert_eq!(SceneParams::from_attributes(None, None), p);
}

#[test]
fn attributes_override_defaults() {
    let p = SceneParams::from_attributes(Some(" Light "), Some("1234"));
    assert_eq!(p.theme, Theme::Light);
    assert_eq!(p.seed, Some(1234));
}

#[test]
fn bad_attributes_fall_back() {
    let p = SceneParams::from_attributes(Some("sepia"), Some("-3"));
    assert_eq!(p, SceneParams::default());
    let p = SceneParams::from_attributes(Some("DARK"), Some("not a number"));
    assert_eq!(p.theme, Theme::Dark);
    assert_eq!(p.seed, None);
}

#[test]
fn theme_parse_is_case_insensitive() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("LiGhT"), Some(Theme::Light));
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn srgb_conversion_hits_known_points() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-5);
    // Mid grey is well below half in linear light
    assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
    let white = srgb_hex(0xffffff);
    assert!((white - glam::Vec3::ONE).length() < 1e-5);
    let blue = srgb_hex(0x0000ff);
    assert_eq!(blue.x, 0.0);
    assert_eq!(blue.y, 0.0);
}

#[test]
fn palettes_differ_between_themes() {
    let dark = Theme::Dark.palette();
    let light = Theme::Light.palette();
    assert_ne!(dark.emblem_color, light.emblem_color);
    assert_ne!(dark.node_color, light.node_color);
    // Indigo emblem: blue dominates
    assert!(dark.emblem_color.z > dark.emblem_color.x);
    assert!(dark.emblem_color.z > dark.emblem_color.y);
}

#[test]
fn clock_is_monotonic() {
    let mut clock = SceneClock::new();
    assert_eq!(clock.seconds(), 0.0);
    assert!((clock.sync(0.5) - 0.5).abs() < 1e-6);
    assert!((clock.sync(0.75) - 0.25).abs() < 1e-6);
    assert_eq!(clock.sync(0.1), 0.0);
    assert_eq!(clock.sync(f64::NAN), 0.0);
    assert_eq!(clock.sync(0.75), 0.0);
    assert_eq!(clock.seconds_f64(), 0.75);
}
