// Host-side tests for the particle field.

use portfolio_hero::scene::particles::ParticleField;
use portfolio_hero::scene::{Theme, PARTICLE_COUNT, PARTICLE_DRIFT_STEP};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(seed: u64, theme: Theme) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(theme, &mut rng)
}

#[test]
fn initial_particles_fill_the_cube() {
    let f = field(1, Theme::Dark);
    assert_eq!(f.len(), PARTICLE_COUNT);
    assert!(!f.is_empty());
    for p in f.particles() {
        for c in p.position.to_array() {
            assert!((-12.5..=12.5).contains(&c), "coordinate {} out of range", c);
        }
        assert!((1.0..=3.0).contains(&p.size), "size {} out of range", p.size);
    }
}

#[test]
fn dark_colours_follow_the_palette_formula() {
    let f = field(2, Theme::Dark);
    for p in f.particles() {
        assert!((0.4..=1.0).contains(&p.color.x));
        assert!((0.5..=1.0).contains(&p.color.y));
        assert_eq!(p.color.z, 1.0);
    }
}

#[test]
fn light_colours_follow_the_palette_formula() {
    let f = field(3, Theme::Light);
    for p in f.particles() {
        assert!((0.2..=0.6).contains(&p.color.x));
        assert!((0.3..=0.7).contains(&p.color.y));
        assert!((0.8..=1.0).contains(&p.color.z));
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let a = field(42, Theme::Dark);
    let b = field(42, Theme::Dark);
    let c = field(43, Theme::Dark);
    let pa: Vec<_> = a.particles().iter().map(|p| p.position).collect();
    let pb: Vec<_> = b.particles().iter().map(|p| p.position).collect();
    let pc: Vec<_> = c.particles().iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
    assert_ne!(pa, pc);
}

#[test]
fn rotation_is_a_function_of_time() {
    let mut f = field(4, Theme::Dark);
    for t in [0.0_f32, 1.0, 7.5, 120.0] {
        f.advance(t);
        let (pitch, yaw) = f.rotation();
        assert!((pitch - (t * 0.05).sin() * 0.15).abs() < 1e-6);
        assert!((yaw - t * 0.03).abs() < 1e-6);
    }
}

#[test]
fn vertical_drift_accumulates_across_ticks() {
    let mut f = field(7, Theme::Dark);
    let initial: Vec<glam::Vec3> = f.particles().iter().map(|p| p.position).collect();
    let mut expected: Vec<f32> = initial.iter().map(|p| p.y).collect();

    let dt = 1.0 / 60.0;
    for k in 1..=120 {
        let t = k as f32 * dt;
        f.advance(t);
        for (i, y) in expected.iter_mut().enumerate() {
            *y += (t + i as f32).sin() * PARTICLE_DRIFT_STEP;
        }
    }

    for (i, p) in f.particles().iter().enumerate() {
        assert!((p.position.y - expected[i]).abs() < 1e-5, "particle {}", i);
        // Only y drifts
        assert_eq!(p.position.x, initial[i].x);
        assert_eq!(p.position.z, initial[i].z);
    }
}

#[test]
fn replaying_a_tick_keeps_drifting() {
    // Heights are incremented in place, so the same t applied twice moves
    // the particle twice.
    let mut f = field(8, Theme::Dark);
    let y0 = f.particles()[0].position.y;
    f.advance(1.0);
    f.advance(1.0);
    let expected = y0 + 2.0 * (1.0_f32).sin() * PARTICLE_DRIFT_STEP;
    assert!((f.particles()[0].position.y - expected).abs() < 1e-6);
}

#[test]
fn instances_normalise_size_and_carry_opacity() {
    let f = field(9, Theme::Dark);
    let mut out = Vec::new();
    f.write_instances(&mut out);
    assert_eq!(out.len(), PARTICLE_COUNT);
    for (inst, p) in out.iter().zip(f.particles()) {
        assert!((inst.size - p.size / 2.0).abs() < 1e-6);
        assert!((inst.color[3] - 0.8).abs() < 1e-6);
        assert_eq!(inst.position, p.position.to_array());
    }
    // Rewriting replaces rather than appends
    f.write_instances(&mut out);
    assert_eq!(out.len(), PARTICLE_COUNT);
}
