use super::camera::Camera;
use super::clock::SceneClock;
use super::config::SceneParams;
use super::constants::FLOAT_OFFSET_RANGE;
use super::emblem::{Emblem, EmblemMaterial, FloatMotion};
use super::lattice::NodeLattice;
use super::lighting::LightRig;
use super::orbit::OrbitControl;
use super::palette::ThemePalette;
use super::particles::ParticleField;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Constructing,
    Running,
    TornDown,
}

/// Owns the clock, camera control, light rig and the three sub-scenes, and
/// advances them together once per frame.
pub struct SceneDriver {
    phase: Phase,
    clock: SceneClock,
    palette: ThemePalette,
    lights: LightRig,
    orbit: OrbitControl,
    particles: ParticleField,
    emblem: Emblem,
    lattice: NodeLattice,
    ticks: u64,
}

impl SceneDriver {
    pub fn new(params: &SceneParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let palette = params.theme.palette();
        let particles = ParticleField::new(params.theme, &mut rng);
        let float = FloatMotion::new(rng.gen::<f64>() * FLOAT_OFFSET_RANGE);
        let emblem = Emblem::new(EmblemMaterial::for_palette(&palette), float);
        log::info!(
            "[scene] constructed theme={:?} particles={} seed={:?}",
            params.theme,
            particles.len(),
            params.seed
        );
        Self {
            phase: Phase::Constructing,
            clock: SceneClock::new(),
            palette,
            lights: LightRig::studio(),
            orbit: OrbitControl::default(),
            particles,
            emblem,
            lattice: NodeLattice::new(),
            ticks: 0,
        }
    }

    /// Run one tick at `clock_seconds` since mount.
    ///
    /// Returns `false` once the scene has been torn down; nothing is updated
    /// in that case.
    pub fn advance(&mut self, clock_seconds: f64) -> bool {
        match self.phase {
            Phase::TornDown => return false,
            Phase::Constructing => {
                self.phase = Phase::Running;
                log::debug!("[scene] running");
            }
            Phase::Running => {}
        }
        let dt = self.clock.sync(clock_seconds);
        let t = self.clock.seconds();
        self.particles.advance(t);
        self.emblem.advance(self.clock.seconds_f64());
        self.lattice.advance(t);
        self.orbit.advance(dt);
        self.ticks += 1;
        true
    }

    /// Final transition; later calls are no-ops.
    pub fn teardown(&mut self) {
        if self.phase != Phase::TornDown {
            log::info!("[scene] torn down after {} ticks", self.ticks);
            self.phase = Phase::TornDown;
        }
    }

    /// Apply a hover edge to the emblem; returns `true` when it changed.
    pub fn set_emblem_hover(&mut self, hovered: bool) -> bool {
        if self.phase == Phase::TornDown {
            return false;
        }
        let changed = self.emblem.set_hovered(hovered);
        if changed {
            log::debug!("[pointer] emblem hover={}", hovered);
        }
        changed
    }

    /// Hit-test a world-space ray and update hover accordingly.
    ///
    /// Always `false` once torn down.
    pub fn hover_ray(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        if self.phase == Phase::TornDown {
            return false;
        }
        let hit = self.emblem.hit_test(ray_origin, ray_dir);
        self.set_emblem_hover(hit);
        hit
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::hero(self.orbit.eye(), self.orbit.target(), aspect)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn orbit(&self) -> &OrbitControl {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitControl {
        &mut self.orbit
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn emblem(&self) -> &Emblem {
        &self.emblem
    }

    pub fn lattice(&self) -> &NodeLattice {
        &self.lattice
    }
}
