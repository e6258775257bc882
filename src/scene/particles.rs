use super::constants::*;
use super::palette::Theme;
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
}

/// Per-particle data uploaded to the GPU every tick.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Fixed cloud of drifting points that slowly tumbles around the origin.
pub struct ParticleField {
    particles: Vec<Particle>,
    /// (pitch, yaw) of the whole cloud in radians.
    rotation: (f32, f32),
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Self {
        let half = PARTICLE_CUBE_SIDE * 0.5;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let x = rng.gen::<f32>() * PARTICLE_CUBE_SIDE - half;
                let y = rng.gen::<f32>() * PARTICLE_CUBE_SIDE - half;
                let z = rng.gen::<f32>() * PARTICLE_CUBE_SIDE - half;
                let color = theme.particle_color(rng);
                let size = PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN;
                Particle {
                    position: Vec3::new(x, y, z),
                    color,
                    size,
                }
            })
            .collect();
        Self {
            particles,
            rotation: (0.0, 0.0),
        }
    }

    /// Per-tick update at elapsed time `t` (seconds).
    ///
    /// The cloud orientation is reassigned from `t`. Particle heights are
    /// incremented in place, so they keep drifting for as long as the scene
    /// runs; this matches the behaviour the site has always shown.
    pub fn advance(&mut self, t: f32) {
        self.rotation = (
            (t * FIELD_PITCH_RATE).sin() * FIELD_PITCH_AMPLITUDE,
            t * FIELD_YAW_RATE,
        );
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position.y += (t + i as f32).sin() * PARTICLE_DRIFT_STEP;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Cloud orientation as `(pitch, yaw)`.
    pub fn rotation(&self) -> (f32, f32) {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        let (pitch, yaw) = self.rotation;
        Mat4::from_euler(EulerRot::XYZ, pitch, yaw, 0.0)
    }

    /// Pack the current particle state into `out`, replacing its contents.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| ParticleInstance {
            position: p.position.to_array(),
            size: p.size / PARTICLE_SIZE_MEAN,
            color: [p.color.x, p.color.y, p.color.z, PARTICLE_OPACITY],
        }));
    }
}
