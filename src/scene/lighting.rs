use super::camera::Camera;
use super::constants::{FOG_FAR, FOG_NEAR};
use super::palette::srgb_hex;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Half-angle of the cone in radians.
    pub angle: f32,
    /// Fraction of the cone that fades out, 0..1.
    pub penumbra: f32,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Cosines of the outer and inner cone edges.
    pub fn cone_cos(&self) -> (f32, f32) {
        let outer = self.angle.cos();
        let inner = (self.angle * (1.0 - self.penumbra)).cos();
        (outer, inner)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Fog blend for a fragment at view-space `depth`; smoothstep between
    /// `near` and `far`, mirrored in `scene.wgsl`.
    pub fn factor(&self, depth: f32) -> f32 {
        let span = (self.far - self.near).max(1e-4);
        let x = ((depth - self.near) / span).clamp(0.0, 1.0);
        x * x * (3.0 - 2.0 * x)
    }

    /// Fog blend for a world-space point seen through `camera`.
    pub fn factor_at(&self, camera: &Camera, point: Vec3) -> f32 {
        self.factor(camera.view_depth(point))
    }
}

/// The hero's fixed light rig, background and fog.
#[derive(Clone, Debug)]
pub struct LightRig {
    pub background: Vec3,
    pub fog: Fog,
    pub ambient: f32,
    pub points: [PointLight; 3],
    pub spot: SpotLight,
}

impl LightRig {
    pub fn studio() -> Self {
        let backdrop = srgb_hex(0x0a0a0a);
        Self {
            background: backdrop,
            fog: Fog {
                color: backdrop,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            ambient: 0.25,
            points: [
                PointLight {
                    position: Vec3::new(10.0, 10.0, 10.0),
                    color: srgb_hex(0x60a5fa),
                    intensity: 1.5,
                },
                PointLight {
                    position: Vec3::new(-10.0, -10.0, -10.0),
                    color: srgb_hex(0x818cf8),
                    intensity: 1.0,
                },
                PointLight {
                    position: Vec3::new(5.0, -5.0, 5.0),
                    color: srgb_hex(0xc084fc),
                    intensity: 0.6,
                },
            ],
            spot: SpotLight {
                position: Vec3::new(0.0, 15.0, 0.0),
                target: Vec3::ZERO,
                color: srgb_hex(0xa5b4fc),
                intensity: 0.8,
                angle: 0.4,
                penumbra: 1.0,
            },
        }
    }
}
