use super::constants::*;
use super::palette::ThemePalette;
use super::picking::ray_sphere;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Fixed surface parameters of the emblem sphere.
#[derive(Clone, Copy, Debug)]
pub struct EmblemMaterial {
    pub color: Vec3,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub distort: f32,
    pub distort_speed: f32,
}

impl EmblemMaterial {
    pub fn for_palette(palette: &ThemePalette) -> Self {
        Self {
            color: palette.emblem_color,
            emissive: palette.emblem_emissive,
            emissive_intensity: EMBLEM_EMISSIVE_INTENSITY,
            metalness: EMBLEM_METALNESS,
            roughness: EMBLEM_ROUGHNESS,
            clearcoat: EMBLEM_CLEARCOAT,
            clearcoat_roughness: EMBLEM_CLEARCOAT_ROUGHNESS,
            distort: EMBLEM_DISTORT,
            distort_speed: EMBLEM_DISTORT_SPEED,
        }
    }
}

/// Gentle idle bob and sway applied around the emblem.
#[derive(Clone, Copy, Debug)]
pub struct FloatMotion {
    /// Phase offset in seconds so separate mounts do not move in lockstep.
    pub offset: f64,
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            speed: FLOAT_SPEED,
            rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
        }
    }

    /// Rotation (x, y, z) and vertical lift at elapsed time `t`.
    pub fn sample(&self, t: f64) -> (Vec3, f32) {
        let s = ((self.offset + t) / 4.0 * self.speed as f64) as f32;
        let rotation =
            Vec3::new(s.cos() / 8.0, s.sin() / 8.0, s.sin() / 20.0) * self.rotation_intensity;
        let lift = s.sin() / 10.0 * self.float_intensity;
        (rotation, lift)
    }
}

/// The reflective sphere at the centre of the hero.
pub struct Emblem {
    material: EmblemMaterial,
    float: FloatMotion,
    /// Mesh rotation (x, y); reassigned from elapsed time each tick.
    rotation: (f32, f32),
    float_rotation: Vec3,
    lift: f32,
    hovered: bool,
}

impl Emblem {
    pub fn new(material: EmblemMaterial, float: FloatMotion) -> Self {
        let (float_rotation, lift) = float.sample(0.0);
        Self {
            material,
            float,
            rotation: (0.0, 0.0),
            float_rotation,
            lift,
            hovered: false,
        }
    }

    pub fn advance(&mut self, t: f64) {
        let ts = t as f32;
        self.rotation = (ts * EMBLEM_PITCH_RATE, ts * EMBLEM_YAW_RATE);
        let (float_rotation, lift) = self.float.sample(t);
        self.float_rotation = float_rotation;
        self.lift = lift;
    }

    /// Update the hover flag; returns `true` when it actually changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn scale(&self) -> f32 {
        if self.hovered {
            EMBLEM_SCALE_HOVERED
        } else {
            EMBLEM_SCALE
        }
    }

    pub fn rotation(&self) -> (f32, f32) {
        self.rotation
    }

    pub fn material(&self) -> &EmblemMaterial {
        &self.material
    }

    /// World-space centre after the float lift.
    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.lift, 0.0)
    }

    pub fn model_matrix(&self) -> Mat4 {
        let fr = self.float_rotation;
        let float = Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, fr.x, fr.y, fr.z),
            self.center(),
        );
        let (rx, ry) = self.rotation;
        let mesh = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale()),
            Quat::from_euler(EulerRot::XYZ, rx, ry, 0.0),
            Vec3::ZERO,
        );
        float * mesh
    }

    /// Whether a world-space ray hits the emblem's hover region.
    pub fn hit_test(&self, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        ray_sphere(ray_origin, ray_dir, self.center(), EMBLEM_RADIUS * self.scale()).is_some()
    }
}
