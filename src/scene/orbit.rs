use super::constants::*;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
struct Drag {
    x: f32,
    y: f32,
}

/// Orbit camera around a fixed target: auto-rotates, drag rotates, polar
/// angle stays inside a band around the horizon. Zoom and pan do not exist.
///
/// Drag input is damped: it accumulates as a pending rotation that
/// `advance` releases gradually, so the view keeps gliding after release.
#[derive(Clone, Debug)]
pub struct OrbitControl {
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, zero looking down -Z from +Z.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
    rotate_speed: f32,
    min_polar: f32,
    max_polar: f32,
    damping: f32,
    /// Drag rotation not yet applied, (azimuth, polar).
    pending: Vec2,
    drag: Option<Drag>,
}

impl Default for OrbitControl {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, CAMERA_DISTANCE), Vec3::ZERO)
    }
}

impl OrbitControl {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(1e-4);
        let mut control = Self {
            target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            damping: ORBIT_DAMPING_FACTOR,
            pending: Vec2::ZERO,
            drag: None,
        };
        control.clamp_polar();
        control
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Damping factor in (0, 1]; 1 applies drag input on the next advance.
    pub fn set_damping(&mut self, factor: f32) {
        self.damping = factor.clamp(1e-3, 1.0);
    }

    /// Advance by `dt` seconds: auto-rotation (paused while dragging) plus
    /// the damped share of any pending drag rotation.
    pub fn advance(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        if self.auto_rotate && self.drag.is_none() {
            self.azimuth -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }
        if self.pending != Vec2::ZERO {
            let keep = (1.0 - self.damping).powf(dt * 60.0);
            let applied = self.pending * (1.0 - keep);
            self.pending -= applied;
            if self.pending.length_squared() < 1e-12 {
                self.pending = Vec2::ZERO;
            }
            self.azimuth += applied.x;
            self.polar += applied.y;
            self.clamp_polar();
        }
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = Some(Drag { x, y });
    }

    /// Queue the rotation for the pointer delta since the last drag sample.
    ///
    /// `viewport_height` is the element height in the same units as `x`/`y`.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32) {
        let Some(prev) = self.drag else {
            return;
        };
        let h = viewport_height.max(1.0);
        self.pending -= Vec2::new(x - prev.x, y - prev.y) * (TAU / h * self.rotate_speed);
        self.drag = Some(Drag { x, y });
    }

    /// Drag rotation still waiting to be applied, (azimuth, polar).
    pub fn pending_rotation(&self) -> Vec2 {
        self.pending
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.radius
    }

    fn clamp_polar(&mut self) {
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
    }
}
