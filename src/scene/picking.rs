use super::camera::Camera;
use glam::{Vec3, Vec4};

/// Nearest non-negative hit distance of a ray against a sphere.
///
/// `ray_dir` must be normalized. A ray starting inside the sphere reports
/// the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Compute a world-space ray from pixel coordinates in a `width` x `height`
/// viewport.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    camera: &Camera,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
