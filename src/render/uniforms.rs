use crate::scene::lighting::{PointLight, SpotLight};
use crate::scene::{
    Camera, SceneDriver, CROSS_EDGE_OPACITY, EDGE_OPACITY, NODE_EMISSIVE_INTENSITY,
    NODE_GLOW_OPACITY, NODE_METALNESS, NODE_ROUGHNESS, PARTICLE_POINT_SIZE, TONE_MAPPING_EXPOSURE,
};
use glam::{Mat4, Vec3};

const LIGHT_KIND_POINT: f32 = 0.0;
const LIGHT_KIND_SPOT: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    position: [f32; 4],
    color: [f32; 4],
    direction: [f32; 4],
    cone: [f32; 4],
}

impl LightPacked {
    fn point(light: &PointLight) -> Self {
        Self {
            position: light.position.extend(LIGHT_KIND_POINT).to_array(),
            color: light.color.extend(light.intensity).to_array(),
            direction: [0.0, -1.0, 0.0, -1.0],
            cone: [-1.0, 0.0, 0.0, 0.0],
        }
    }

    fn spot(light: &SpotLight) -> Self {
        let (outer, inner) = light.cone_cos();
        Self {
            position: light.position.extend(LIGHT_KIND_SPOT).to_array(),
            color: light.color.extend(light.intensity).to_array(),
            direction: light.direction().extend(outer).to_array(),
            cone: [inner, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    points_model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    viewport: [f32; 4],
    fog: [f32; 4],
    view_fwd: [f32; 4],
    ambient: [f32; 4],
    lights: [LightPacked; 4],
}

impl FrameUniforms {
    pub(crate) fn from_scene(driver: &SceneDriver, camera: &Camera, width: u32, height: u32) -> Self {
        let rig = driver.lights();
        let t = driver.clock().seconds();
        let distort_time = t * driver.emblem().material().distort_speed;
        let [p0, p1, p2] = &rig.points;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            points_model: driver.particles().model_matrix().to_cols_array_2d(),
            camera_pos: camera.eye.extend(t).to_array(),
            viewport: [
                width.max(1) as f32,
                height.max(1) as f32,
                PARTICLE_POINT_SIZE,
                distort_time,
            ],
            fog: rig.fog.color.extend(rig.fog.near).to_array(),
            view_fwd: camera.forward().extend(rig.fog.far).to_array(),
            ambient: (Vec3::ONE * rig.ambient).extend(1.0).to_array(),
            lights: [
                LightPacked::point(p0),
                LightPacked::point(p1),
                LightPacked::point(p2),
                LightPacked::spot(&rig.spot),
            ],
        }
    }
}

/// Per-draw data for every mesh and line set; layout matches `MeshIn` in
/// `scene.wgsl` (locations 2..=9).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    material: [f32; 4],
    extra: [f32; 4],
}

impl MeshInstance {
    /// Unlit colour, used for the glow cubes and the lattice lines.
    fn basic(model: Mat4, color: Vec3, opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(opacity).to_array(),
            emissive: [0.0; 4],
            material: [0.0; 4],
            extra: [0.0; 4],
        }
    }
}

/// Fill `out` in slot order: emblem, markers, glow cubes, edges, cross edges.
pub(crate) fn write_mesh_instances(driver: &SceneDriver, out: &mut Vec<MeshInstance>) {
    out.clear();
    let emblem = driver.emblem();
    let m = emblem.material();
    out.push(MeshInstance {
        model: emblem.model_matrix().to_cols_array_2d(),
        color: m.color.extend(1.0).to_array(),
        emissive: m.emissive.extend(m.emissive_intensity).to_array(),
        material: [m.metalness, m.roughness, m.distort, m.clearcoat],
        extra: [m.clearcoat_roughness, 0.0, 0.0, 0.0],
    });

    let palette = driver.palette();
    let lattice = driver.lattice();
    let node_count = lattice.nodes().len();
    for i in 0..node_count {
        out.push(MeshInstance {
            model: lattice.marker_matrix(i).to_cols_array_2d(),
            color: palette.node_color.extend(1.0).to_array(),
            emissive: palette.node_emissive.extend(NODE_EMISSIVE_INTENSITY).to_array(),
            material: [NODE_METALNESS, NODE_ROUGHNESS, 0.0, 0.0],
            extra: [0.0; 4],
        });
    }
    for i in 0..node_count {
        out.push(MeshInstance::basic(
            lattice.glow_matrix(i),
            palette.node_emissive,
            NODE_GLOW_OPACITY,
        ));
    }
    let group = lattice.group_matrix();
    out.push(MeshInstance::basic(group, palette.node_color, EDGE_OPACITY));
    out.push(MeshInstance::basic(group, palette.node_color, CROSS_EDGE_OPACITY));
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    exposure: f32,
    encode_srgb: f32,
    _pad: [f32; 2],
}

impl PostUniforms {
    pub(crate) fn new(encode_srgb: bool) -> Self {
        Self {
            exposure: TONE_MAPPING_EXPOSURE,
            encode_srgb: if encode_srgb { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}
