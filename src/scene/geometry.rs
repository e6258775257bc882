use super::lattice::Segment;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere; `width_segments` around, `height_segments`
/// pole to pole.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(MeshVertex::new(dir * radius, dir.normalize_or_zero()));
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Axis-aligned cube of edge `size` centred on the origin, flat normals.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let c = n * h;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.vertices.push(MeshVertex::new(c + (u * su + v * sv) * h, n));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Regular octahedron with vertices at `radius` along each axis, flat normals.
pub fn octahedron(radius: f32) -> MeshData {
    let mut mesh = MeshData::default();
    for sx in [1.0_f32, -1.0] {
        for sy in [1.0_f32, -1.0] {
            for sz in [1.0_f32, -1.0] {
                let a = Vec3::new(sx * radius, 0.0, 0.0);
                let b = Vec3::new(0.0, sy * radius, 0.0);
                let c = Vec3::new(0.0, 0.0, sz * radius);
                let (b, c) = if sx * sy * sz > 0.0 { (b, c) } else { (c, b) };
                let n = Vec3::new(sx, sy, sz).normalize();
                let base = mesh.vertices.len() as u32;
                for p in [a, b, c] {
                    mesh.vertices.push(MeshVertex::new(p, n));
                }
                mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
            }
        }
    }
    mesh
}

/// Line-list vertices for a set of segments.
pub fn segment_vertices(segments: &[Segment]) -> Vec<MeshVertex> {
    segments
        .iter()
        .flat_map(|[a, b]| [MeshVertex::new(*a, Vec3::ZERO), MeshVertex::new(*b, Vec3::ZERO)])
        .collect()
}
