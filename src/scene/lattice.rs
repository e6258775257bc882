use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

pub type Segment = [Vec3; 2];

const H: f32 = LATTICE_HALF_EXTENT;

/// Cube-corner anchors, in the order the nodes are indexed for phase offsets.
pub const NODE_ANCHORS: [Vec3; LATTICE_NODE_COUNT] = [
    Vec3::new(-H, H, -H),
    Vec3::new(H, H, -H),
    Vec3::new(-H, -H, -H),
    Vec3::new(H, -H, -H),
    Vec3::new(-H, H, H),
    Vec3::new(H, H, H),
    Vec3::new(-H, -H, H),
    Vec3::new(H, -H, H),
];

/// Body diagonals drawn on top of the cube wireframe.
pub const CROSS_EDGES: [Segment; 4] = [
    [Vec3::new(-H, H, -H), Vec3::new(H, -H, H)],
    [Vec3::new(H, H, -H), Vec3::new(-H, -H, H)],
    [Vec3::new(-H, H, H), Vec3::new(H, -H, -H)],
    [Vec3::new(H, H, H), Vec3::new(-H, -H, -H)],
];

#[derive(Clone, Debug)]
pub struct LatticeNode {
    pub anchor: Vec3,
    /// Vertical offset of the marker, accumulated every tick.
    pub lift: f32,
    pub scale: f32,
}

/// Pulse scale of node `index` at elapsed time `t`.
#[inline]
pub fn node_scale(index: usize, t: f32) -> f32 {
    1.0 + (NODE_PULSE_RATE * t + index as f32).sin() * NODE_PULSE_AMPLITUDE
}

/// Per-tick lift increment of node `index` at elapsed time `t`.
#[inline]
pub fn node_bob_step(index: usize, t: f32) -> f32 {
    (NODE_BOB_RATE * t + NODE_BOB_PHASE * index as f32).sin() * NODE_BOB_STEP
}

/// Eight breathing markers on the corners of a slowly tumbling cube.
pub struct NodeLattice {
    nodes: [LatticeNode; LATTICE_NODE_COUNT],
    edges: [Segment; 12],
    rotation: Vec3,
}

impl Default for NodeLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeLattice {
    pub fn new() -> Self {
        Self {
            nodes: NODE_ANCHORS.map(|anchor| LatticeNode {
                anchor,
                lift: 0.0,
                scale: 1.0,
            }),
            edges: cube_edges(&NODE_ANCHORS),
            rotation: Vec3::new(0.0, 0.0, LATTICE_ROLL_AMPLITUDE),
        }
    }

    pub fn advance(&mut self, t: f32) {
        self.rotation = Vec3::new(
            (LATTICE_PITCH_RATE * t).sin() * LATTICE_PITCH_AMPLITUDE,
            LATTICE_YAW_RATE * t,
            (LATTICE_ROLL_RATE * t).cos() * LATTICE_ROLL_AMPLITUDE,
        );
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.scale = node_scale(i, t);
            node.lift += node_bob_step(i, t);
        }
    }

    pub fn nodes(&self) -> &[LatticeNode] {
        &self.nodes
    }

    /// Cube wireframe, fixed at construction.
    pub fn edges(&self) -> &[Segment; 12] {
        &self.edges
    }

    pub fn cross_edges(&self) -> &[Segment; 4] {
        &CROSS_EDGES
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn group_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    /// Glow cube of node `i`: fixed on its anchor, never scaled.
    pub fn glow_matrix(&self, i: usize) -> Mat4 {
        self.group_matrix() * Mat4::from_translation(self.nodes[i].anchor)
    }

    /// Octahedron marker of node `i`, lifted and pulsed.
    pub fn marker_matrix(&self, i: usize) -> Mat4 {
        let node = &self.nodes[i];
        self.group_matrix()
            * Mat4::from_scale_rotation_translation(
                Vec3::splat(node.scale),
                Quat::IDENTITY,
                node.anchor + Vec3::new(0.0, node.lift, 0.0),
            )
    }
}

/// All segments joining corners that differ in exactly one axis.
pub fn cube_edges(corners: &[Vec3; 8]) -> [Segment; 12] {
    let mut out = [[Vec3::ZERO; 2]; 12];
    let mut n = 0;
    for a in 0..corners.len() {
        for b in (a + 1)..corners.len() {
            let d = (corners[a] - corners[b]).abs();
            let differing = [d.x, d.y, d.z].iter().filter(|c| **c > 1e-6).count();
            if differing == 1 && n < out.len() {
                out[n] = [corners[a], corners[b]];
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 12, "corner set must form a box");
    out
}
