// Host-side tests for procedural meshes.

use glam::Vec3;
use portfolio_hero::scene::geometry::{cube, octahedron, segment_vertices, uv_sphere, MeshData};
use portfolio_hero::scene::lattice::NodeLattice;

fn triangle(mesh: &MeshData, t: usize) -> [Vec3; 3] {
    let idx = &mesh.indices[t * 3..t * 3 + 3];
    idx.iter()
        .map(|i| Vec3::from(mesh.vertices[*i as usize].position))
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}

fn assert_outward(mesh: &MeshData) {
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = triangle(mesh, t);
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0, "triangle {} faces inward", t);
    }
}

#[test]
fn sphere_has_expected_topology() {
    let mesh = uv_sphere(1.0, 8, 6);
    assert_eq!(mesh.vertices.len(), 9 * 7);
    // Pole rows contribute one triangle per segment, the rest two
    assert_eq!(mesh.triangle_count(), 8 * (2 * 6 - 2));
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert!((Vec3::from(v.normal) - p).length() < 1e-5);
    }
    assert_outward(&mesh);
}

#[test]
fn emblem_sphere_resolution() {
    let mesh = uv_sphere(1.0, 100, 100);
    assert_eq!(mesh.vertices.len(), 101 * 101);
    assert_eq!(mesh.triangle_count(), 100 * 198);
    assert!(mesh.indices.iter().all(|i| (*i as usize) < mesh.vertices.len()));
}

#[test]
fn cube_is_closed_and_outward() {
    let mesh = cube(0.35);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!(p.abs().max_element() <= 0.175 + 1e-6);
        // Every vertex lies on the face its normal names
        assert!((p.dot(Vec3::from(v.normal)) - 0.175).abs() < 1e-6);
    }
    assert_outward(&mesh);
}

#[test]
fn octahedron_has_eight_outward_faces() {
    let mesh = octahedron(0.15);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.vertices.len(), 24);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 0.15).abs() < 1e-6);
    }
    assert_outward(&mesh);
}

#[test]
fn segments_become_line_list_pairs() {
    let lattice = NodeLattice::new();
    let verts = segment_vertices(lattice.edges());
    assert_eq!(verts.len(), 24);
    for (pair, [a, b]) in verts.chunks(2).zip(lattice.edges()) {
        assert_eq!(Vec3::from(pair[0].position), *a);
        assert_eq!(Vec3::from(pair[1].position), *b);
    }
}
