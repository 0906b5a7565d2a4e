use super::*;

#[test]
fn centered_quad_maps_corners_to_unit_uvs() {
    let mesh = QuadMesh::centered(100.0).unwrap();
    let to_uv = mesh.local_to_uv();

    let cases = [
        (Point::new(-100.0, -100.0), (0.0, 0.0)),
        (Point::new(100.0, -100.0), (1.0, 0.0)),
        (Point::new(100.0, 100.0), (1.0, 1.0)),
        (Point::new(-100.0, 100.0), (0.0, 1.0)),
        (Point::new(0.0, 0.0), (0.5, 0.5)),
    ];
    for (p, (u, v)) in cases {
        let uv = to_uv * p;
        assert!((uv.x - u).abs() < 1e-9 && (uv.y - v).abs() < 1e-9, "{p:?} -> {uv:?}");
    }
    assert_eq!(
        mesh.local_bounds(),
        Rect::new(-100.0, -100.0, 100.0, 100.0)
    );
}

#[test]
fn topology_other_than_two_triangles_is_rejected() {
    let mut mesh = QuadMesh::centered(1.0).unwrap();
    mesh.indices = vec![0, 1, 2];
    assert!(mesh.validate().is_err());

    let mut mesh = QuadMesh::centered(1.0).unwrap();
    mesh.positions.pop();
    assert!(mesh.validate().is_err());

    let mut mesh = QuadMesh::centered(1.0).unwrap();
    mesh.uvs[2] = [0.5, 0.5];
    assert!(mesh.validate().is_err());
}

#[test]
fn non_parallelogram_and_degenerate_quads_are_rejected() {
    let mut mesh = QuadMesh::centered(1.0).unwrap();
    mesh.positions[2] = [3.0, 1.0];
    assert!(mesh.validate().is_err());

    assert!(QuadMesh::centered(0.0).is_err());
}
