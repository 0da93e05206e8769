//! Procedural triangle meshes shared by the 3D scenes.
//!
//! The unit shapes are plain white; the solid pipeline multiplies vertex
//! color by a per-instance tint, so a single cylinder mesh serves every
//! fuselage segment, wheel and engine pod.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

pub const SEGMENTS: usize = 32;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

pub struct Mesh {
    pub vertices: Vec<SolidVertex>,
    pub indices: Vec<u32>,
}

fn v(x: f32, y: f32, z: f32, color: [f32; 3]) -> SolidVertex {
    SolidVertex {
        position: [x, y, z],
        color,
    }
}

/// Triangle-soup mesh: vertices in draw order, indices 0..n.
fn soup(vertices: Vec<SolidVertex>) -> Mesh {
    let indices = (0..vertices.len() as u32).collect();
    Mesh { vertices, indices }
}

/// Axis-aligned cube spanning ±0.5 on every axis.
pub fn unit_cube() -> Mesh {
    let corners = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    let vertices = corners
        .iter()
        .map(|&[x, y, z]| v(x, y, z, WHITE))
        .collect();
    let indices = vec![
        0, 3, 2, 2, 1, 0, //
        1, 2, 6, 6, 5, 1, //
        5, 6, 7, 7, 4, 5, //
        4, 7, 3, 3, 0, 4, //
        6, 2, 3, 3, 7, 6, //
        1, 5, 4, 4, 0, 1,
    ];
    Mesh { vertices, indices }
}

/// Unit-radius cylinder along Y, y in [-0.5, 0.5], with both caps.
pub fn unit_cylinder(segments: usize) -> Mesh {
    let mut vertices = Vec::with_capacity(segments * 12);
    for i in 0..segments {
        let theta1 = i as f32 / segments as f32 * TAU;
        let theta2 = (i + 1) as f32 / segments as f32 * TAU;
        let (x1, z1) = (theta1.cos(), theta1.sin());
        let (x2, z2) = (theta2.cos(), theta2.sin());

        // side
        vertices.push(v(x1, -0.5, z1, WHITE));
        vertices.push(v(x1, 0.5, z1, WHITE));
        vertices.push(v(x2, 0.5, z2, WHITE));
        vertices.push(v(x1, -0.5, z1, WHITE));
        vertices.push(v(x2, 0.5, z2, WHITE));
        vertices.push(v(x2, -0.5, z2, WHITE));
        // caps
        vertices.push(v(0.0, 0.5, 0.0, WHITE));
        vertices.push(v(x1, 0.5, z1, WHITE));
        vertices.push(v(x2, 0.5, z2, WHITE));
        vertices.push(v(0.0, -0.5, 0.0, WHITE));
        vertices.push(v(x2, -0.5, z2, WHITE));
        vertices.push(v(x1, -0.5, z1, WHITE));
    }
    soup(vertices)
}

/// Unit-radius cone along Y, apex at y = 0.5, with a base cap.
pub fn unit_cone(segments: usize) -> Mesh {
    let mut vertices = Vec::with_capacity(segments * 6);
    for i in 0..segments {
        let theta1 = i as f32 / segments as f32 * TAU;
        let theta2 = (i + 1) as f32 / segments as f32 * TAU;
        let (x1, z1) = (theta1.cos(), theta1.sin());
        let (x2, z2) = (theta2.cos(), theta2.sin());

        vertices.push(v(0.0, 0.5, 0.0, WHITE));
        vertices.push(v(x1, -0.5, z1, WHITE));
        vertices.push(v(x2, -0.5, z2, WHITE));
        vertices.push(v(0.0, -0.5, 0.0, WHITE));
        vertices.push(v(x2, -0.5, z2, WHITE));
        vertices.push(v(x1, -0.5, z1, WHITE));
    }
    soup(vertices)
}

/// Demo cube with per-face colors, spanning 0..0.5 (centered by the
/// caller via a -0.25 offset, like the transform demo expects).
pub fn face_colored_cube() -> Mesh {
    let vertices = vec![
        // front face, one color per corner
        v(0.0, 0.0, 0.0, [1.0, 0.0, 0.0]),
        v(0.5, 0.0, 0.0, [0.0, 1.0, 0.0]),
        v(0.5, 0.5, 0.0, [0.0, 0.0, 1.0]),
        v(0.0, 0.5, 0.0, [1.0, 1.0, 0.0]),
        // right face, green
        v(0.5, 0.0, 0.0, [0.0, 1.0, 0.0]),
        v(0.5, 0.5, 0.0, [0.0, 1.0, 0.0]),
        v(0.5, 0.0, 0.5, [0.0, 1.0, 0.0]),
        v(0.5, 0.5, 0.5, [0.0, 1.0, 0.0]),
        // back face, blue
        v(0.0, 0.0, 0.5, [0.0, 0.0, 1.0]),
        v(0.5, 0.0, 0.5, [0.0, 0.0, 1.0]),
        v(0.5, 0.5, 0.5, [0.0, 0.0, 1.0]),
        v(0.0, 0.5, 0.5, [0.0, 0.0, 1.0]),
        // left face, yellow
        v(0.0, 0.0, 0.5, [1.0, 1.0, 0.0]),
        v(0.0, 0.5, 0.5, [1.0, 1.0, 0.0]),
        v(0.0, 0.5, 0.0, [1.0, 1.0, 0.0]),
        v(0.0, 0.0, 0.0, [1.0, 1.0, 0.0]),
        // top face, cyan
        v(0.5, 0.5, 0.5, [0.0, 1.0, 1.0]),
        v(0.5, 0.5, 0.0, [0.0, 1.0, 1.0]),
        v(0.0, 0.5, 0.0, [0.0, 1.0, 1.0]),
        v(0.0, 0.5, 0.5, [0.0, 1.0, 1.0]),
        // bottom face, magenta
        v(0.0, 0.0, 0.0, [1.0, 0.0, 1.0]),
        v(0.5, 0.0, 0.0, [1.0, 0.0, 1.0]),
        v(0.5, 0.0, 0.5, [1.0, 0.0, 1.0]),
        v(0.0, 0.0, 0.5, [1.0, 0.0, 1.0]),
    ];
    let indices = vec![
        0, 3, 2, 2, 1, 0, //
        4, 5, 7, 7, 6, 4, //
        8, 9, 10, 10, 11, 8, //
        12, 13, 14, 14, 15, 12, //
        16, 17, 18, 18, 19, 16, //
        20, 21, 22, 22, 23, 20,
    ];
    Mesh { vertices, indices }
}

/// Demo cube with a distinct color at every corner, spanning 0..0.5.
pub fn corner_colored_cube() -> Mesh {
    let vertices = vec![
        v(0.0, 0.0, 0.0, [0.3, 0.8, 0.5]),
        v(0.5, 0.0, 0.0, [0.5, 0.4, 0.3]),
        v(0.5, 0.5, 0.0, [0.2, 0.7, 0.3]),
        v(0.0, 0.5, 0.0, [0.6, 0.2, 0.8]),
        v(0.0, 0.0, 0.5, [0.8, 0.3, 0.6]),
        v(0.5, 0.0, 0.5, [0.4, 0.4, 0.8]),
        v(0.5, 0.5, 0.5, [0.2, 0.3, 0.6]),
        v(0.0, 0.5, 0.5, [0.7, 0.5, 0.4]),
    ];
    let indices = vec![
        0, 3, 2, 2, 1, 0, //
        1, 2, 6, 6, 5, 1, //
        5, 6, 7, 7, 4, 5, //
        4, 7, 3, 3, 0, 4, //
        6, 2, 3, 3, 7, 6, //
        1, 5, 4, 4, 0, 1,
    ];
    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = unit_cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.indices.len(), 36);
        assert!(cube.indices.iter().all(|&i| (i as usize) < 8));
    }

    #[test]
    fn test_cylinder_vertex_count() {
        let mesh = unit_cylinder(SEGMENTS);
        assert_eq!(mesh.vertices.len(), SEGMENTS * 12);
        assert_eq!(mesh.indices.len(), mesh.vertices.len());
    }

    #[test]
    fn test_cone_vertex_count() {
        let mesh = unit_cone(SEGMENTS);
        assert_eq!(mesh.vertices.len(), SEGMENTS * 6);
    }

    #[test]
    fn test_cylinder_stays_in_unit_bounds() {
        let mesh = unit_cylinder(SEGMENTS);
        for vert in &mesh.vertices {
            let [x, y, z] = vert.position;
            assert!((x * x + z * z).sqrt() <= 1.0 + 1e-6);
            assert!((-0.5..=0.5).contains(&y));
        }
    }

    #[test]
    fn test_demo_cubes_topology() {
        let face = face_colored_cube();
        assert_eq!(face.vertices.len(), 24);
        assert_eq!(face.indices.len(), 36);
        let corner = corner_colored_cube();
        assert_eq!(corner.vertices.len(), 8);
        assert_eq!(corner.indices.len(), 36);
    }
}
