//! 2D affine transform composition.
//!
//! All matrices are column-major 4x4 with the translation in the last
//! column, which is what both cgmath and WGSL expect. Scene code never
//! builds matrices element by element; it goes through the two
//! compositions below.

use cgmath::{Matrix4, Point2, Rad, Vector2};

/// Rotation about the local origin followed by a translation.
pub fn translate_rotate(translation: Vector2<f32>, angle: Rad<f32>) -> Matrix4<f32> {
    let (sin_a, cos_a) = angle.0.sin_cos();
    Matrix4::new(
        cos_a, sin_a, 0.0, 0.0, //
        -sin_a, cos_a, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        translation.x, translation.y, 0.0, 1.0,
    )
}

/// Rotation about `pivot` (in model space) followed by a translation.
///
/// The composed translation component is `t + p - R·p`, so a point sitting
/// at the pivot is left unmoved by the rotation before `t` is applied.
pub fn rotate_about(
    translation: Vector2<f32>,
    angle: Rad<f32>,
    pivot: Point2<f32>,
) -> Matrix4<f32> {
    let (sin_a, cos_a) = angle.0.sin_cos();
    let tx = translation.x + pivot.x - (cos_a * pivot.x - sin_a * pivot.y);
    let ty = translation.y + pivot.y - (sin_a * pivot.x + cos_a * pivot.y);
    Matrix4::new(
        cos_a, sin_a, 0.0, 0.0, //
        -sin_a, cos_a, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        tx, ty, 0.0, 1.0,
    )
}

/// Rotate a 2D vector by `angle`.
pub fn rotate_vec2(angle: Rad<f32>, v: Vector2<f32>) -> Vector2<f32> {
    let (sin_a, cos_a) = angle.0.sin_cos();
    Vector2::new(cos_a * v.x - sin_a * v.y, sin_a * v.x + cos_a * v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    fn apply(m: Matrix4<f32>, x: f32, y: f32) -> (f32, f32) {
        let v = m * Vector4::new(x, y, 0.0, 1.0);
        (v.x, v.y)
    }

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "got {actual:?}, expected {expected:?}"
        );
    }

    #[test]
    fn test_translation_in_last_column() {
        let m = translate_rotate(Vector2::new(0.25, -0.5), Rad(0.0));
        assert_eq!(m[3][0], 0.25);
        assert_eq!(m[3][1], -0.5);
        assert_eq!(m[3][3], 1.0);
    }

    #[test]
    fn test_pivot_point_is_fixed() {
        // Half-turn about (1, 1): the pivot maps to itself, (2, 1) lands
        // at (0, 1).
        let m = rotate_about(Vector2::new(0.0, 0.0), Rad(PI), Point2::new(1.0, 1.0));
        assert_close(apply(m, 1.0, 1.0), (1.0, 1.0));
        assert_close(apply(m, 2.0, 1.0), (0.0, 1.0));
    }

    #[test]
    fn test_pivot_form_matches_generic_product() {
        // T(t) · T(p) · R · T(-p) spelled out with cgmath primitives.
        let t = Vector2::new(0.3, -0.2);
        let p = Point2::new(0.5, 0.1);
        let angle = Rad(0.7);
        let generic = Matrix4::from_translation(cgmath::Vector3::new(t.x, t.y, 0.0))
            * Matrix4::from_translation(cgmath::Vector3::new(p.x, p.y, 0.0))
            * Matrix4::from_angle_z(angle)
            * Matrix4::from_translation(cgmath::Vector3::new(-p.x, -p.y, 0.0));
        let composed = rotate_about(t, angle, p);
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (generic[col][row] - composed[col][row]).abs() < EPS,
                    "mismatch at column {col}, row {row}"
                );
            }
        }
    }

    #[test]
    fn test_zero_pivot_degenerates_to_translate_rotate() {
        let t = Vector2::new(-0.4, 0.9);
        let angle = Rad(1.3);
        let a = rotate_about(t, angle, Point2::new(0.0, 0.0));
        let b = translate_rotate(t, angle);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_vec2_quarter_turn() {
        let v = rotate_vec2(Rad(PI / 2.0), Vector2::new(1.0, 0.0));
        assert!((v.x - 0.0).abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }
}
