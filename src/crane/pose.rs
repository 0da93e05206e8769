//! Per-part transforms derived from a [`CraneState`] snapshot.

use cgmath::{Matrix4, Point2, Rad, Vector2};

use super::state::CraneState;
use crate::transform;

/// Boom pivot in chassis-local space, just above the turret platform.
const BOOM_PIVOT_X: f32 = 0.0;
const BOOM_PIVOT_Y: f32 = 0.03;

/// One matrix per rigid group. Chassis, wheels and turret share the
/// chassis matrix; boom and cable+hook share the boom matrix.
pub struct CranePose {
    pub chassis: Matrix4<f32>,
    pub boom: Matrix4<f32>,
}

pub fn compose(state: &CraneState) -> CranePose {
    // The chassis translates along X and swings about its own center.
    let chassis = transform::rotate_about(
        Vector2::new(state.position_x, 0.0),
        Rad(state.body_rotation),
        Point2::new(state.position_x, 0.0),
    );

    // The boom pivot rides on the rotating chassis: rotate the local
    // attachment point by the body angle, add the body translation, then
    // spin the boom by the summed angle about that world-space pivot.
    let pivot_world = transform::rotate_vec2(
        Rad(state.body_rotation),
        Vector2::new(BOOM_PIVOT_X, BOOM_PIVOT_Y),
    ) + Vector2::new(state.position_x, 0.0);
    let boom = transform::translate_rotate(
        pivot_world,
        Rad(state.body_rotation + state.boom_angle),
    );

    CranePose { chassis, boom }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    const EPS: f32 = 1e-5;

    fn assert_mats_close(a: Matrix4<f32>, b: Matrix4<f32>) {
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (a[col][row] - b[col][row]).abs() < EPS,
                    "mismatch at column {col}, row {row}: {} vs {}",
                    a[col][row],
                    b[col][row]
                );
            }
        }
    }

    #[test]
    fn test_boom_matches_parent_child_product() {
        // The hand-substituted pivot algebra must agree with the generic
        // parent-then-child formulation
        // T(position) · R(body) · T(pivot) · R(boom).
        let mut state = CraneState::new();
        state.position_x = 0.27;
        state.body_rotation = 0.4;
        state.boom_angle = 1.1;

        let pose = compose(&state);
        let generic = Matrix4::from_translation(cgmath::Vector3::new(state.position_x, 0.0, 0.0))
            * Matrix4::from_angle_z(Rad(state.body_rotation))
            * Matrix4::from_translation(cgmath::Vector3::new(BOOM_PIVOT_X, BOOM_PIVOT_Y, 0.0))
            * Matrix4::from_angle_z(Rad(state.boom_angle));
        assert_mats_close(pose.boom, generic);
    }

    #[test]
    fn test_boom_pivot_rides_the_chassis() {
        // The boom's local origin must land on the chassis attachment
        // point for any body rotation.
        let mut state = CraneState::new();
        state.position_x = -0.3;
        state.body_rotation = 0.6;

        let pose = compose(&state);
        let boom_origin = pose.boom * Vector4::new(0.0, 0.0, 0.0, 1.0);

        let expected = crate::transform::rotate_vec2(
            Rad(state.body_rotation),
            Vector2::new(BOOM_PIVOT_X, BOOM_PIVOT_Y),
        ) + Vector2::new(state.position_x, 0.0);
        assert!((boom_origin.x - expected.x).abs() < EPS);
        assert!((boom_origin.y - expected.y).abs() < EPS);
    }

    #[test]
    fn test_identity_pose_at_rest() {
        // Untouched state (other than the default boom angle): the
        // chassis matrix is the identity.
        let state = CraneState::new();
        let pose = compose(&state);
        assert_mats_close(pose.chassis, Matrix4::from_scale(1.0));
    }
}
