//! Free-fly camera with yaw/pitch/roll accumulation.

use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3};

pub struct FlyCamera {
    pub position: Point3<f32>,
    /// Radians; -π/2 looks down -Z.
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl FlyCamera {
    pub fn new(position: Point3<f32>, yaw: f32, pitch: f32) -> Self {
        FlyCamera {
            position,
            yaw,
            pitch,
            roll: 0.0,
        }
    }

    pub fn front(&self) -> Vector3<f32> {
        Vector3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Look-at view, then roll about the viewing axis.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let front = self.front();
        let view = Matrix4::look_at_rh(self.position, self.position + front, Vector3::unit_y());
        view * Matrix4::from_axis_angle(front, Rad(self.roll))
    }

    /// Dolly/strafe/lift by the given axis amounts (each -1..1), covering
    /// `speed * dt` units at full deflection. Vertical motion is along
    /// world Y, not the view axis.
    pub fn apply_movement(&mut self, forward: f32, strafe: f32, vertical: f32, dt: f32, speed: f32) {
        let step = speed * dt;
        let front = self.front();
        let right = front.cross(Vector3::unit_y()).normalize();
        self.position = self.position + front * (forward * step) + right * (strafe * step);
        self.position.y += vertical * step;
    }

    /// Jump to a fixed viewpoint (used by the cabin/cockpit toggles).
    /// Roll is left alone, matching the view-mode behavior users expect
    /// when hopping between presets.
    pub fn set_pose(&mut self, position: Point3<f32>, yaw: f32, pitch: f32) {
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_yaw_looks_down_negative_z() {
        let camera = FlyCamera::new(Point3::new(0.0, 2.0, 15.0), -FRAC_PI_2, 0.0);
        let front = camera.front();
        assert!(front.x.abs() < EPS);
        assert!(front.y.abs() < EPS);
        assert!((front.z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_forward_movement_scales_with_dt() {
        let mut camera = FlyCamera::new(Point3::new(0.0, 0.0, 0.0), -FRAC_PI_2, 0.0);
        camera.apply_movement(1.0, 0.0, 0.0, 0.5, 8.0);
        assert!((camera.position.z + 4.0).abs() < EPS);
        assert!(camera.position.x.abs() < EPS);
    }

    #[test]
    fn test_strafe_is_perpendicular_to_front() {
        let mut camera = FlyCamera::new(Point3::new(0.0, 0.0, 0.0), -FRAC_PI_2, 0.0);
        camera.apply_movement(0.0, 1.0, 0.0, 1.0, 1.0);
        // Facing -Z, strafing right moves along +X.
        assert!((camera.position.x - 1.0).abs() < EPS);
        assert!(camera.position.z.abs() < EPS);
    }

    #[test]
    fn test_vertical_is_world_axis() {
        let mut camera = FlyCamera::new(Point3::new(0.0, 0.0, 0.0), -FRAC_PI_2, 0.8);
        camera.apply_movement(0.0, 0.0, 1.0, 1.0, 2.0);
        assert!((camera.position.y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_set_pose_keeps_roll() {
        let mut camera = FlyCamera::new(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0);
        camera.roll = 0.3;
        camera.set_pose(Point3::new(1.0, 2.0, 3.0), 0.5, -0.2);
        assert_eq!(camera.roll, 0.3);
        assert_eq!(camera.position, Point3::new(1.0, 2.0, 3.0));
    }
}
