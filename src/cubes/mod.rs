//! Basic camera/transform manipulation demo: two indexed cube meshes and
//! axis bars, a look-at camera with scroll zoom, and a keyboard map that
//! pokes at every component of the shared transform.

use cgmath::{Matrix4, Point3, Rad, Vector3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use std::f32::consts::PI;

const MOVE_RATE: f32 = 2.5;
const SPIN_RATE: f32 = 200.0 * PI / 180.0;
const ZOOM_MIN: f32 = 1.0 * PI / 180.0;
const ZOOM_MAX: f32 = 45.0 * PI / 180.0;

/// Classic eye/look-at/up camera with a zoomable field of view.
pub struct OrbitCamera {
    pub eye: Point3<f32>,
    pub look_at: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view, radians, clamped to [1°, 45°].
    pub fov: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        OrbitCamera {
            eye: Point3::new(0.0, 0.0, 5.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, -1.0, 0.0),
            fov: ZOOM_MAX,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.look_at, self.up)
    }

    /// Scroll zoom: one scroll line narrows the field of view by 1°.
    pub fn zoom(&mut self, scroll_lines: f32) {
        self.fov = (self.fov - scroll_lines * PI / 180.0).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared modelling transform applied to both demo cubes, plus each
/// cube's own X offset.
pub struct TransformState {
    pub translate: Vector3<f32>,
    /// Per-axis rotation angles, radians.
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub cube1_x: f32,
    pub cube2_x: f32,
}

impl TransformState {
    pub fn new() -> Self {
        TransformState {
            translate: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            cube1_x: -1.0,
            cube2_x: 1.0,
        }
    }

    /// Model matrix for a cube whose own offset is `offset_x`: translate,
    /// rotate per axis, scale, then re-center the 0..0.5 mesh on its
    /// midpoint.
    pub fn model_for(&self, offset_x: f32) -> Matrix4<f32> {
        Matrix4::from_translation(self.translate + Vector3::new(offset_x, 0.0, 0.0))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
            * Matrix4::from_translation(Vector3::new(-0.25, -0.25, -0.25))
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

/// Model matrices for the two axis bars drawn through the origin.
pub fn axis_models() -> [Matrix4<f32>; 2] {
    let center = Matrix4::from_translation(Vector3::new(-0.25, -0.25, -0.25));
    [
        Matrix4::from_nonuniform_scale(100.0, 0.1, 0.1) * center,
        Matrix4::from_nonuniform_scale(0.1, 100.0, 0.1) * center,
    ]
}

pub struct CubesInput {
    dolly_in: bool,
    dolly_out: bool,
    track_left: bool,
    track_right: bool,
    eye_x_pos: bool,
    eye_x_neg: bool,
    eye_y_pos: bool,
    eye_y_neg: bool,
    eye_z_pos: bool,
    eye_z_neg: bool,
    look_x_pos: bool,
    look_x_neg: bool,
    look_y_pos: bool,
    look_y_neg: bool,
    look_z_pos: bool,
    look_z_neg: bool,
    up_snap: Option<Vector3<f32>>,
    translate_y_pos: bool,
    translate_y_neg: bool,
    translate_x_pos: bool,
    translate_x_neg: bool,
    scale_x_pos: bool,
    scale_x_neg: bool,
    scale_y_pos: bool,
    scale_z_neg: bool,
    spin_x: bool,
    spin_y: bool,
    spin_z: bool,
    cube1_left: bool,
    cube1_right: bool,
    cube2_left: bool,
    cube2_right: bool,
    print_view_requested: bool,
    escape_pressed: bool,
}

impl CubesInput {
    pub fn new() -> Self {
        CubesInput {
            dolly_in: false,
            dolly_out: false,
            track_left: false,
            track_right: false,
            eye_x_pos: false,
            eye_x_neg: false,
            eye_y_pos: false,
            eye_y_neg: false,
            eye_z_pos: false,
            eye_z_neg: false,
            look_x_pos: false,
            look_x_neg: false,
            look_y_pos: false,
            look_y_neg: false,
            look_z_pos: false,
            look_z_neg: false,
            up_snap: None,
            translate_y_pos: false,
            translate_y_neg: false,
            translate_x_pos: false,
            translate_x_neg: false,
            scale_x_pos: false,
            scale_x_neg: false,
            scale_y_pos: false,
            scale_z_neg: false,
            spin_x: false,
            spin_y: false,
            spin_z: false,
            cube1_left: false,
            cube1_right: false,
            cube2_left: false,
            cube2_right: false,
            print_view_requested: false,
            escape_pressed: false,
        }
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.key(code, event.state.is_pressed(), event.repeat);
        }
    }

    fn key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        if repeat {
            return;
        }
        match code {
            KeyCode::KeyW => self.dolly_in = pressed,
            KeyCode::KeyS => self.dolly_out = pressed,
            KeyCode::KeyA => self.track_left = pressed,
            KeyCode::KeyD => self.track_right = pressed,
            KeyCode::KeyH => self.eye_x_pos = pressed,
            KeyCode::KeyF => self.eye_x_neg = pressed,
            KeyCode::KeyT => self.eye_z_pos = pressed,
            KeyCode::KeyG => self.eye_z_neg = pressed,
            KeyCode::KeyQ => self.eye_y_pos = pressed,
            KeyCode::KeyE => self.eye_y_neg = pressed,
            KeyCode::Digit1 => self.look_x_pos = pressed,
            KeyCode::Digit2 => self.look_x_neg = pressed,
            KeyCode::Digit3 => self.look_y_pos = pressed,
            KeyCode::Digit4 => self.look_y_neg = pressed,
            KeyCode::Digit5 => self.look_z_pos = pressed,
            KeyCode::Digit6 => self.look_z_neg = pressed,
            KeyCode::Digit7 => {
                if pressed {
                    self.up_snap = Some(Vector3::unit_x());
                }
            }
            KeyCode::Digit8 => {
                if pressed {
                    self.up_snap = Some(Vector3::unit_y());
                }
            }
            KeyCode::Digit9 => {
                if pressed {
                    self.up_snap = Some(Vector3::unit_z());
                }
            }
            KeyCode::KeyI => self.translate_y_pos = pressed,
            KeyCode::KeyK => self.translate_y_neg = pressed,
            KeyCode::KeyL => self.translate_x_pos = pressed,
            KeyCode::KeyJ => self.translate_x_neg = pressed,
            KeyCode::KeyC => self.scale_x_pos = pressed,
            KeyCode::KeyV => self.scale_x_neg = pressed,
            KeyCode::KeyB => self.scale_y_pos = pressed,
            KeyCode::KeyU => self.scale_z_neg = pressed,
            KeyCode::KeyX => self.spin_x = pressed,
            KeyCode::KeyY => self.spin_y = pressed,
            KeyCode::KeyZ => self.spin_z = pressed,
            KeyCode::KeyN => self.cube1_left = pressed,
            KeyCode::KeyM => self.cube1_right = pressed,
            KeyCode::KeyO => self.cube2_left = pressed,
            KeyCode::KeyP => self.cube2_right = pressed,
            KeyCode::F12 => {
                if pressed {
                    self.print_view_requested = true;
                }
            }
            KeyCode::Escape => {
                if pressed {
                    self.escape_pressed = true;
                }
            }
            _ => {}
        }
    }

    pub fn apply(&mut self, camera: &mut OrbitCamera, transforms: &mut TransformState, dt: f32) {
        let step = MOVE_RATE * dt;

        // W/A/S/D move eye and look-at together, keeping the view
        // direction.
        if self.dolly_in {
            camera.eye.z -= step;
            camera.look_at.z -= step;
        }
        if self.dolly_out {
            camera.eye.z += step;
            camera.look_at.z += step;
        }
        if self.track_left {
            camera.eye.x -= step;
            camera.look_at.x -= step;
        }
        if self.track_right {
            camera.eye.x += step;
            camera.look_at.x += step;
        }

        // eye alone
        if self.eye_x_pos {
            camera.eye.x += step;
        }
        if self.eye_x_neg {
            camera.eye.x -= step;
        }
        if self.eye_y_pos {
            camera.eye.y += step;
        }
        if self.eye_y_neg {
            camera.eye.y -= step;
        }
        if self.eye_z_pos {
            camera.eye.z += step;
        }
        if self.eye_z_neg {
            camera.eye.z -= step;
        }

        // look-at alone
        if self.look_x_pos {
            camera.look_at.x += step;
        }
        if self.look_x_neg {
            camera.look_at.x -= step;
        }
        if self.look_y_pos {
            camera.look_at.y += step;
        }
        if self.look_y_neg {
            camera.look_at.y -= step;
        }
        if self.look_z_pos {
            camera.look_at.z += step;
        }
        if self.look_z_neg {
            camera.look_at.z -= step;
        }

        if let Some(up) = self.up_snap.take() {
            camera.up = up;
        }

        // shared modelling transform
        if self.translate_y_pos {
            transforms.translate.y += step;
        }
        if self.translate_y_neg {
            transforms.translate.y -= step;
        }
        if self.translate_x_pos {
            transforms.translate.x += step;
        }
        if self.translate_x_neg {
            transforms.translate.x -= step;
        }
        if self.scale_x_pos {
            transforms.scale.x += step;
        }
        if self.scale_x_neg {
            transforms.scale.x -= step;
        }
        if self.scale_y_pos {
            transforms.scale.y += step;
        }
        if self.scale_z_neg {
            transforms.scale.z -= step;
        }
        if self.spin_x {
            transforms.rotation.x += SPIN_RATE * dt;
        }
        if self.spin_y {
            transforms.rotation.y += SPIN_RATE * dt;
        }
        if self.spin_z {
            transforms.rotation.z += SPIN_RATE * dt;
        }

        // per-cube nudges
        if self.cube1_left {
            transforms.cube1_x -= step;
        }
        if self.cube1_right {
            transforms.cube1_x += step;
        }
        if self.cube2_left {
            transforms.cube2_x -= step;
        }
        if self.cube2_right {
            transforms.cube2_x += step;
        }

        if std::mem::take(&mut self.print_view_requested) {
            let m = camera.view_matrix();
            for row in 0..4 {
                log::info!(
                    "view[{row}] = [{:.4}, {:.4}, {:.4}, {:.4}]",
                    m[0][row],
                    m[1][row],
                    m[2][row],
                    m[3][row]
                );
            }
        }
    }

    pub fn take_escape(&mut self) -> bool {
        std::mem::take(&mut self.escape_pressed)
    }
}

impl Default for CubesInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-5;

    #[test]
    fn test_zoom_clamps_to_band() {
        let mut camera = OrbitCamera::new();
        for _ in 0..100 {
            camera.zoom(1.0);
        }
        assert!((camera.fov - ZOOM_MIN).abs() < EPS);
        for _ in 0..100 {
            camera.zoom(-1.0);
        }
        assert!((camera.fov - ZOOM_MAX).abs() < EPS);
    }

    #[test]
    fn test_dolly_moves_eye_and_target_together() {
        let mut camera = OrbitCamera::new();
        let mut transforms = TransformState::new();
        let mut input = CubesInput::new();
        let gap = camera.eye.z - camera.look_at.z;
        input.key(KeyCode::KeyW, true, false);
        for _ in 0..60 {
            input.apply(&mut camera, &mut transforms, DT);
        }
        assert!((camera.eye.z - (5.0 - MOVE_RATE)).abs() < 1e-3);
        assert!((camera.eye.z - camera.look_at.z - gap).abs() < EPS);
    }

    #[test]
    fn test_up_snap_is_one_shot() {
        let mut camera = OrbitCamera::new();
        let mut transforms = TransformState::new();
        let mut input = CubesInput::new();
        input.key(KeyCode::Digit8, true, false);
        input.apply(&mut camera, &mut transforms, DT);
        assert_eq!(camera.up, Vector3::unit_y());
        camera.up = Vector3::unit_z();
        input.apply(&mut camera, &mut transforms, DT);
        assert_eq!(camera.up, Vector3::unit_z());
    }

    #[test]
    fn test_model_centering_offset() {
        // With the identity transform the mesh midpoint (0.25³) lands on
        // the cube's offset position.
        let transforms = TransformState::new();
        let m = transforms.model_for(0.0);
        let center = m * Vector4::new(0.25, 0.25, 0.25, 1.0);
        assert!(center.x.abs() < EPS);
        assert!(center.y.abs() < EPS);
        assert!(center.z.abs() < EPS);
    }

    #[test]
    fn test_spin_accumulates_per_axis() {
        let mut camera = OrbitCamera::new();
        let mut transforms = TransformState::new();
        let mut input = CubesInput::new();
        input.key(KeyCode::KeyX, true, false);
        for _ in 0..60 {
            input.apply(&mut camera, &mut transforms, DT);
        }
        assert!((transforms.rotation.x - SPIN_RATE).abs() < 1e-3);
        assert_eq!(transforms.rotation.y, 0.0);
    }
}
