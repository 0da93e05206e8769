//! Flight-scene state: camera, view mode, door, wheels, cabin light.

use cgmath::Point3;
use std::f32::consts::{FRAC_PI_2, PI};

use super::camera::FlyCamera;

pub const CAMERA_SPEED: f32 = 8.0;
pub const TURN_RATE: f32 = 50.0 * PI / 180.0;
pub const DOOR_RATE: f32 = 60.0 * PI / 180.0;
pub const DOOR_MAX: f32 = 90.0 * PI / 180.0;
pub const WHEEL_SPIN_RATE: f32 = 200.0 * PI / 180.0;

/// Which part of the airplane is drawn. The camera presets for cabin and
/// cockpit are applied on entry; leaving a mode keeps the camera where it
/// is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Exterior,
    Cabin,
    Cockpit,
}

pub struct FlightState {
    pub camera: FlyCamera,
    pub view_mode: ViewMode,
    /// Hinge angle of the passenger door, radians in [0, DOOR_MAX].
    pub door_angle: f32,
    /// Landing-gear wheel spin, radians, unbounded.
    pub wheel_rotation: f32,
    pub cabin_light: bool,
}

impl FlightState {
    pub fn new() -> Self {
        FlightState {
            camera: FlyCamera::new(Point3::new(0.0, 2.0, 15.0), -FRAC_PI_2, 0.0),
            view_mode: ViewMode::Exterior,
            door_angle: 0.0,
            wheel_rotation: 0.0,
            cabin_light: true,
        }
    }

    /// Toggle the cabin walkthrough. Entering it parks the camera in the
    /// aisle looking aft; it also leaves the cockpit if that was active.
    pub fn toggle_cabin_view(&mut self) -> ViewMode {
        if self.view_mode == ViewMode::Cabin {
            self.view_mode = ViewMode::Exterior;
        } else {
            self.view_mode = ViewMode::Cabin;
            self.camera.set_pose(Point3::new(2.0, 0.0, 0.0), PI, 0.0);
        }
        self.view_mode
    }

    /// Toggle the cockpit view, mutually exclusive with the cabin.
    pub fn toggle_cockpit_view(&mut self) -> ViewMode {
        if self.view_mode == ViewMode::Cockpit {
            self.view_mode = ViewMode::Exterior;
        } else {
            self.view_mode = ViewMode::Cockpit;
            self.camera.set_pose(Point3::new(6.5, 0.1, 0.0), 0.0, 0.0);
        }
        self.view_mode
    }

    pub fn toggle_cabin_light(&mut self) -> bool {
        self.cabin_light = !self.cabin_light;
        self.cabin_light
    }

    pub fn open_door(&mut self, dt: f32) {
        self.door_angle = (self.door_angle + DOOR_RATE * dt).min(DOOR_MAX);
    }

    pub fn close_door(&mut self, dt: f32) {
        self.door_angle = (self.door_angle - DOOR_RATE * dt).max(0.0);
    }

    pub fn spin_wheels(&mut self, dt: f32) {
        self.wheel_rotation += WHEEL_SPIN_RATE * dt;
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-5;

    #[test]
    fn test_door_clamps_at_both_ends() {
        let mut state = FlightState::new();
        for _ in 0..600 {
            state.open_door(DT);
            assert!(state.door_angle <= DOOR_MAX + EPS);
        }
        assert!((state.door_angle - DOOR_MAX).abs() < EPS);
        for _ in 0..600 {
            state.close_door(DT);
            assert!(state.door_angle >= -EPS);
        }
        assert!(state.door_angle.abs() < EPS);
    }

    #[test]
    fn test_door_takes_one_and_a_half_seconds() {
        // 90° at 60°/s.
        let mut state = FlightState::new();
        for _ in 0..90 {
            state.open_door(DT);
        }
        assert!((state.door_angle - DOOR_MAX).abs() < 1e-3);
    }

    #[test]
    fn test_view_modes_are_mutually_exclusive() {
        let mut state = FlightState::new();
        assert_eq!(state.toggle_cabin_view(), ViewMode::Cabin);
        // Switching straight to the cockpit leaves the cabin.
        assert_eq!(state.toggle_cockpit_view(), ViewMode::Cockpit);
        assert_eq!(state.view_mode, ViewMode::Cockpit);
        // Toggling the active mode returns to the exterior.
        assert_eq!(state.toggle_cockpit_view(), ViewMode::Exterior);
    }

    #[test]
    fn test_cabin_entry_parks_the_camera() {
        let mut state = FlightState::new();
        state.toggle_cabin_view();
        assert_eq!(state.camera.position, Point3::new(2.0, 0.0, 0.0));
        assert!((state.camera.yaw - std::f32::consts::PI).abs() < EPS);
        assert_eq!(state.camera.pitch, 0.0);
    }

    #[test]
    fn test_cockpit_entry_parks_the_camera() {
        let mut state = FlightState::new();
        state.toggle_cockpit_view();
        assert_eq!(state.camera.position, Point3::new(6.5, 0.1, 0.0));
        assert_eq!(state.camera.yaw, 0.0);
    }

    #[test]
    fn test_leaving_a_mode_keeps_the_camera() {
        let mut state = FlightState::new();
        state.toggle_cabin_view();
        state.camera.position = Point3::new(1.0, 0.5, 0.2);
        state.toggle_cabin_view();
        assert_eq!(state.view_mode, ViewMode::Exterior);
        assert_eq!(state.camera.position, Point3::new(1.0, 0.5, 0.2));
    }

    #[test]
    fn test_wheels_spin_without_bound() {
        let mut state = FlightState::new();
        for _ in 0..6_000 {
            state.spin_wheels(DT);
        }
        // 100 s at 200°/s is well past a full turn; nothing clamps it.
        assert!(state.wheel_rotation > 300.0 * PI / 180.0);
    }

    #[test]
    fn test_light_toggle() {
        let mut state = FlightState::new();
        assert!(state.cabin_light);
        assert!(!state.toggle_cabin_light());
        assert!(state.toggle_cabin_light());
    }
}
