//! Keyboard sampling for the airplane scene.

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::state::{FlightState, CAMERA_SPEED, TURN_RATE};

pub struct FlightInput {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    pitching: bool,
    yawing: bool,
    rolling: bool,
    door_opening: bool,
    door_closing: bool,
    wheels_spinning: bool,
    cabin_toggle_requested: bool,
    cockpit_toggle_requested: bool,
    light_toggle_requested: bool,
    escape_pressed: bool,
}

impl FlightInput {
    pub fn new() -> Self {
        FlightInput {
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
            pitching: false,
            yawing: false,
            rolling: false,
            door_opening: false,
            door_closing: false,
            wheels_spinning: false,
            cabin_toggle_requested: false,
            cockpit_toggle_requested: false,
            light_toggle_requested: false,
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
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::KeyE => self.up = pressed,
            KeyCode::KeyR => self.down = pressed,
            KeyCode::KeyX => self.pitching = pressed,
            KeyCode::KeyY => self.yawing = pressed,
            KeyCode::KeyZ => self.rolling = pressed,
            KeyCode::KeyO => self.door_opening = pressed,
            KeyCode::KeyC => self.door_closing = pressed,
            KeyCode::KeyM => self.wheels_spinning = pressed,
            KeyCode::KeyI => {
                if pressed {
                    self.cabin_toggle_requested = true;
                }
            }
            KeyCode::KeyP => {
                if pressed {
                    self.cockpit_toggle_requested = true;
                }
            }
            KeyCode::KeyL => {
                if pressed {
                    self.light_toggle_requested = true;
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

    fn movement_axes(&self) -> (f32, f32, f32) {
        let forward = (self.forward as i32 - self.backward as i32) as f32;
        let strafe = (self.right as i32 - self.left as i32) as f32;
        let vertical = (self.up as i32 - self.down as i32) as f32;
        (forward, strafe, vertical)
    }

    /// Apply one frame's worth of input to the state. Continuous controls
    /// scale with `dt`; toggles are consumed on the frame they fired.
    pub fn apply(&mut self, state: &mut FlightState, dt: f32) {
        let (forward, strafe, vertical) = self.movement_axes();
        state
            .camera
            .apply_movement(forward, strafe, vertical, dt, CAMERA_SPEED);

        // X/Y/Z accumulate in one direction only, like the original
        // control sheet.
        if self.pitching {
            state.camera.pitch += TURN_RATE * dt;
        }
        if self.yawing {
            state.camera.yaw += TURN_RATE * dt;
        }
        if self.rolling {
            state.camera.roll += TURN_RATE * dt;
        }

        if self.door_opening {
            state.open_door(dt);
        }
        if self.door_closing {
            state.close_door(dt);
        }
        if self.wheels_spinning {
            state.spin_wheels(dt);
        }

        if self.take_cabin_toggle() {
            let mode = state.toggle_cabin_view();
            log::info!("View mode: {mode:?}");
        }
        if self.take_cockpit_toggle() {
            let mode = state.toggle_cockpit_view();
            log::info!("View mode: {mode:?}");
        }
        if self.take_light_toggle() {
            let on = state.toggle_cabin_light();
            log::info!("Cabin lights: {}", if on { "ON" } else { "OFF" });
        }
    }

    fn take_cabin_toggle(&mut self) -> bool {
        std::mem::take(&mut self.cabin_toggle_requested)
    }

    fn take_cockpit_toggle(&mut self) -> bool {
        std::mem::take(&mut self.cockpit_toggle_requested)
    }

    fn take_light_toggle(&mut self) -> bool {
        std::mem::take(&mut self.light_toggle_requested)
    }

    pub fn take_escape(&mut self) -> bool {
        std::mem::take(&mut self.escape_pressed)
    }
}

impl Default for FlightInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airplane::state::{ViewMode, DOOR_RATE};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_light_toggle_fires_once_per_press_cycle() {
        let mut input = FlightInput::new();
        let mut state = FlightState::new();
        input.key(KeyCode::KeyL, true, false);
        input.apply(&mut state, DT);
        assert!(!state.cabin_light);
        // Repeats and further frames while held: no re-fire.
        input.key(KeyCode::KeyL, true, true);
        input.apply(&mut state, DT);
        input.apply(&mut state, DT);
        assert!(!state.cabin_light);
        input.key(KeyCode::KeyL, false, false);
        input.key(KeyCode::KeyL, true, false);
        input.apply(&mut state, DT);
        assert!(state.cabin_light);
    }

    #[test]
    fn test_view_toggles_stay_exclusive_through_input() {
        let mut input = FlightInput::new();
        let mut state = FlightState::new();
        input.key(KeyCode::KeyI, true, false);
        input.apply(&mut state, DT);
        assert_eq!(state.view_mode, ViewMode::Cabin);
        input.key(KeyCode::KeyI, false, false);
        input.key(KeyCode::KeyP, true, false);
        input.apply(&mut state, DT);
        assert_eq!(state.view_mode, ViewMode::Cockpit);
    }

    #[test]
    fn test_held_door_key_tracks_dt() {
        let mut input = FlightInput::new();
        let mut state = FlightState::new();
        input.key(KeyCode::KeyO, true, false);
        for _ in 0..30 {
            input.apply(&mut state, DT);
        }
        // Half a second at 60°/s.
        let expected = 30.0 * DT * DOOR_RATE;
        assert!((state.door_angle - expected).abs() < 1e-4);
    }

    #[test]
    fn test_opposed_movement_keys_cancel() {
        let mut input = FlightInput::new();
        input.key(KeyCode::KeyW, true, false);
        input.key(KeyCode::KeyS, true, false);
        let (forward, _, _) = input.movement_axes();
        assert_eq!(forward, 0.0);
    }
}
