//! Keyboard sampling for the crane scene.
//!
//! Held keys drive the continuous controls once per frame; R and A are
//! edge-triggered toggles latched on the press transition and consumed
//! when applied, so holding a key never re-fires them.

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::state::CraneState;

pub struct CraneInput {
    drive_left: bool,
    drive_right: bool,
    boom_up: bool,
    boom_down: bool,
    swing_neg: bool,
    swing_pos: bool,
    sweep_toggle_requested: bool,
    auto_move_toggle_requested: bool,
    escape_pressed: bool,
}

impl CraneInput {
    pub fn new() -> Self {
        CraneInput {
            drive_left: false,
            drive_right: false,
            boom_up: false,
            boom_down: false,
            swing_neg: false,
            swing_pos: false,
            sweep_toggle_requested: false,
            auto_move_toggle_requested: false,
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
            KeyCode::ArrowLeft => self.drive_left = pressed,
            KeyCode::ArrowRight => self.drive_right = pressed,
            KeyCode::ArrowUp => self.boom_up = pressed,
            KeyCode::ArrowDown => self.boom_down = pressed,
            KeyCode::KeyQ => self.swing_neg = pressed,
            KeyCode::KeyE => self.swing_pos = pressed,
            KeyCode::KeyR => {
                if pressed {
                    self.sweep_toggle_requested = true;
                }
            }
            KeyCode::KeyA => {
                if pressed {
                    self.auto_move_toggle_requested = true;
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

    /// Apply one frame's worth of input to the state.
    pub fn apply(&mut self, state: &mut CraneState) {
        if self.boom_up {
            state.raise_boom();
        }
        if self.boom_down {
            state.lower_boom();
        }
        if self.drive_right {
            state.drive(1.0);
        }
        if self.drive_left {
            state.drive(-1.0);
        }
        if self.swing_neg {
            state.swing(-1.0);
        }
        if self.swing_pos {
            state.swing(1.0);
        }
        if self.take_sweep_toggle() {
            let on = state.toggle_boom_sweep();
            log::info!("Boom auto-sweep: {}", if on { "ON" } else { "OFF" });
        }
        if self.take_auto_move_toggle() {
            let on = state.toggle_auto_move();
            log::info!("Auto-movement: {}", if on { "ON" } else { "OFF" });
        }
    }

    fn take_sweep_toggle(&mut self) -> bool {
        std::mem::take(&mut self.sweep_toggle_requested)
    }

    fn take_auto_move_toggle(&mut self) -> bool {
        std::mem::take(&mut self.auto_move_toggle_requested)
    }

    pub fn take_escape(&mut self) -> bool {
        std::mem::take(&mut self.escape_pressed)
    }
}

impl Default for CraneInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crane::state::BOOM_STEP;

    #[test]
    fn test_toggle_fires_once_per_press_cycle() {
        let mut input = CraneInput::new();
        let mut state = CraneState::new();
        assert!(!state.boom_sweeping);

        input.key(KeyCode::KeyR, true, false);
        input.apply(&mut state);
        assert!(state.boom_sweeping);

        // Held key: the OS delivers repeats, the sampler must ignore them.
        input.key(KeyCode::KeyR, true, true);
        input.apply(&mut state);
        input.apply(&mut state);
        assert!(state.boom_sweeping);

        input.key(KeyCode::KeyR, false, false);
        input.apply(&mut state);
        assert!(state.boom_sweeping);

        input.key(KeyCode::KeyR, true, false);
        input.apply(&mut state);
        assert!(!state.boom_sweeping);
    }

    #[test]
    fn test_auto_move_toggle_is_edge_triggered() {
        let mut input = CraneInput::new();
        let mut state = CraneState::new();
        input.key(KeyCode::KeyA, true, false);
        input.apply(&mut state);
        assert!(state.auto_moving);
        // Press latched once; further frames without a release change
        // nothing.
        for _ in 0..5 {
            input.apply(&mut state);
        }
        assert!(state.auto_moving);
    }

    #[test]
    fn test_held_arrows_step_every_frame() {
        let mut input = CraneInput::new();
        let mut state = CraneState::new();
        let start = state.boom_angle;
        input.key(KeyCode::ArrowUp, true, false);
        for _ in 0..10 {
            input.apply(&mut state);
        }
        assert!((state.boom_angle - (start + 10.0 * BOOM_STEP)).abs() < 1e-5);
        input.key(KeyCode::ArrowUp, false, false);
        input.apply(&mut state);
        assert!((state.boom_angle - (start + 10.0 * BOOM_STEP)).abs() < 1e-5);
    }

    #[test]
    fn test_opposed_arrows_cancel() {
        let mut input = CraneInput::new();
        let mut state = CraneState::new();
        input.key(KeyCode::ArrowLeft, true, false);
        input.key(KeyCode::ArrowRight, true, false);
        input.apply(&mut state);
        assert_eq!(state.position_x, 0.0);
    }

    #[test]
    fn test_escape_is_consumed() {
        let mut input = CraneInput::new();
        input.key(KeyCode::Escape, true, false);
        assert!(input.take_escape());
        assert!(!input.take_escape());
    }
}
