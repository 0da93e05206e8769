//! Crane animation state and its timed update rule.
//!
//! Angles are radians throughout; the degree figures from the control
//! sheet appear only in the constants below.

use std::f32::consts::PI;

/// Boom articulation band.
pub const BOOM_MIN: f32 = 20.0 * PI / 180.0;
pub const BOOM_MAX: f32 = 70.0 * PI / 180.0;
/// Whole-body swing limit, ±45° expressed the way the chassis stores it.
pub const BODY_ROTATION_LIMIT: f32 = 0.785;
/// Manual travel limit along X (clip-space units).
pub const TRAVEL_LIMIT: f32 = 0.5;

/// Per-polled-frame input steps. These are deliberately not dt-scaled:
/// held keys advance the pose by a fixed amount per frame.
pub const BOOM_STEP: f32 = 0.5 * PI / 180.0;
pub const DRIVE_STEP: f32 = 0.003;
pub const WHEEL_STEP: f32 = 0.03;
pub const BODY_ROTATION_STEP: f32 = 0.01;

const HOOK_MIN: f32 = -0.1;
const HOOK_MAX: f32 = 0.5;
const HOOK_SPEED: f32 = 0.3;
const SWEEP_RATE: f32 = 15.0 * PI / 180.0;
const AUTO_DRIVE_SPEED: f32 = 0.1;
const AUTO_WHEEL_RATE: f32 = 1.0;
const AUTO_TRAVEL_LIMIT: f32 = 0.4;

/// The full pose of the crane, overwritten every frame.
pub struct CraneState {
    pub position_x: f32,
    pub wheel_rotation: f32,
    pub boom_angle: f32,
    pub hook_height: f32,
    pub body_rotation: f32,
    pub boom_sweeping: bool,
    pub auto_moving: bool,
    hook_falling: bool,
    auto_direction: f32,
}

impl CraneState {
    pub fn new() -> Self {
        CraneState {
            position_x: 0.0,
            wheel_rotation: 0.0,
            boom_angle: 45.0 * PI / 180.0,
            hook_height: 0.35,
            body_rotation: 0.0,
            boom_sweeping: false,
            auto_moving: false,
            hook_falling: true,
            auto_direction: 1.0,
        }
    }

    /// Advance the autonomous animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        // The hook bounces: direction reflects at both ends of the band.
        if self.hook_falling {
            self.hook_height -= HOOK_SPEED * dt;
            if self.hook_height < HOOK_MIN {
                self.hook_height = HOOK_MIN;
                self.hook_falling = false;
            }
        } else {
            self.hook_height += HOOK_SPEED * dt;
            if self.hook_height > HOOK_MAX {
                self.hook_height = HOOK_MAX;
                self.hook_falling = true;
            }
        }

        // The sweep is a sawtooth: past the top it snaps back to the
        // bottom of the band. Not a reflection like the hook.
        if self.boom_sweeping {
            self.boom_angle += SWEEP_RATE * dt;
            if self.boom_angle > BOOM_MAX {
                self.boom_angle = BOOM_MIN;
            }
        }

        if self.auto_moving {
            self.position_x += self.auto_direction * AUTO_DRIVE_SPEED * dt;
            self.wheel_rotation += self.auto_direction * AUTO_WHEEL_RATE * dt;
            if self.position_x > AUTO_TRAVEL_LIMIT {
                self.auto_direction = -1.0;
            } else if self.position_x < -AUTO_TRAVEL_LIMIT {
                self.auto_direction = 1.0;
            }
        }
    }

    pub fn raise_boom(&mut self) {
        self.boom_angle = (self.boom_angle + BOOM_STEP).min(BOOM_MAX);
    }

    pub fn lower_boom(&mut self) {
        self.boom_angle = (self.boom_angle - BOOM_STEP).max(BOOM_MIN);
    }

    /// Drive the chassis; `direction` is +1 (right) or -1 (left). The
    /// wheels keep spinning even when the chassis sits at the travel
    /// clamp.
    pub fn drive(&mut self, direction: f32) {
        self.position_x =
            (self.position_x + direction * DRIVE_STEP).clamp(-TRAVEL_LIMIT, TRAVEL_LIMIT);
        self.wheel_rotation += direction * WHEEL_STEP;
    }

    pub fn swing(&mut self, direction: f32) {
        self.body_rotation = (self.body_rotation + direction * BODY_ROTATION_STEP)
            .clamp(-BODY_ROTATION_LIMIT, BODY_ROTATION_LIMIT);
    }

    pub fn toggle_boom_sweep(&mut self) -> bool {
        self.boom_sweeping = !self.boom_sweeping;
        self.boom_sweeping
    }

    pub fn toggle_auto_move(&mut self) -> bool {
        self.auto_moving = !self.auto_moving;
        self.auto_moving
    }
}

impl Default for CraneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-4;

    #[test]
    fn test_boom_clamps_when_raised_forever() {
        let mut state = CraneState::new();
        for _ in 0..10_000 {
            state.raise_boom();
            assert!(state.boom_angle <= BOOM_MAX + EPS);
        }
        assert!((state.boom_angle - BOOM_MAX).abs() < EPS);
        for _ in 0..10_000 {
            state.lower_boom();
            assert!(state.boom_angle >= BOOM_MIN - EPS);
        }
        assert!((state.boom_angle - BOOM_MIN).abs() < EPS);
    }

    #[test]
    fn test_boom_hold_fifty_frames_from_center() {
        // 45° + 50 frames at 0.5°/frame = 70°, right at the clamp.
        let mut state = CraneState::new();
        for _ in 0..50 {
            state.raise_boom();
        }
        assert!((state.boom_angle - BOOM_MAX).abs() < EPS);
    }

    #[test]
    fn test_swing_clamps_both_ways() {
        let mut state = CraneState::new();
        for _ in 0..1_000 {
            state.swing(1.0);
        }
        assert!((state.body_rotation - BODY_ROTATION_LIMIT).abs() < EPS);
        for _ in 0..10_000 {
            state.swing(-1.0);
        }
        assert!((state.body_rotation + BODY_ROTATION_LIMIT).abs() < EPS);
    }

    #[test]
    fn test_drive_clamps_position_but_not_wheels() {
        // 200 frames to the right: x clamps at 0.5, wheels accumulate
        // the full 6 radians.
        let mut state = CraneState::new();
        for _ in 0..200 {
            state.drive(1.0);
        }
        assert!((state.position_x - TRAVEL_LIMIT).abs() < EPS);
        assert!((state.wheel_rotation - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_hook_is_a_triangle_wave() {
        let mut state = CraneState::new();
        let mut seen_bottom = false;
        let mut seen_top = false;
        let mut previous = state.hook_height;
        let mut direction = -1.0f32;
        // Period is (0.6 / 0.3) * 2 = 4 s; simulate 10 s.
        for _ in 0..600 {
            state.advance(DT);
            assert!(state.hook_height >= -0.1 - EPS);
            assert!(state.hook_height <= 0.5 + EPS);
            let delta = state.hook_height - previous;
            if delta.abs() > EPS {
                let new_direction = delta.signum();
                if new_direction != direction {
                    // Direction only flips at a band edge (reflection).
                    assert!(
                        previous <= -0.1 + 0.01 || previous >= 0.5 - 0.01,
                        "direction flipped mid-band at {previous}"
                    );
                    direction = new_direction;
                }
            }
            if (state.hook_height - -0.1).abs() < 0.01 {
                seen_bottom = true;
            }
            if (state.hook_height - 0.5).abs() < 0.01 {
                seen_top = true;
            }
            previous = state.hook_height;
        }
        assert!(seen_bottom && seen_top);
    }

    #[test]
    fn test_boom_sweep_is_a_sawtooth() {
        let mut state = CraneState::new();
        state.toggle_boom_sweep();
        let mut previous = state.boom_angle;
        let mut wraps = 0;
        // 25°/15°-per-second to the top, so several wraps in 20 s.
        for _ in 0..1_200 {
            state.advance(DT);
            assert!(state.boom_angle >= BOOM_MIN - EPS);
            assert!(state.boom_angle <= BOOM_MAX + SWEEP_RATE * DT);
            if state.boom_angle < previous {
                // The only decrease allowed is the snap back to the
                // bottom of the band.
                assert!((state.boom_angle - BOOM_MIN).abs() < EPS);
                assert!(previous > BOOM_MAX - SWEEP_RATE * DT - EPS);
                wraps += 1;
            }
            previous = state.boom_angle;
        }
        assert!(wraps >= 2, "expected several sawtooth wraps, saw {wraps}");
    }

    #[test]
    fn test_auto_move_reflects_and_spins_wheels() {
        let mut state = CraneState::new();
        state.toggle_auto_move();
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        let wheel_before = state.wheel_rotation;
        // 0.8 units per direction at 0.1/s: 30 s covers both ends twice.
        for _ in 0..1_800 {
            state.advance(DT);
            min_x = min_x.min(state.position_x);
            max_x = max_x.max(state.position_x);
            // One tick may overshoot the reflection point, never more.
            assert!(state.position_x.abs() <= AUTO_TRAVEL_LIMIT + AUTO_DRIVE_SPEED * DT + EPS);
        }
        assert!(max_x > AUTO_TRAVEL_LIMIT - 0.05);
        assert!(min_x < -AUTO_TRAVEL_LIMIT + 0.05);
        // Wheels moved with the chassis; net displacement is small but
        // travel is not.
        assert!(state.wheel_rotation != wheel_before);
    }

    #[test]
    fn test_sweep_and_auto_move_default_off() {
        let mut state = CraneState::new();
        let boom = state.boom_angle;
        let x = state.position_x;
        for _ in 0..100 {
            state.advance(DT);
        }
        assert_eq!(state.boom_angle, boom);
        assert_eq!(state.position_x, x);
    }
}
