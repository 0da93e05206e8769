//! Frame timing.

use std::time::Instant;

/// Longest delta ever handed to the animation. A stall (debugger pause,
/// window drag) otherwise arrives as one giant step and teleports every
/// autonomous part across its band.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Measures the elapsed time between frames.
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            last_frame: Instant::now(),
        }
    }

    /// Seconds since the previous tick, clamped to [`MAX_FRAME_DELTA`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt.min(MAX_FRAME_DELTA)
    }

    /// Restart measurement from now, e.g. after window creation.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_bounded() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_successive_ticks_are_small() {
        let mut clock = FrameClock::new();
        clock.tick();
        let dt = clock.tick();
        assert!(dt < 0.05, "back-to-back ticks should be near-zero, got {dt}");
    }
}
