use crate::api::config::{IdleConfig, IdleTiming};

/// Clock driving the idle float.
/// Under `FixedStep` it ignores frame time entirely, so one frame always
/// advances the same amount.
#[derive(Debug, Clone)]
pub struct IdleClock {
    timing: IdleTiming,
    /// Increment per frame under `FixedStep`.
    step: f32,
    /// Accumulated idle time in seconds.
    elapsed: f32,
}

impl IdleClock {
    pub fn new(timing: IdleTiming, step: f32) -> Self {
        Self {
            timing,
            step,
            elapsed: 0.0,
        }
    }

    pub fn from_config(config: &IdleConfig) -> Self {
        Self::new(config.timing, config.step)
    }

    /// Advance one frame. Returns the accumulated time.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        self.elapsed += match self.timing {
            IdleTiming::FixedStep => self.step,
            IdleTiming::WallClock => frame_dt.max(0.0),
        };
        self.elapsed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn timing(&self) -> IdleTiming {
        self.timing
    }
}

/// `amplitude * sin(t * frequency)`.
pub fn float_offset(t: f32, config: &IdleConfig) -> f32 {
    (t * config.frequency).sin() * config.amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_ignores_frame_time() {
        let mut clock = IdleClock::new(IdleTiming::FixedStep, 0.016);
        clock.advance(0.1);
        clock.advance(0.001);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_tracks_frame_time() {
        let mut clock = IdleClock::new(IdleTiming::WallClock, 0.016);
        clock.advance(0.1);
        clock.advance(0.05);
        assert!((clock.elapsed() - 0.15).abs() < 1e-6);
    }

    #[test]
    fn negative_frame_time_does_not_rewind() {
        let mut clock = IdleClock::new(IdleTiming::WallClock, 0.016);
        clock.advance(-1.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn float_offset_is_bounded_by_amplitude() {
        let config = IdleConfig::default();
        for i in 0..1000 {
            let y = float_offset(i as f32 * 0.016, &config);
            assert!(y.abs() <= config.amplitude + 1e-6);
        }
        assert_eq!(float_offset(0.0, &config), 0.0);
    }
}
