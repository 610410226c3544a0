use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stalled or paused loop does not feed the
/// fixed-step accumulator a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms to 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock by wall time and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.advance(now, elapsed)
    }

    /// Advances the clock by a caller-supplied delta.
    ///
    /// Used by headless and test drivers that step time deterministically.
    /// `now` advances by the clamped delta.
    pub fn tick_with(&mut self, elapsed: Duration) -> FrameTime {
        let elapsed = elapsed.min(self.dt_max);
        let now = self.last + elapsed;
        self.advance(now, elapsed)
    }

    fn advance(&mut self, now: Instant, elapsed: Duration) -> FrameTime {
        let dt = elapsed.clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
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
    fn tick_with_counts_frames() {
        let mut clock = FrameClock::new();
        let a = clock.tick_with(Duration::from_millis(16));
        let b = clock.tick_with(Duration::from_millis(16));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!(b.now > a.now);
        assert!((a.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped() {
        let mut clock = FrameClock::new();
        assert!((clock.tick_with(Duration::from_secs(5)).dt - 0.25).abs() < 1e-6);
        assert!((clock.tick_with(Duration::ZERO).dt - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn tick_with_huge_delta_is_clamped() {
        let mut clock = FrameClock::new();
        let start = clock.tick_with(Duration::ZERO).now;
        let ft = clock.tick_with(Duration::MAX);
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.now - start, Duration::from_millis(250));
    }
}
