/// Default fixed-update period in seconds.
pub const DEFAULT_FIXED_TIMESTEP: f32 = 60.0 / 1000.0;

/// Callbacks driven once per frame by [`FixedStep::advance`].
pub trait Scene {
    /// Simulation step; always called with the fixed timestep.
    fn fixed_update(&mut self, dt: f32);

    /// Per-frame update with the variable frame delta.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Per-frame draw with the variable frame delta.
    fn draw(&mut self, dt: f32);
}

/// Fixed-timestep accumulator.
///
/// Each frame adds the elapsed time to an accumulator and drains it in
/// whole `timestep` slices, running `fixed_update` once per slice; the
/// remainder carries over to the next frame. `update` and `draw` then run
/// exactly once with the raw frame delta.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    ticks: u64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_TIMESTEP)
    }
}

impl FixedStep {
    /// Creates an accumulator with the given period in seconds.
    ///
    /// # Panics
    /// Panics if `timestep` is not positive and finite.
    pub fn new(timestep: f32) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "FixedStep::new: timestep must be positive and finite, got {timestep}"
        );
        Self {
            timestep,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    #[inline]
    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Time carried over, always in `[0, timestep)`.
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Total fixed ticks run so far.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.ticks
    }

    /// Interpolation factor between the last two fixed states.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }

    /// Runs one frame and returns how many fixed ticks it contained.
    ///
    /// A negative or non-finite `dt` is treated as zero.
    pub fn advance<S: Scene + ?Sized>(&mut self, dt: f32, scene: &mut S) -> u32 {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.accumulator += dt;
        let mut ticks = 0u32;
        while self.accumulator >= self.timestep {
            scene.fixed_update(self.timestep);
            self.accumulator -= self.timestep;
            ticks += 1;
        }
        self.ticks += u64::from(ticks);

        scene.update(dt);
        scene.draw(dt);

        ticks
    }
}
