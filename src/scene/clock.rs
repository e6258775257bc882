/// Elapsed-time source shared by every animated quantity in the scene.
///
/// Owned by the driver and advanced from host timestamps; sub-scenes only
/// ever see `seconds()`.
#[derive(Clone, Debug, Default)]
pub struct SceneClock {
    elapsed: f64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt `now_seconds` as the current elapsed time and return the step.
    ///
    /// Timestamps earlier than the current value are ignored so the clock
    /// stays monotonic; the returned step is then zero.
    pub fn sync(&mut self, now_seconds: f64) -> f32 {
        if !now_seconds.is_finite() || now_seconds <= self.elapsed {
            return 0.0;
        }
        let dt = now_seconds - self.elapsed;
        self.elapsed = now_seconds;
        dt as f32
    }

    #[inline]
    pub fn seconds(&self) -> f32 {
        self.elapsed as f32
    }

    #[inline]
    pub fn seconds_f64(&self) -> f64 {
        self.elapsed
    }
}
