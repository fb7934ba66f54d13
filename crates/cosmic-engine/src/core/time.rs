/// Per-frame clock.
/// Simulation runs once per rendered frame with the real frame delta, clamped
/// so a backgrounded tab does not fling the avatar across the system on resume.
pub struct FrameClock {
    max_dt: f32,
    dt: f32,
    elapsed: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            dt: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Start a new frame. Returns the clamped delta.
    /// Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.dt = dt;
        self.elapsed += dt;
        self.frame += 1;
        dt
    }

    /// Delta of the current frame.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Seconds of simulated time since start.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}
