use web_time::{Duration, Instant};

/// Fixed-rate tick clock for driving
/// [`CameraController::do_move`](crate::camera::controller::CameraController::do_move),
/// with a smoothed measured rate for diagnostics.
///
/// Camera physics are per tick, not per second, so the host should only
/// tick when [`should_tick`](Self::should_tick) says so.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target ticks per second (0 = unlimited)
    target_fps: u32,
    /// Minimum duration between ticks
    min_tick_duration: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed tick rate (exponential moving average)
    smoothed_fps: f32,
    /// Weight of each new sample, 0.0-1.0
    smoothing: f32,
}

impl FrameTiming {
    /// Create a tick clock targeting `target_fps` ticks per second
    /// (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_tick_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_tick_duration,
            last_tick: Instant::now(),
            smoothed_fps: target_fps as f32,
            smoothing: 0.05,
        }
    }

    /// Minimum time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.min_tick_duration
    }

    /// Whether enough time has passed since the last tick.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        self.should_tick_at(Instant::now())
    }

    /// [`should_tick`](Self::should_tick) against an explicit clock reading.
    #[must_use]
    pub fn should_tick_at(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_tick) >= self.min_tick_duration
    }

    /// Record that a tick ran now.
    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    /// Record that a tick ran at `now`.
    pub fn end_frame_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed measured tick rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_fps_interval() {
        let timing = FrameTiming::new(30);
        let interval = timing.tick_interval().as_secs_f64();
        assert!((interval - 1.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn waits_for_interval_before_next_tick() {
        let mut timing = FrameTiming::new(30);
        let start = Instant::now();
        timing.end_frame_at(start);
        assert!(!timing.should_tick_at(start + Duration::from_millis(10)));
        assert!(timing.should_tick_at(start + Duration::from_millis(34)));
    }

    #[test]
    fn unlimited_always_ticks() {
        let mut timing = FrameTiming::new(0);
        let start = Instant::now();
        timing.end_frame_at(start);
        assert!(timing.should_tick_at(start));
    }

    #[test]
    fn fps_converges_toward_measured_rate() {
        let mut timing = FrameTiming::new(30);
        let mut now = Instant::now();
        timing.end_frame_at(now);
        for _ in 0..200 {
            now += Duration::from_millis(50);
            timing.end_frame_at(now);
        }
        assert!((timing.fps() - 20.0).abs() < 0.5, "fps {}", timing.fps());
    }
}
