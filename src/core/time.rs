//! Frame timing

use std::time::{Duration, Instant};

/// Tracks elapsed time and per-frame deltas.
///
/// [`Time::update`] runs once at the top of each frame; everything the game
/// reads during that frame (`delta`, `delta_seconds`) stays constant until
/// the next update.
#[derive(Debug, Clone)]
pub struct Time {
    start: Instant,
    prev: Instant,
    delta: Duration,
}

impl Time {
    /// Create a new timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            prev: now,
            delta: Duration::ZERO,
        }
    }

    /// Advance to the current instant, computing the frame delta
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.prev);
        self.prev = now;
    }

    /// Time the previous frame took
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Time the previous frame took, in seconds
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Sleep off the rest of the frame budget.
    ///
    /// Measures from the last [`Time::update`]; a frame that already spent
    /// its budget is not delayed further. A target of 0 disables capping.
    pub fn cap_frame_rate(&self, target_fps: u32) {
        if target_fps == 0 {
            return;
        }
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps));
        if let Some(remaining) = budget.checked_sub(self.prev.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_delta_tracks_frame_time() {
        let mut time = Time::new();
        assert_eq!(time.delta(), Duration::ZERO);

        thread::sleep(Duration::from_millis(10));
        time.update();

        assert!(time.delta() >= Duration::from_millis(10));
        assert!(time.delta_seconds() > 0.0);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let time = Time::new();
        let first = time.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert!(time.elapsed() > first);
    }

    #[test]
    fn test_cap_frame_rate_sleeps_off_budget() {
        let mut time = Time::new();
        time.update();

        let before = Instant::now();
        // 50 fps = 20ms budget, nearly all of it still unspent
        time.cap_frame_rate(50);
        assert!(before.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_cap_frame_rate_zero_disables() {
        let mut time = Time::new();
        time.update();

        let before = Instant::now();
        time.cap_frame_rate(0);
        assert!(before.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_cap_frame_rate_skips_when_over_budget() {
        let mut time = Time::new();
        time.update();
        thread::sleep(Duration::from_millis(15));

        let before = Instant::now();
        // 100 fps budget already blown by the sleep above
        time.cap_frame_rate(100);
        assert!(before.elapsed() < Duration::from_millis(100));
    }
}
