//! Debug HUD and frame statistics

use std::collections::VecDeque;
use std::time::Duration;

/// How many frame samples the rolling window keeps.
const MAX_SAMPLES: usize = 120;

/// Summary of the recent frame-time window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    /// Frames per second over the window
    pub fps: f32,
    /// Average frame time in milliseconds
    pub avg_ms: f32,
    /// Fastest frame in milliseconds
    pub min_ms: f32,
    /// Slowest frame in milliseconds
    pub max_ms: f32,
}

/// Rolling frame-time tracker.
#[derive(Debug, Default)]
pub struct FrameStats {
    frame_times: VecDeque<Duration>,
    total_frames: u64,
}

impl FrameStats {
    /// Create a new frame stats tracker
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            total_frames: 0,
        }
    }

    /// Record a frame with the given delta time
    pub fn record_frame(&mut self, delta: Duration) {
        self.total_frames += 1;
        if self.frame_times.len() >= MAX_SAMPLES {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);
    }

    /// Summarize the sample window in one pass.
    pub fn summary(&self) -> FrameSummary {
        let mut total = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;

        for &dt in &self.frame_times {
            total += dt;
            min = min.min(dt);
            max = max.max(dt);
        }

        let count = self.frame_times.len() as f32;
        let total_secs = total.as_secs_f32();
        if count == 0.0 || total_secs == 0.0 {
            return FrameSummary {
                fps: 0.0,
                avg_ms: 0.0,
                min_ms: 0.0,
                max_ms: 0.0,
            };
        }

        FrameSummary {
            fps: count / total_secs,
            avg_ms: total_secs / count * 1000.0,
            min_ms: min.as_secs_f32() * 1000.0,
            max_ms: max.as_secs_f32() * 1000.0,
        }
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.summary().fps
    }

    /// Get total frames recorded
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Get the number of samples in the window
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Get a formatted stats string
    pub fn format_stats(&self) -> String {
        let s = self.summary();
        format!(
            "FPS: {:.1} | Frame: {:.2}ms (min: {:.2}, max: {:.2})",
            s.fps, s.avg_ms, s.min_ms, s.max_ms
        )
    }
}

/// On-screen debug overlay state.
///
/// Games push lines during update; the engine draws them when the overlay
/// is enabled and clears them at the end of every frame, so a line lives
/// exactly one frame.
#[derive(Debug, Default)]
pub struct DebugHud {
    /// Whether the overlay is drawn
    pub enabled: bool,
    /// Frame statistics
    pub frame_stats: FrameStats,
    /// Lines pushed by the game this frame
    lines: Vec<String>,
}

impl DebugHud {
    /// Create a new HUD, disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the overlay on or off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!(
            "Debug HUD {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }

    /// Add a line to this frame's overlay
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Clear this frame's lines
    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// All lines to draw, frame stats first
    pub fn hud_lines(&self) -> Vec<String> {
        let mut lines = vec![self.frame_stats.format_stats()];
        lines.extend(self.lines.iter().cloned());
        lines
    }

    /// Record a frame
    pub fn record_frame(&mut self, delta: Duration) {
        self.frame_stats.record_frame(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_from_steady_frames() {
        let mut stats = FrameStats::new();
        for _ in 0..10 {
            stats.record_frame(Duration::from_millis(10));
        }

        let summary = stats.summary();
        assert!((summary.fps - 100.0).abs() < 0.5);
        assert!((summary.avg_ms - 10.0).abs() < 0.01);
        assert_eq!(stats.total_frames(), 10);
    }

    #[test]
    fn test_summary_min_max() {
        let mut stats = FrameStats::new();
        stats.record_frame(Duration::from_millis(5));
        stats.record_frame(Duration::from_millis(20));
        stats.record_frame(Duration::from_millis(10));

        let summary = stats.summary();
        assert!((summary.min_ms - 5.0).abs() < 0.01);
        assert!((summary.max_ms - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut stats = FrameStats::new();
        for _ in 0..(MAX_SAMPLES + 30) {
            stats.record_frame(Duration::from_millis(16));
        }

        assert_eq!(stats.sample_count(), MAX_SAMPLES);
        assert_eq!(stats.total_frames(), (MAX_SAMPLES + 30) as u64);
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = FrameStats::new();
        let summary = stats.summary();
        assert_eq!(summary.fps, 0.0);
        assert_eq!(summary.avg_ms, 0.0);
    }

    #[test]
    fn test_hud_lines_stats_first() {
        let mut hud = DebugHud::new();
        hud.record_frame(Duration::from_millis(10));
        hud.add_line("Absolute | x: 1.0 y: 2.0");
        hud.add_line("Chunk    | x: 0 y: 0");

        let lines = hud.hud_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("FPS:"));
        assert_eq!(lines[1], "Absolute | x: 1.0 y: 2.0");

        hud.clear_lines();
        assert_eq!(hud.hud_lines().len(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut hud = DebugHud::new();
        assert!(!hud.enabled);
        hud.toggle();
        assert!(hud.enabled);
        hud.toggle();
        assert!(!hud.enabled);
    }
}
