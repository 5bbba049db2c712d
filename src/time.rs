//! Frame pacing.
//!
//! [`FrameClock`] is the frame-rate governor of the frame loop: it says when
//! the next tick is due and keeps delta, frame count and FPS statistics.
//!
//! # Example
//!
//! ```ignore
//! use sparkbox::time::FrameClock;
//!
//! let mut clock = FrameClock::new(60);
//!
//! // In the event loop:
//! if clock.is_due(Instant::now()) {
//!     let delta = clock.tick(Instant::now());
//!     // ... run one frame ...
//! }
//! event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_frame()));
//! ```

use std::time::{Duration, Instant};

/// Fixed-rate frame governor with FPS measurement.
#[derive(Debug)]
pub struct FrameClock {
    /// Target time between ticks.
    interval: Duration,
    /// When the last tick happened.
    last_tick: Instant,
    /// Earliest instant the next tick may run.
    next_frame: Instant,
    /// Time between the last two ticks in seconds.
    delta_secs: f32,
    /// Total ticks since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Create a clock targeting `fps` ticks per second. The first tick is due
    /// immediately.
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    /// Create a clock as if started at `now`.
    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last_tick: now,
            next_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Whether the next tick is due at `now`.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Earliest instant the next tick may run.
    #[inline]
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Record a tick at `now` and schedule the next one.
    ///
    /// Returns the seconds elapsed since the previous tick. The next tick is
    /// scheduled one interval after `now`, so a late frame delays the
    /// schedule instead of causing a burst of catch-up ticks.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.delta_secs = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.next_frame = now + self.interval;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Target time between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Seconds between the last two ticks.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured ticks per second, refreshed twice a second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let start = Instant::now();
        let clock = FrameClock::starting_at(60, start);
        assert_eq!(clock.frame(), 0);
        assert!(clock.is_due(start));
        assert_eq!(clock.fps(), 0.0);
        assert!((clock.interval().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_schedules_next_frame() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(50, start);

        let t1 = start + Duration::from_millis(5);
        let delta = clock.tick(t1);
        assert!((delta - 0.005).abs() < 1e-4);
        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.next_frame(), t1 + Duration::from_millis(20));

        assert!(!clock.is_due(t1 + Duration::from_millis(19)));
        assert!(clock.is_due(t1 + Duration::from_millis(20)));
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(100, start);
        let late = start + Duration::from_secs(1);
        clock.tick(late);
        assert_eq!(clock.next_frame(), late + Duration::from_millis(10));
    }

    #[test]
    fn test_fps_estimate() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(60, start);
        for i in 1..=60u64 {
            clock.tick(start + Duration::from_millis(i * 10));
        }
        // 100 ticks/s spaced 10 ms apart
        assert!((clock.fps() - 100.0).abs() < 5.0, "fps {}", clock.fps());
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.interval(), Duration::from_secs(1));
    }
}
