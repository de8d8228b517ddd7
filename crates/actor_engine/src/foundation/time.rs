//! Time management utilities
//!
//! The frame loop never reads the system clock directly. It goes through a
//! [`Clock`] so tests can drive frame pacing with a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source used for frame pacing
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin
    fn now(&self) -> Duration;

    /// Block the calling thread for at least `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock time backed by [`Instant`]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of construction
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Deterministic clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `duration`
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

/// Frame pacing and delta-time clamping
///
/// Each [`tick`](FrameTimer::tick) waits until at least the minimum frame
/// interval has passed since the previous tick, then reports the elapsed time
/// in seconds clamped to `max_delta`.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    min_interval: Duration,
    max_delta: f32,
    last_tick: Duration,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameTimer {
    /// Create a timer with the given pacing interval and delta clamp (seconds)
    pub fn new(min_interval: Duration, max_delta: f32) -> Self {
        Self {
            min_interval,
            max_delta,
            last_tick: Duration::ZERO,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Restart measurement from `now`
    pub fn reset(&mut self, now: Duration) {
        self.last_tick = now;
    }

    /// Wait for the next frame slot and return the clamped delta time
    pub fn tick(&mut self, clock: &mut dyn Clock) -> f32 {
        let target = self.last_tick + self.min_interval;
        let mut now = clock.now();
        while now < target {
            clock.sleep(target - now);
            now = clock.now();
        }

        let elapsed = now.saturating_sub(self.last_tick).as_secs_f32();
        let delta_time = if elapsed > self.max_delta {
            log::trace!(
                "Clamping frame delta from {:.4}s to {:.4}s",
                elapsed,
                self.max_delta
            );
            self.max_delta
        } else {
            elapsed
        };

        self.last_tick = now;
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
        delta_time
    }

    /// Delta time produced by the most recent tick
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Sum of all clamped deltas so far
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Upper bound applied to every delta
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timer() -> FrameTimer {
        FrameTimer::new(Duration::from_millis(16), 0.05)
    }

    #[test]
    fn test_tick_waits_for_minimum_interval() {
        let mut clock = ManualClock::new();
        let mut timer = timer();

        let delta = timer.tick(&mut clock);

        assert_eq!(clock.now(), Duration::from_millis(16));
        assert_relative_eq!(delta, 0.016, epsilon = 1e-6);
    }

    #[test]
    fn test_tick_clamps_long_stalls() {
        let mut clock = ManualClock::new();
        let mut timer = timer();

        clock.advance(Duration::from_millis(500));
        let delta = timer.tick(&mut clock);

        assert_relative_eq!(delta, 0.05);
        assert_eq!(timer.frame_count(), 1);
    }

    #[test]
    fn test_tick_passes_through_moderate_delta() {
        let mut clock = ManualClock::new();
        let mut timer = timer();

        clock.advance(Duration::from_millis(30));
        let delta = timer.tick(&mut clock);

        assert_relative_eq!(delta, 0.03, epsilon = 1e-6);
        assert_relative_eq!(timer.total_time(), 0.03, epsilon = 1e-6);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
