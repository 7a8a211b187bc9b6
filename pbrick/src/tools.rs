//! Timing helpers for user programs.

use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// Pauses the current thread for the given duration.
///
/// A zero duration returns immediately without yielding.
pub fn wait(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    trace!(?duration, "wait");
    thread::sleep(duration);
}

/// Measures elapsed time, excluding time spent paused.
///
/// A watch starts running when created. Pausing freezes the reading;
/// resuming continues from where it left off. Pausing a paused watch or
/// resuming a running one does nothing.
#[derive(Debug, Clone)]
pub struct StopWatch {
    /// Time accumulated across completed running stretches.
    banked: Duration,
    /// Start of the current running stretch, `None` while paused.
    running_since: Option<Instant>,
}

impl StopWatch {
    /// Creates a watch that is already running.
    pub fn new() -> Self {
        Self {
            banked: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    /// Elapsed time since creation or the last [`reset`](Self::reset),
    /// not counting time spent paused.
    pub fn time(&self) -> Duration {
        match self.running_since {
            Some(since) => self.banked + since.elapsed(),
            None => self.banked,
        }
    }

    /// Freezes the reading. No effect if already paused.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
            trace!(elapsed = ?self.banked, "stopwatch paused");
        }
    }

    /// Continues measuring. No effect if already running.
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
            trace!("stopwatch resumed");
        }
    }

    /// Rezeroes the reading. Does not change whether the watch is running.
    pub fn reset(&mut self) {
        self.banked = Duration::ZERO;
        if self.running_since.is_some() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Whether the watch is currently accumulating time.
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_zero_returns_immediately() {
        let before = Instant::now();
        wait(Duration::ZERO);
        assert!(before.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_watch_runs_on_construction() {
        let watch = StopWatch::new();
        assert!(watch.is_running());
        wait(Duration::from_millis(10));
        assert!(watch.time() >= Duration::from_millis(10));
    }

    #[test]
    fn test_pause_freezes_the_reading() {
        let mut watch = StopWatch::new();
        wait(Duration::from_millis(5));
        watch.pause();
        let frozen = watch.time();
        wait(Duration::from_millis(10));
        assert_eq!(watch.time(), frozen);
        assert!(!watch.is_running());
    }

    #[test]
    fn test_resume_continues_from_the_frozen_reading() {
        let mut watch = StopWatch::new();
        wait(Duration::from_millis(5));
        watch.pause();
        let frozen = watch.time();
        watch.resume();
        wait(Duration::from_millis(5));
        let reading = watch.time();
        assert!(reading >= frozen + Duration::from_millis(5));
        // Time spent paused never appears in the reading.
        assert!(reading < frozen + Duration::from_secs(1));
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut watch = StopWatch::new();
        watch.pause();
        let frozen = watch.time();
        watch.pause();
        assert_eq!(watch.time(), frozen);
        watch.resume();
        watch.resume();
        assert!(watch.is_running());
    }

    #[test]
    fn test_reset_rezeroes_without_changing_state() {
        let mut watch = StopWatch::new();
        wait(Duration::from_millis(10));
        watch.reset();
        assert!(watch.is_running());
        assert!(watch.time() < Duration::from_millis(10));

        watch.pause();
        wait(Duration::from_millis(5));
        watch.reset();
        assert!(!watch.is_running());
        assert_eq!(watch.time(), Duration::ZERO);
    }
}
