//! Step pacing for sorting runs
//!
//! A runner calls [`StepScheduler::after`] right after it mutates the store.
//! The scheduler holds the run for the requested delay, during which the
//! mutations already applied are what an observer sees, and then lets the
//! runner continue. Suspensions resume strictly in the order they were issued
//! because only one run is ever active.
//!
//! Every scheduler checks a shared [`CancelToken`] before resuming, so a caller
//! on another thread can stop a paced run at its next suspension point.

use crate::sorting::errors::{Result, SortError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Suspension point between two observable steps
pub trait StepScheduler {
    /// Hold the run for `delay`; a zero delay means no pause
    fn after(&mut self, delay: Duration) -> Result<()>;
}

/// Cooperative cancellation flag shared between a run and its controller
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SortError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Never sleeps; used for headless runs, recording, and tests
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    cancel: CancelToken,
    pauses: usize,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(cancel: CancelToken) -> Self {
        ImmediateScheduler { cancel, pauses: 0 }
    }

    /// Number of suspension points passed so far
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl StepScheduler for ImmediateScheduler {
    fn after(&mut self, _delay: Duration) -> Result<()> {
        self.cancel.check()?;
        self.pauses += 1;
        Ok(())
    }
}

/// Blocks the calling thread for each delay
#[derive(Debug, Default)]
pub struct SleepScheduler {
    cancel: CancelToken,
}

impl SleepScheduler {
    pub fn new(cancel: CancelToken) -> Self {
        SleepScheduler { cancel }
    }
}

impl StepScheduler for SleepScheduler {
    fn after(&mut self, delay: Duration) -> Result<()> {
        self.cancel.check()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        // Cancellation during the sleep stops the run before it resumes
        self.cancel.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_immediate_counts_pauses() {
        let mut scheduler = ImmediateScheduler::new();
        scheduler.after(Duration::from_secs(5)).unwrap();
        scheduler.after(Duration::ZERO).unwrap();
        assert_eq!(scheduler.pauses(), 2);
    }

    #[test]
    fn test_cancel_stops_at_next_suspension() {
        let token = CancelToken::new();
        let mut scheduler = ImmediateScheduler::with_cancel(token.clone());
        assert!(scheduler.after(Duration::ZERO).is_ok());

        token.cancel();
        assert_eq!(scheduler.after(Duration::ZERO), Err(SortError::Cancelled));
        assert_eq!(scheduler.pauses(), 1);
    }

    #[test]
    fn test_sleep_scheduler_waits() {
        let mut scheduler = SleepScheduler::default();
        let start = Instant::now();
        scheduler.after(Duration::from_millis(20)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_sleep_scheduler_zero_delay_returns_immediately() {
        let token = CancelToken::new();
        let mut scheduler = SleepScheduler::new(token.clone());
        assert!(scheduler.after(Duration::ZERO).is_ok());
        token.cancel();
        assert!(scheduler.after(Duration::ZERO).is_err());
    }
}
