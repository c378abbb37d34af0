//! Fixed rate scheduling and cooperative cancellation.
use crate::Error;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

/// Shared stop flag. Set once from a signal handler or another thread, polled
/// by the publish loop once per tick.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Keeps a loop running at a fixed rate.
///
/// Each `wait` blocks until one period after the previous deadline, so time
/// spent in the loop body is absorbed. A loop that falls more than two periods
/// behind restarts its schedule from now rather than firing a burst of ticks.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(rate_hz: f64) -> Result<Self, Error> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "rate must be a positive number, got {}",
                rate_hz
            )));
        }
        Ok(Self::with_period(Duration::from_nanos(
            (1e9 / rate_hz).round() as u64,
        )))
    }

    pub fn with_period(period: Duration) -> Self {
        Ticker {
            period,
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next deadline, zero if it already passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.last + self.period).saturating_duration_since(now)
    }

    /// Block until the next tick.
    pub fn wait(&mut self) {
        let now = Instant::now();
        thread::sleep(self.remaining(now));
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        self.last += self.period;
        if now.saturating_duration_since(self.last) > self.period * 2 {
            self.last = now;
        }
    }
}
