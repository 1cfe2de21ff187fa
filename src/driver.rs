//! Periodic tick driver
//!
//! Stands in for a host timer: the lifecycle controller arms it when a run
//! starts and disarms it on game over. Each arming hands out a
//! [`DriverToken`]; a tick carrying a token from an earlier arming is stale
//! and must not run.
//!
//! Time is fed in through [`TickDriver::pump`], which converts wall-clock
//! time into whole fixed-length ticks. Physics never sees the elapsed time.

use std::time::Duration;

/// Shortest period the driver accepts
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Capability for one arming of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverToken {
    generation: u64,
}

impl DriverToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Fixed-rate tick source with cancellation
#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
    max_substeps: u32,
    generation: u64,
    active: Option<DriverToken>,
    accumulator: Duration,
}

impl TickDriver {
    /// Disarmed driver ticking every `interval`, at most `max_substeps` per pump.
    ///
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it.
    pub fn new(interval: Duration, max_substeps: u32) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            max_substeps: max_substeps.max(1),
            generation: 0,
            active: None,
            accumulator: Duration::ZERO,
        }
    }

    /// Arm the driver, invalidating any token from a previous arming
    pub fn start(&mut self) -> DriverToken {
        self.generation += 1;
        let token = DriverToken {
            generation: self.generation,
        };
        self.active = Some(token);
        self.accumulator = Duration::ZERO;
        token
    }

    /// Disarm the driver. Outstanding tokens become stale immediately.
    pub fn stop(&mut self) {
        self.active = None;
        self.accumulator = Duration::ZERO;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The token of the current arming, if armed
    #[inline]
    pub fn token(&self) -> Option<DriverToken> {
        self.active
    }

    /// Check a token at tick entry
    #[inline]
    pub fn is_current(&self, token: DriverToken) -> bool {
        self.active == Some(token)
    }

    /// Feed elapsed wall-clock time and return the number of ticks now due.
    ///
    /// Never returns more than `max_substeps`; backlog past that is dropped.
    /// A disarmed driver accumulates nothing.
    pub fn pump(&mut self, elapsed: Duration) -> u32 {
        if self.active.is_none() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_substeps {
            self.accumulator -= self.interval;
            due += 1;
        }

        if self.accumulator >= self.interval {
            let dropped = self.accumulator.as_nanos() / self.interval.as_nanos();
            log::warn!("Tick driver fell behind, dropping {} ticks", dropped);
            self.accumulator = Duration::from_nanos(
                (self.accumulator.as_nanos() % self.interval.as_nanos()) as u64,
            );
        }

        due
    }
}
