//! # Time Source
//!
//! Stamping a record is the only place luxqr reads the wall clock. The read
//! goes through [`Clock`] so tests and reproducible builds can pin it.

use crate::temporal::Timestamp;

/// A source of "now".
pub trait Clock {
    /// The current instant, truncated to seconds.
    fn now(&self) -> Timestamp;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
