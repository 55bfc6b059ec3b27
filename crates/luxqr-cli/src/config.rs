//! CLI configuration.
//!
//! Read from environment variables, then overridden by global flags in
//! `main`. Only two knobs exist: the payload size warning threshold and an
//! optional fixed stamping time for reproducible payloads.

use luxqr_codec::RECOMMENDED_MAX_PAYLOAD_BYTES;
use luxqr_core::{Clock, FixedClock, SystemClock, Timestamp};

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Payload byte size above which `encode` prints a scan warning.
    pub payload_warn_bytes: usize,
    /// When set, every stamp uses this instant instead of the system clock.
    pub fixed_time: Option<Timestamp>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            payload_warn_bytes: RECOMMENDED_MAX_PAYLOAD_BYTES,
            fixed_time: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LUXQR_PAYLOAD_WARN_BYTES` (default: 2000)
    /// - `SOURCE_DATE_EPOCH` (optional, Unix seconds)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let payload_warn_bytes = match lookup("LUXQR_PAYLOAD_WARN_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("LUXQR_PAYLOAD_WARN_BYTES", raw))?,
            None => RECOMMENDED_MAX_PAYLOAD_BYTES,
        };

        let fixed_time = match lookup("SOURCE_DATE_EPOCH") {
            Some(raw) => {
                let secs: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber("SOURCE_DATE_EPOCH", raw.clone()))?;
                let ts = Timestamp::from_epoch_secs(secs)
                    .map_err(|e| ConfigError::InvalidTime(e.to_string()))?;
                Some(ts)
            }
            None => None,
        };

        Ok(Self {
            payload_warn_bytes,
            fixed_time,
        })
    }

    /// The time source `encode` and `sample --payload` stamp with.
    pub fn clock(&self) -> StampClock {
        match self.fixed_time {
            Some(ts) => StampClock::Fixed(FixedClock(ts)),
            None => StampClock::System(SystemClock),
        }
    }
}

/// Either the system clock or a pinned instant.
#[derive(Debug, Clone, Copy)]
pub enum StampClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for StampClock {
    fn now(&self) -> Timestamp {
        match self {
            Self::System(c) => c.now(),
            Self::Fixed(c) => c.now(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be a non-negative integer, got {1:?}")]
    InvalidNumber(&'static str, String),
    #[error("invalid fixed stamping time: {0}")]
    InvalidTime(String),
}
