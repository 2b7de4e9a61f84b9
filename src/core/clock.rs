use chrono::{DateTime, Utc};

/// Source of "now" for trading-calendar decisions.
///
/// Every wall-clock read in the crate goes through this trait, so tests can
/// pin the instant to anything they like, including DST boundaries and
/// weekend edges.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The default clock, backed by system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
