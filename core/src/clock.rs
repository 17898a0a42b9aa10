//! Seed clock: the only source of non-determinism in the crate.
//!
//! RULE: Nothing reads the wall clock directly.
//! Negative seeds are resolved through a SeedClock so tests can pin the time.

/// Supplies the current time for "seed from clock" requests.
pub trait SeedClock {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> i64;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SeedClock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl SeedClock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.0
    }
}
