//! Time types for HAL

/// Duration type for timing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Duration {
    /// Duration in nanoseconds
    nanos: u64,
}

impl Duration {
    /// Zero duration
    pub const ZERO: Duration = Duration { nanos: 0 };

    /// Create from nanoseconds
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Create from microseconds
    pub const fn from_micros(micros: u64) -> Self {
        Self {
            nanos: micros * 1_000,
        }
    }

    /// Create from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    /// Get as nanoseconds
    pub const fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Get as microseconds
    pub const fn as_micros(&self) -> u64 {
        self.nanos / 1_000
    }

    /// Get as milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Check if duration is zero
    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}

/// Blocking delay source
///
/// EEPROM write cycles need a fixed settle delay between page writes; the
/// boot environment supplies an implementation backed by whatever timer is
/// already running.
pub trait Delay {
    /// Delay for the specified duration
    fn delay(&mut self, duration: Duration);

    /// Delay for microseconds
    fn delay_us(&mut self, us: u32) {
        self.delay(Duration::from_micros(us as u64));
    }

    /// Delay for milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay(Duration::from_millis(ms as u64));
    }
}
