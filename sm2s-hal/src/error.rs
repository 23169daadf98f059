//! Error types for HAL operations

use core::fmt;

/// HAL result type
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// HAL error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral not available
    NotAvailable,
    /// Invalid configuration
    InvalidConfig,
    /// Invalid parameter
    InvalidParameter,
    /// Resource busy
    Busy,
    /// Operation timeout
    Timeout,
    /// Access beyond the end of the device
    OutOfRange,
    /// No acknowledge received (I2C)
    NoAcknowledge,
    /// Arbitration lost (I2C)
    ArbitrationLost,
    /// Bus error
    BusError,
    /// Device is write protected
    WriteProtected,
    /// Not initialized
    NotInitialized,
    /// Hardware failure
    HardwareFailure,
    /// Other error
    Other,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotAvailable => write!(f, "Peripheral not available"),
            Error::InvalidConfig => write!(f, "Invalid configuration"),
            Error::InvalidParameter => write!(f, "Invalid parameter"),
            Error::Busy => write!(f, "Resource busy"),
            Error::Timeout => write!(f, "Operation timeout"),
            Error::OutOfRange => write!(f, "Access beyond the end of the device"),
            Error::NoAcknowledge => write!(f, "No acknowledge received"),
            Error::ArbitrationLost => write!(f, "Arbitration lost"),
            Error::BusError => write!(f, "Bus error"),
            Error::WriteProtected => write!(f, "Device is write protected"),
            Error::NotInitialized => write!(f, "Not initialized"),
            Error::HardwareFailure => write!(f, "Hardware failure"),
            Error::Other => write!(f, "Other error"),
        }
    }
}
