//! Board identity record decoding for MSC SM2S modules
//!
//! Every SM2S module carries a small identity EEPROM programmed at
//! manufacturing time with a versioned, checksummed binary record: the
//! manufacturer, the feature code (the SKU encoding RAM and eMMC
//! capacity), the serial number and the hardware revision, plus a boot
//! counter maintained by the bootloader.
//!
//! This crate owns the on-wire format and everything derived from it:
//!
//! - [`record`] - record layout, parsing and validation, boot counter
//! - [`identity`] - presence-bit-gated field accessors
//! - [`capacity`] - feature code to RAM/eMMC capacity tables
//!
//! A record that fails validation is never partially trusted: the decoded
//! identity reports every field as unavailable and the caller falls back
//! to default variant settings. Nothing here can halt boot.

#![no_std]

pub mod capacity;
pub mod identity;
pub mod record;

#[cfg(test)]
pub(crate) mod testutil;

pub use identity::{or_not_available, BoardIdentity, NOT_AVAILABLE};
pub use record::{Body, BoardInfo, Header, LoadError, ParseError, Presence};
