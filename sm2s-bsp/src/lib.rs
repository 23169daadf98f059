//! Board support for MSC SM2S i.MX8M system-on-modules
//!
//! Ties the board identity record to the hardware decisions it drives.
//! The early boot stage reads the identity EEPROM, counts the boot,
//! resolves the module variant and hands the matching DRAM size and
//! timing set to the memory-controller init; later stages get the decoded
//! identity exported as environment settings.
//!
//! - [`dram`] - DRAM timing descriptors for the fitted LPDDR4 parts
//! - [`variant`] - (feature, revision) to DRAM configuration resolver
//! - [`board`] - per-board profiles (SM2S-IMX8MINI, SM2S-IMX8PLUS)
//! - [`env`] - environment key-value export for later boot stages
//! - [`stage`] - the early-boot identity and DRAM init sequence
//!
//! Identity handling never halts boot: an unreadable, garbled or unknown
//! record degrades to the board's default variant with a warning.

#![no_std]

extern crate alloc;

pub mod board;
pub mod dram;
pub mod env;
pub mod stage;
pub mod variant;

#[cfg(test)]
pub(crate) mod testutil;

pub use board::BoardProfile;
pub use dram::{DramTimingInfo, SZ_1G, SZ_2G, SZ_4G, SZ_8G};
pub use stage::{dram_init, identity_init, print_identity, DramConfig};
pub use variant::{VariantRecord, VariantTable};
