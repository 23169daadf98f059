//! Hardware abstraction layer for SM2S module bring-up
//!
//! This crate provides the small set of trait-based hardware abstractions
//! the board identity subsystem needs during early boot: an I2C master
//! interface, a byte-addressed EEPROM interface, and a blocking delay
//! source for EEPROM write cycles.
//!
//! The traits are synchronous and blocking. At the boot stage where they
//! are used there is no scheduler, no interrupts and no concurrency; a
//! bus transaction either completes or fails as a whole.
//!
//! # Traits
//!
//! - [`i2c::I2c`] - I2C master interface
//! - [`eeprom::Eeprom`] - byte-addressed persistent storage
//! - [`time::Delay`] - blocking delay source

#![no_std]

pub mod eeprom;
pub mod error;
pub mod i2c;
pub mod prelude;
pub mod time;

pub use error::{Error, Result};
