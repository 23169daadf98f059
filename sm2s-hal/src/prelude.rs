//! Prelude module for convenient imports

pub use crate::eeprom::{AddressWidth, Eeprom, I2cEeprom};
pub use crate::error::{Error, Result};
pub use crate::i2c::{I2c, I2cAddress, I2cConfig, I2cSpeed};
pub use crate::time::{Delay, Duration};
