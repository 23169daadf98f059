//! Presence-bit-gated field accessors
//!
//! [`BoardIdentity`] is what the rest of boot consumes: it wraps either a
//! validated record or nothing at all, and every accessor answers for
//! both cases. A field is only ever decoded when its presence bit is set;
//! when the record is absent or the bit is clear the accessor returns
//! `None` without touching the field bytes.
//!
//! The accessors are written against the body prefix both supported
//! versions share, so the same code serves v1.0 and v1.1 records.

use crate::capacity;
use crate::record::{BoardInfo, BodyCommon, Presence};

/// Display sentinel for fields that were never programmed
pub const NOT_AVAILABLE: &str = "N/a";

/// Map an optional field to its display form
pub fn or_not_available(field: Option<&str>) -> &str {
    field.unwrap_or(NOT_AVAILABLE)
}

/// Decoded board identity, possibly absent
///
/// Owned by the boot stage that read it and threaded explicitly to the
/// stages that need it; there is no global instance.
#[derive(Debug, Clone)]
pub struct BoardIdentity {
    record: Option<BoardInfo>,
}

impl BoardIdentity {
    /// Identity of a board whose record is missing or invalid
    pub const fn absent() -> Self {
        Self { record: None }
    }

    /// Identity backed by a validated record
    pub fn from_record(record: BoardInfo) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// Whether a validated record backs this identity
    pub fn is_present(&self) -> bool {
        self.record.is_some()
    }

    /// The underlying record, if any
    pub fn record(&self) -> Option<&BoardInfo> {
        self.record.as_ref()
    }

    /// Mutable access to the underlying record, if any
    pub fn record_mut(&mut self) -> Option<&mut BoardInfo> {
        self.record.as_mut()
    }

    fn text_field(&self, bit: Presence, field: fn(&BodyCommon) -> &[u8]) -> Option<&str> {
        let common = self.record.as_ref()?.body().common();
        if !common.presence.contains(bit) {
            return None;
        }
        decode_text(field(common))
    }

    /// Manufacturer identifier
    pub fn company(&self) -> Option<&str> {
        self.text_field(Presence::COMPANY, |c| &c.company)
    }

    /// Feature code (product SKU)
    pub fn feature(&self) -> Option<&str> {
        self.text_field(Presence::FEATURE, |c| &c.feature)
    }

    /// Serial number
    pub fn serial(&self) -> Option<&str> {
        self.text_field(Presence::SERIAL, |c| &c.serial)
    }

    /// Hardware revision (MES letter+digit pair)
    pub fn revision(&self) -> Option<&str> {
        self.text_field(Presence::REVISION, |c| &c.revision)
    }

    /// BSP-defined byte (v1.1 records only)
    pub fn bsp_specific(&self) -> Option<u8> {
        self.record.as_ref()?.body().bsp_specific()
    }

    /// Boot counter value
    pub fn boot_count(&self) -> Option<u32> {
        self.record.as_ref().map(|r| r.boot_count())
    }

    /// RAM capacity derived from the feature code
    ///
    /// An unrecognized feature code is reported as-is.
    pub fn ram_size(&self) -> Option<&str> {
        self.feature().map(capacity::ram_size)
    }

    /// eMMC capacity derived from the feature code
    pub fn emmc_size(&self) -> Option<&str> {
        self.feature().map(capacity::emmc_size)
    }
}

/// Decode a fixed-width NUL-terminated field
///
/// Bytes past the first NUL are padding. Non-UTF-8 content is treated the
/// same as an unprogrammed field.
fn decode_text(field: &[u8]) -> Option<&str> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    core::str::from_utf8(&field[..end]).ok()
}
