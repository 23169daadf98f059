//! Shared fixtures for unit tests: an identity record builder and an
//! in-memory EEPROM stub.

use sm2s_hal::eeprom::Eeprom;
use sm2s_hal::{Error, Result};

use crate::record::{
    body_checksum, Presence, BODY_LEN, COMPANY_LEN, FEATURE_LEN, HEADER_LEN, MAGIC, RECORD_LEN,
    REVISION_LEN, SERIAL_LEN,
};

/// Builds syntactically valid record buffers for tests
pub(crate) struct RecordBuilder {
    version: (u8, u8),
    presence: Presence,
    company: [u8; COMPANY_LEN + 1],
    feature: [u8; FEATURE_LEN + 1],
    serial: [u8; SERIAL_LEN + 1],
    revision: [u8; REVISION_LEN + 1],
    bsp_specific: u8,
    boot_count: u32,
}

fn text_field<const N: usize>(s: &str) -> [u8; N] {
    assert!(s.len() < N, "field text too long for fixture");
    let mut out = [0u8; N];
    out[..s.len()].copy_from_slice(s.as_bytes());
    out
}

impl RecordBuilder {
    fn with_version(version: (u8, u8)) -> Self {
        Self {
            version,
            presence: Presence::COMPANY | Presence::FEATURE | Presence::SERIAL | Presence::REVISION,
            company: text_field("MSC"),
            feature: text_field("00N0000I"),
            serial: text_field("SN000000000"),
            revision: text_field("A0"),
            bsp_specific: 0,
            boot_count: 0,
        }
    }

    pub fn v1_0() -> Self {
        Self::with_version((1, 0))
    }

    pub fn v1_1() -> Self {
        Self::with_version((1, 1))
    }

    pub fn version(mut self, major: u8, minor: u8) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn company(mut self, s: &str) -> Self {
        self.company = text_field(s);
        self
    }

    pub fn feature(mut self, s: &str) -> Self {
        self.feature = text_field(s);
        self
    }

    pub fn serial(mut self, s: &str) -> Self {
        self.serial = text_field(s);
        self
    }

    pub fn revision(mut self, s: &str) -> Self {
        self.revision = text_field(s);
        self
    }

    /// Set the v1.1 BSP byte and mark it present
    pub fn bsp_specific(mut self, value: u8) -> Self {
        self.bsp_specific = value;
        self.presence |= Presence::BSP_SPECIFIC;
        self
    }

    pub fn without_bsp_specific_bit(mut self) -> Self {
        self.presence -= Presence::BSP_SPECIFIC;
        self
    }

    /// Clear the revision presence bit and scribble over the field, so
    /// reading it anyway would be visible in tests
    pub fn without_revision_bit(mut self) -> Self {
        self.presence -= Presence::REVISION;
        self.revision = [0xff; REVISION_LEN + 1];
        self
    }

    pub fn without_feature_bit(mut self) -> Self {
        self.presence -= Presence::FEATURE;
        self.feature = [0xff; FEATURE_LEN + 1];
        self
    }

    pub fn boot_count(mut self, count: u32) -> Self {
        self.boot_count = count;
        self
    }

    pub fn build(self) -> [u8; RECORD_LEN] {
        let mut body = [0u8; BODY_LEN];
        body[0..4].copy_from_slice(&self.presence.bits().to_le_bytes());
        body[4..8].copy_from_slice(&self.company);
        body[8..17].copy_from_slice(&self.feature);
        body[17..29].copy_from_slice(&self.serial);
        body[29..32].copy_from_slice(&self.revision);
        if self.version == (1, 1) {
            body[32] = self.bsp_specific;
        }

        let mut buf = [0u8; RECORD_LEN];
        buf[0..4].copy_from_slice(&MAGIC);
        buf[4] = self.version.0;
        buf[5] = self.version.1;
        buf[6..8].copy_from_slice(&(BODY_LEN as u16).to_le_bytes());
        buf[8..10].copy_from_slice(&(HEADER_LEN as u16).to_le_bytes());
        buf[10..12].copy_from_slice(&body_checksum(&body).to_le_bytes());
        buf[HEADER_LEN..HEADER_LEN + BODY_LEN].copy_from_slice(&body);
        buf[RECORD_LEN - 4..].copy_from_slice(&self.boot_count.to_le_bytes());
        buf
    }
}

/// In-memory EEPROM stub with switchable failure modes
pub(crate) struct MockEeprom {
    pub mem: [u8; 128],
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockEeprom {
    pub fn with_record(record: &[u8; RECORD_LEN]) -> Self {
        let mut mem = [0xffu8; 128];
        mem[..RECORD_LEN].copy_from_slice(record);
        Self {
            mem,
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl Eeprom for MockEeprom {
    fn capacity(&self) -> usize {
        self.mem.len()
    }

    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<()> {
        if self.fail_reads {
            return Err(Error::BusError);
        }
        buf.copy_from_slice(&self.mem[offset..offset + buf.len()]);
        Ok(())
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::NoAcknowledge);
        }
        self.mem[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }
}
