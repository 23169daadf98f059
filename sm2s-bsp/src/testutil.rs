//! Test fixtures: record construction and an in-memory EEPROM stub.

use sm2s_boardinfo::record::{body_checksum, BODY_LEN, HEADER_LEN, MAGIC, RECORD_LEN};
use sm2s_boardinfo::{BoardIdentity, BoardInfo, Presence};

use sm2s_hal::eeprom::Eeprom;
use sm2s_hal::{Error, Result};

/// Field values for a v1.0 test record
pub(crate) struct RecordSpec {
    pub company: &'static str,
    pub feature: &'static str,
    pub serial: &'static str,
    pub revision: &'static str,
    pub boot_count: u32,
}

impl Default for RecordSpec {
    fn default() -> Self {
        Self {
            company: "MSC",
            feature: "00N0000I",
            serial: "SN000000000",
            revision: "A0",
            boot_count: 0,
        }
    }
}

fn put_text(body: &mut [u8], at: usize, width: usize, s: &str) {
    assert!(s.len() <= width, "field text too long for fixture");
    body[at..at + s.len()].copy_from_slice(s.as_bytes());
}

/// Raw persisted form of a valid v1.0 record
pub(crate) fn record_bytes(spec: &RecordSpec) -> [u8; RECORD_LEN] {
    let presence =
        Presence::COMPANY | Presence::FEATURE | Presence::SERIAL | Presence::REVISION;

    let mut body = [0u8; BODY_LEN];
    body[0..4].copy_from_slice(&presence.bits().to_le_bytes());
    put_text(&mut body, 4, 3, spec.company);
    put_text(&mut body, 8, 8, spec.feature);
    put_text(&mut body, 17, 11, spec.serial);
    put_text(&mut body, 29, 2, spec.revision);

    let mut buf = [0u8; RECORD_LEN];
    buf[0..4].copy_from_slice(&MAGIC);
    buf[4] = 1;
    buf[5] = 0;
    buf[6..8].copy_from_slice(&(BODY_LEN as u16).to_le_bytes());
    buf[8..10].copy_from_slice(&(HEADER_LEN as u16).to_le_bytes());
    buf[10..12].copy_from_slice(&body_checksum(&body).to_le_bytes());
    buf[HEADER_LEN..HEADER_LEN + BODY_LEN].copy_from_slice(&body);
    buf[RECORD_LEN - 4..].copy_from_slice(&spec.boot_count.to_le_bytes());
    buf
}

/// Decoded identity for a valid v1.0 record
pub(crate) fn record_identity(spec: RecordSpec) -> BoardIdentity {
    BoardIdentity::from_record(BoardInfo::parse(&record_bytes(&spec)).unwrap())
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

    pub fn blank() -> Self {
        Self {
            mem: [0xffu8; 128],
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
