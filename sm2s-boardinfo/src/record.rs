//! Identity record layout, parsing and validation
//!
//! The persisted record is a fixed 62-byte structure at offset 0 of the
//! identity EEPROM: a 20-byte header, a 38-byte version-tagged body and a
//! 4-byte boot counter. All multi-byte fields are little-endian.
//!
//! Two body layouts exist in the field, v1.0 and v1.1; they share a common
//! prefix (presence mask and the four text fields) and differ only in the
//! reserved tail, which v1.1 partly repurposes for one BSP-defined byte.
//! The overall record size is identical for both.
//!
//! A record is well-formed only if the magic matches, the version pair is
//! supported and the additive checksum over the body bytes matches the
//! stored value. Anything else is rejected as a whole; callers treat a
//! rejected record as absent.

use core::fmt;

use bitflags::bitflags;
use sm2s_hal::eeprom::Eeprom;

/// Record signature, first 4 bytes of the EEPROM
pub const MAGIC: [u8; 4] = *b"MSCB";

/// Header size in bytes
pub const HEADER_LEN: usize = 20;
/// Body size in bytes, identical for all supported versions
pub const BODY_LEN: usize = 38;
/// Total persisted record size: header + body + boot counter
pub const RECORD_LEN: usize = HEADER_LEN + BODY_LEN + 4;

/// Company field width (excluding the NUL terminator)
pub const COMPANY_LEN: usize = 3;
/// Feature code field width
pub const FEATURE_LEN: usize = 8;
/// Serial number field width
pub const SERIAL_LEN: usize = 11;
/// Revision field width
pub const REVISION_LEN: usize = 2;

/// Supported (major, minor) record versions
pub const SUPPORTED_VERSIONS: [(u8, u8); 2] = [(1, 0), (1, 1)];

bitflags! {
    /// Feature-presence mask: which optional fields were programmed at
    /// manufacturing time. Bytes of a field whose bit is clear are
    /// undefined and must never be read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Presence: u32 {
        const COMPANY = 1 << 0;
        const FEATURE = 1 << 1;
        const SERIAL = 1 << 2;
        const REVISION = 1 << 3;
        const BSP_SPECIFIC = 1 << 4;
    }
}

/// Validated record header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Record version as (major, minor)
    pub version: (u8, u8),
    /// Byte extent of the versioned body
    pub body_len: u16,
    /// Byte offset of the body from record start
    pub body_off: u16,
    /// Stored additive checksum over the body bytes
    pub body_checksum: u16,
}

/// Fields shared by all supported body versions
///
/// Text fields keep their on-wire fixed-width form including the NUL
/// terminator; decoding to `&str` happens in the accessor layer, gated on
/// the presence mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyCommon {
    pub presence: Presence,
    pub company: [u8; COMPANY_LEN + 1],
    pub feature: [u8; FEATURE_LEN + 1],
    pub serial: [u8; SERIAL_LEN + 1],
    pub revision: [u8; REVISION_LEN + 1],
}

/// Version-tagged record body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    V1_0 {
        common: BodyCommon,
    },
    V1_1 {
        common: BodyCommon,
        /// Content is up to the BSP; only meaningful with the
        /// BSP_SPECIFIC presence bit set
        bsp_specific: u8,
    },
}

impl Body {
    /// Fields shared by all versions
    pub fn common(&self) -> &BodyCommon {
        match self {
            Body::V1_0 { common } => common,
            Body::V1_1 { common, .. } => common,
        }
    }

    /// The v1.1 BSP-defined byte, if present and programmed
    pub fn bsp_specific(&self) -> Option<u8> {
        match self {
            Body::V1_0 { .. } => None,
            Body::V1_1 {
                common,
                bsp_specific,
            } => common
                .presence
                .contains(Presence::BSP_SPECIFIC)
                .then_some(*bsp_specific),
        }
    }
}

/// Why a raw buffer was rejected as an identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Buffer is not exactly one record long
    Truncated { expected: usize, got: usize },
    /// First 4 bytes do not match the record signature
    BadMagic,
    /// Version pair outside the supported range
    UnsupportedVersion { major: u8, minor: u8 },
    /// Declared body extent does not fit inside the record
    BadBodyExtent { offset: u16, len: u16 },
    /// Recomputed body checksum does not match the stored one
    Checksum { stored: u16, computed: u16 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Truncated { expected, got } => {
                write!(f, "record truncated: expected {} bytes, got {}", expected, got)
            }
            ParseError::BadMagic => write!(f, "bad magic signature"),
            ParseError::UnsupportedVersion { major, minor } => {
                write!(f, "unsupported record version {}.{}", major, minor)
            }
            ParseError::BadBodyExtent { offset, len } => {
                write!(f, "body extent out of bounds: offset {}, length {}", offset, len)
            }
            ParseError::Checksum { stored, computed } => {
                write!(
                    f,
                    "body checksum mismatch: stored {:#06x}, computed {:#06x}",
                    stored, computed
                )
            }
        }
    }
}

/// Why a record could not be obtained from storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The storage read itself failed
    Transport(sm2s_hal::Error),
    /// The bytes read do not form a valid record
    Format(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(err) => write!(f, "identity EEPROM read failed: {}", err),
            LoadError::Format(err) => write!(f, "invalid identity record: {}", err),
        }
    }
}

/// Additive checksum over the body bytes
///
/// Detects corruption, not tampering: any single-byte change alters the
/// wrapping sum.
pub fn body_checksum(body: &[u8]) -> u16 {
    body.iter().fold(0u16, |sum, &b| sum.wrapping_add(b as u16))
}

fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn read_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

/// A validated board identity record
///
/// Keeps the raw bytes it was parsed from so the record can be persisted
/// back byte-identically (reserved and undefined regions included), with
/// only the boot counter trailer rewritten.
#[derive(Debug, Clone)]
pub struct BoardInfo {
    raw: [u8; RECORD_LEN],
    header: Header,
    body: Body,
    boot_count: u32,
}

impl BoardInfo {
    /// Parse and validate a raw record buffer
    ///
    /// Pure; checks run in order: size, magic, version, body extent,
    /// checksum. On any failure no part of the buffer is trusted.
    pub fn parse(buf: &[u8]) -> Result<Self, ParseError> {
        if buf.len() != RECORD_LEN {
            return Err(ParseError::Truncated {
                expected: RECORD_LEN,
                got: buf.len(),
            });
        }
        if buf[0..4] != MAGIC {
            return Err(ParseError::BadMagic);
        }

        let version = (buf[4], buf[5]);
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ParseError::UnsupportedVersion {
                major: version.0,
                minor: version.1,
            });
        }

        let body_len = read_u16(buf, 6);
        let body_off = read_u16(buf, 8);
        let stored_checksum = read_u16(buf, 10);

        // The checksum extent follows the header, the fixed field layout
        // must fit inside it, and neither may reach into the counter.
        let start = body_off as usize;
        let end = start + body_len as usize;
        if start < HEADER_LEN || end > RECORD_LEN - 4 || (body_len as usize) < BODY_LEN {
            return Err(ParseError::BadBodyExtent {
                offset: body_off,
                len: body_len,
            });
        }

        let computed = body_checksum(&buf[start..end]);
        if computed != stored_checksum {
            return Err(ParseError::Checksum {
                stored: stored_checksum,
                computed,
            });
        }

        let body = decode_body(&buf[start..end], version);
        let boot_count = read_u32(buf, RECORD_LEN - 4);

        let mut raw = [0u8; RECORD_LEN];
        raw.copy_from_slice(buf);

        Ok(Self {
            raw,
            header: Header {
                version,
                body_len,
                body_off,
                body_checksum: stored_checksum,
            },
            body,
            boot_count,
        })
    }

    /// Read one record from offset 0 of the identity EEPROM
    pub fn load<E: Eeprom>(eeprom: &mut E) -> Result<Self, LoadError> {
        let mut buf = [0u8; RECORD_LEN];
        eeprom.read(0, &mut buf).map_err(LoadError::Transport)?;
        let info = Self::parse(&buf).map_err(LoadError::Format)?;
        log::debug!(
            "identity record v{}.{}, boot count {}",
            info.header.version.0,
            info.header.version.1,
            info.boot_count
        );
        Ok(info)
    }

    /// Write the full record back to offset 0
    ///
    /// Failure is non-fatal to the caller: the in-memory record keeps its
    /// state, only the next boot sees stale storage.
    pub fn persist<E: Eeprom>(&self, eeprom: &mut E) -> sm2s_hal::Result<()> {
        eeprom.write(0, &self.raw)
    }

    /// Validated header fields
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Version-tagged body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Boot counter value
    pub fn boot_count(&self) -> u32 {
        self.boot_count
    }

    /// Raw persisted form of the record
    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.raw
    }

    /// Count this boot: increment the embedded counter by one
    ///
    /// Wraps silently on overflow. The counter sits outside the
    /// checksummed body, so no checksum update is needed.
    pub fn increment_boot_count(&mut self) {
        self.boot_count = self.boot_count.wrapping_add(1);
        self.raw[RECORD_LEN - 4..].copy_from_slice(&self.boot_count.to_le_bytes());
    }
}

fn decode_body(body: &[u8], version: (u8, u8)) -> Body {
    let mut common = BodyCommon {
        presence: Presence::from_bits_retain(read_u32(body, 0)),
        company: [0; COMPANY_LEN + 1],
        feature: [0; FEATURE_LEN + 1],
        serial: [0; SERIAL_LEN + 1],
        revision: [0; REVISION_LEN + 1],
    };
    common.company.copy_from_slice(&body[4..8]);
    common.feature.copy_from_slice(&body[8..17]);
    common.serial.copy_from_slice(&body[17..29]);
    common.revision.copy_from_slice(&body[29..32]);

    match version {
        (1, 1) => Body::V1_1 {
            common,
            bsp_specific: body[32],
        },
        // Only supported versions reach here; everything else is v1.0.
        _ => Body::V1_0 { common },
    }
}
