//! Early-boot identity and DRAM init sequence
//!
//! Runs once, single-threaded, before the OS exists. The sequence is:
//! read and validate the identity record, count the boot, print the
//! identity, resolve the variant and hand the DRAM configuration to the
//! memory-controller init. Every failure along the way degrades to
//! defaults with a warning; nothing here can halt boot.

use sm2s_boardinfo::{or_not_available, BoardIdentity, BoardInfo};
use sm2s_hal::eeprom::Eeprom;

use crate::board::BoardProfile;
use crate::dram::DramTimingInfo;

/// Resolved DRAM configuration for the memory-controller init
#[derive(Debug, Clone, Copy)]
pub struct DramConfig {
    /// Fitted DRAM size in bytes
    pub size: u64,
    /// Timing set for the fitted part
    pub timing: &'static DramTimingInfo,
}

/// Read and validate the identity record, counting this boot
///
/// On success the boot counter is incremented and the record written
/// back; a failed write-back is reported and ignored, the incremented
/// value stays in effect for this session. An unreadable or invalid
/// record yields the absent identity.
pub fn identity_init<E: Eeprom>(eeprom: &mut E) -> BoardIdentity {
    let mut record = match BoardInfo::load(eeprom) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("failed to initialize boardinfo: {}", err);
            return BoardIdentity::absent();
        }
    };

    record.increment_boot_count();
    if let Err(err) = record.persist(eeprom) {
        log::warn!("boot counter write-back failed: {}", err);
    }

    BoardIdentity::from_record(record)
}

/// Resolve the DRAM configuration for this board and identity
///
/// Total: an absent or unrecognized identity resolves to the board's
/// default variant.
pub fn dram_init(board: &BoardProfile, id: &BoardIdentity) -> DramConfig {
    debug_assert!(
        board.variants.check_unique().is_ok(),
        "duplicate (feature, revision) pair in variant table"
    );

    let variant = board.variants.resolve(
        or_not_available(id.feature()),
        or_not_available(id.revision()),
    );

    log::info!(
        "DRAM: {} MiB, timing {}",
        variant.dram_size >> 20,
        variant.dram_timing.name
    );

    DramConfig {
        size: variant.dram_size,
        timing: variant.dram_timing,
    }
}

/// Log the decoded identity, one field per line
pub fn print_identity(id: &BoardIdentity) {
    log::info!("------------------------------");
    log::info!("feature .......... {}", or_not_available(id.feature()));
    log::info!("serial ........... {}", or_not_available(id.serial()));
    log::info!("revision (MES) ... {}", or_not_available(id.revision()));
    log::info!("ram size.......... {}", or_not_available(id.ram_size()));
    log::info!("eMMC size......... {}", or_not_available(id.emmc_size()));
    if let Some(count) = id.boot_count() {
        log::info!("boot count........ {}", count);
    }
    log::info!("------------------------------");
}
