//! Environment export for later boot stages
//!
//! Later boot stages consume the decoded identity as named key-value
//! settings: the `msc_*` keys plus the device tree filename matching the
//! module variant. The environment store itself lives outside this crate;
//! callers hand in anything implementing [`Environment`].

use alloc::format;
use alloc::string::String;

use sm2s_boardinfo::{or_not_available, BoardIdentity};

use crate::board::BoardProfile;

/// Named key-value settings store
pub trait Environment {
    /// Set `key` to `value`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}

/// Export the decoded identity as environment settings
pub fn export_identity<E: Environment>(env: &mut E, board: &BoardProfile, id: &BoardIdentity) {
    env.set("msc_reference", or_not_available(id.feature()));
    env.set("msc_serial", or_not_available(id.serial()));
    env.set("msc_revision", or_not_available(id.revision()));
    env.set("msc_ram_size", or_not_available(id.ram_size()));
    env.set("msc_emmc_size", or_not_available(id.emmc_size()));
    env.set("fdtfile", &dtb_filename(board, id));
}

/// Device tree filename for this board and identity
///
/// `{company}-{form factor}-{platform}-{processor}-{feature}.dtb`, with
/// the company lowercased. Without a programmed feature code there is no
/// variant-specific tree to name, so the feature segment is dropped.
pub fn dtb_filename(board: &BoardProfile, id: &BoardIdentity) -> String {
    let company = id
        .company()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or_else(|| String::from(board.company));

    match id.feature() {
        Some(feature) => format!(
            "{}-{}-{}-{}-{}.dtb",
            company, board.form_factor, board.platform, board.processor, feature
        ),
        None => format!(
            "{}-{}-{}-{}.dtb",
            company, board.form_factor, board.platform, board.processor
        ),
    }
}
