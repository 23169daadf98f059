//! Feature code to capacity mapping
//!
//! The feature code is the manufacturing SKU; RAM and eMMC sizes are not
//! stored in the record, they are derived from the code through these
//! tables. Matching is exact, case-sensitive, full-string equality,
//! first listed wins. An unknown code is returned unchanged so callers
//! can still display it: unrecognized is distinct from absent.
//!
//! These tables grow as new module variants are released.

/// Feature code to RAM size
pub static RAM_SIZES: &[(&str, &str)] = &[
    ("03N0700I", "8GB"),
    ("24N0600I", "4GB"),
    ("14N0700I", "2GB"),
    ("14N0740I", "2GB"),
    ("03N0E10I", "1GB"),
    ("14N0600E", "2GB"),
    ("14N0E00I", "2GB"),
    ("15N0700E", "2GB"),
    ("24N0E10I", "4GB"),
    ("14N0741I", "2GB"),
    ("25N0600I", "4GB"),
    ("28N0700I", "4GB"),
    ("26N2700I", "4GB"),
];

/// Feature code to eMMC size
pub static EMMC_SIZES: &[(&str, &str)] = &[
    ("03N0700I", "8GB"),
    ("24N0600I", "16GB"),
    ("14N0700I", "16GB"),
    ("14N0740I", "16GB"),
    ("03N0E10I", "8GB"),
    ("14N0600E", "16GB"),
    ("14N0E00I", "16GB"),
    ("15N0700E", "32GB"),
    ("24N0E10I", "16GB"),
    ("14N0741I", "16GB"),
    ("25N0600I", "32GB"),
    ("28N0700I", "256GB"),
    ("26N2700I", "64GB"),
];

/// Look `code` up in an ordered table; unknown codes pass through
pub fn lookup<'a>(table: &[(&'static str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, value)| *value)
        .unwrap_or(code)
}

/// RAM size for a feature code
pub fn ram_size(code: &str) -> &str {
    lookup(RAM_SIZES, code)
}

/// eMMC size for a feature code
pub fn emmc_size(code: &str) -> &str {
    lookup(EMMC_SIZES, code)
}
