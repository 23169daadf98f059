//! Module variant resolution
//!
//! Each board ships a static table associating a (feature code, hardware
//! revision) pair with the DRAM size and timing set fitted on that
//! variant. Resolution is a linear scan, first match wins, and is total:
//! when nothing matches, the table's designated default entry is returned
//! with a warning so boot proceeds on a previously-known-safe
//! configuration instead of halting on an unrecognized or absent record.

use crate::dram::DramTimingInfo;

/// One known manufacturing variant
#[derive(Debug)]
pub struct VariantRecord {
    /// Hardware revision (MES letter+digit pair)
    pub revision: &'static str,
    /// Feature code
    pub feature: &'static str,
    /// Fitted DRAM size in bytes
    pub dram_size: u64,
    /// Timing set for the fitted part
    pub dram_timing: &'static DramTimingInfo,
}

/// Ordered table of known variants with a designated default
#[derive(Debug)]
pub struct VariantTable {
    entries: &'static [VariantRecord],
    default_idx: usize,
}

impl VariantTable {
    /// Build a table; `default_idx` designates the fallback entry
    pub const fn new(entries: &'static [VariantRecord], default_idx: usize) -> Self {
        assert!(!entries.is_empty(), "variant table must not be empty");
        assert!(default_idx < entries.len(), "default index out of range");
        Self {
            entries,
            default_idx,
        }
    }

    /// All known variants, in match order
    pub fn entries(&self) -> &'static [VariantRecord] {
        self.entries
    }

    /// The designated fallback entry
    pub fn default_variant(&self) -> &'static VariantRecord {
        &self.entries[self.default_idx]
    }

    /// Resolve a decoded (feature, revision) pair to a variant
    ///
    /// A candidate matches only on equal length and equal content of both
    /// fields; the length pre-check guards against truncated accessor
    /// output. Never fails: an unmatched pair yields the default entry
    /// and a warning.
    pub fn resolve(&self, feature: &str, revision: &str) -> &'static VariantRecord {
        for variant in self.entries {
            if variant.feature.len() != feature.len() || variant.revision.len() != revision.len()
            {
                continue;
            }
            if variant.feature != feature || variant.revision != revision {
                continue;
            }
            return variant;
        }

        log::warn!(
            "no variant for feature {} revision {}, using default variant settings",
            feature,
            revision
        );
        self.default_variant()
    }

    /// Check that no (feature, revision) pair appears twice
    ///
    /// Returns the indices of the first duplicate pair found. Duplicates
    /// would silently resolve to the earlier entry; shipped tables are
    /// required to be free of them.
    pub fn check_unique(&self) -> Result<(), (usize, usize)> {
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate().skip(i + 1) {
                if a.feature == b.feature && a.revision == b.revision {
                    return Err((i, j));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dram::{
        LPDDR4_MT53D1024M32D4DT_4GIB_2CHN_2CS, LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS, SZ_2G, SZ_4G,
    };

    static ENTRIES: [VariantRecord; 2] = [
        VariantRecord {
            revision: "20",
            feature: "24N0680I",
            dram_size: SZ_4G,
            dram_timing: &LPDDR4_MT53D1024M32D4DT_4GIB_2CHN_2CS,
        },
        VariantRecord {
            revision: "A0",
            feature: "14N0740I",
            dram_size: SZ_2G,
            dram_timing: &LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS,
        },
    ];

    static TABLE: VariantTable = VariantTable::new(&ENTRIES, 0);

    #[test]
    fn test_exact_match_resolves() {
        let variant = TABLE.resolve("14N0740I", "A0");
        assert_eq!(variant.dram_size, SZ_2G);
        assert_eq!(variant.dram_timing, &LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS);
    }

    #[test]
    fn test_no_prefix_or_partial_match() {
        // Shorter, longer and case-different inputs all miss
        assert_eq!(TABLE.resolve("14N074", "A0").dram_size, SZ_4G);
        assert_eq!(TABLE.resolve("14N0740IX", "A0").dram_size, SZ_4G);
        assert_eq!(TABLE.resolve("14n0740i", "A0").dram_size, SZ_4G);
        assert_eq!(TABLE.resolve("14N0740I", "A").dram_size, SZ_4G);
    }

    #[test]
    fn test_both_fields_must_match() {
        assert_eq!(TABLE.resolve("14N0740I", "20").dram_size, SZ_4G);
        assert_eq!(TABLE.resolve("24N0680I", "A0").dram_size, SZ_4G);
    }

    #[test]
    fn test_unknown_pair_yields_default() {
        let variant = TABLE.resolve("UNKNOWN1", "Z9");
        assert!(core::ptr::eq(variant, TABLE.default_variant()));
    }

    #[test]
    fn test_sentinel_inputs_yield_default() {
        let variant = TABLE.resolve(sm2s_boardinfo::NOT_AVAILABLE, sm2s_boardinfo::NOT_AVAILABLE);
        assert!(core::ptr::eq(variant, TABLE.default_variant()));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for _ in 0..3 {
            assert!(core::ptr::eq(
                TABLE.resolve("24N0680I", "20"),
                &TABLE.entries()[0]
            ));
        }
    }

    #[test]
    fn test_first_listed_duplicate_wins() {
        static DUP: [VariantRecord; 2] = [
            VariantRecord {
                revision: "C0",
                feature: "13N4200I",
                dram_size: SZ_2G,
                dram_timing: &LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS,
            },
            VariantRecord {
                revision: "C0",
                feature: "13N4200I",
                dram_size: SZ_4G,
                dram_timing: &LPDDR4_MT53D1024M32D4DT_4GIB_2CHN_2CS,
            },
        ];
        static DUP_TABLE: VariantTable = VariantTable::new(&DUP, 0);

        assert_eq!(DUP_TABLE.resolve("13N4200I", "C0").dram_size, SZ_2G);
        assert_eq!(DUP_TABLE.check_unique(), Err((0, 1)));
    }

    #[test]
    fn test_unique_check_passes_on_distinct_pairs() {
        assert_eq!(TABLE.check_unique(), Ok(()));
    }
}
