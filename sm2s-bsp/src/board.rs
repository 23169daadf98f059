//! Per-board profiles
//!
//! One profile per supported SM2S module, carrying the naming pieces used
//! for the device tree filename and the board's variant table. Profiles
//! are process-wide constants; boot code picks the one matching the SoC
//! it was built for.

use crate::dram::{
    LPDDR4_MT53B512M32D2NP_2GIB_2CHN_2CS_DV1, LPDDR4_MT53D1024M32D4DT_4GIB_2CHN_2CS,
    LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS, LPDDR4_NT6AN512T32AVJ2I_2GIB_2CHN_1CS, SZ_2G, SZ_4G,
};
use crate::variant::{VariantRecord, VariantTable};

/// Static description of one supported board
#[derive(Debug)]
pub struct BoardProfile {
    /// Human-readable board name
    pub name: &'static str,
    /// Manufacturer used when the record does not name one
    pub company: &'static str,
    /// Module form factor
    pub form_factor: &'static str,
    /// Product platform
    pub platform: &'static str,
    /// SoC the module carries
    pub processor: &'static str,
    /// Known manufacturing variants of this board
    pub variants: VariantTable,
}

static SM2S_IMX8MP_VARIANTS: [VariantRecord; 2] = [
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

/// MSC SM2S-IMX8PLUS (i.MX8M Plus)
pub static SM2S_IMX8MP: BoardProfile = BoardProfile {
    name: "MSC SM2S-IMX8PLUS",
    company: "msc",
    form_factor: "sm2s",
    platform: "imx8plus",
    processor: "imx8mp",
    variants: VariantTable::new(&SM2S_IMX8MP_VARIANTS, 0),
};

static SM2S_IMX8MM_VARIANTS: [VariantRecord; 2] = [
    VariantRecord {
        revision: "E0",
        feature: "13N4200I",
        dram_size: SZ_2G,
        dram_timing: &LPDDR4_NT6AN512T32AVJ2I_2GIB_2CHN_1CS,
    },
    VariantRecord {
        revision: "C0",
        feature: "13N4200I",
        dram_size: SZ_2G,
        dram_timing: &LPDDR4_MT53B512M32D2NP_2GIB_2CHN_2CS_DV1,
    },
];

/// MSC SM2S-IMX8MINI (i.MX8M Mini)
pub static SM2S_IMX8MM: BoardProfile = BoardProfile {
    name: "MSC SM2S-IMX8MINI",
    company: "msc",
    form_factor: "sm2s",
    platform: "imx8mini",
    processor: "imx8mm",
    variants: VariantTable::new(&SM2S_IMX8MM_VARIANTS, 0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_have_unique_pairs() {
        assert_eq!(SM2S_IMX8MP.variants.check_unique(), Ok(()));
        assert_eq!(SM2S_IMX8MM.variants.check_unique(), Ok(()));
    }

    #[test]
    fn test_imx8mm_revisions_select_different_timings() {
        // Same feature code, different board revision, different DRAM part
        let e0 = SM2S_IMX8MM.variants.resolve("13N4200I", "E0");
        let c0 = SM2S_IMX8MM.variants.resolve("13N4200I", "C0");
        assert_ne!(e0.dram_timing, c0.dram_timing);
        assert_eq!(e0.dram_size, c0.dram_size);
    }

    #[test]
    fn test_default_variants_are_first_listed() {
        assert!(core::ptr::eq(
            SM2S_IMX8MP.variants.default_variant(),
            &SM2S_IMX8MP.variants.entries()[0]
        ));
        assert!(core::ptr::eq(
            SM2S_IMX8MM.variants.default_variant(),
            &SM2S_IMX8MM.variants.entries()[0]
        ));
    }
}
