//! DRAM timing descriptors
//!
//! One descriptor per LPDDR4 part fitted across the module variants. The
//! descriptors are opaque to the identity code: the variant resolver picks
//! one and the memory-controller init consumes it. Register sequences are
//! the controller programming for the first frequency setpoint; the full
//! PHY training payload stays with the memory-controller collaborator.

/// 1 GiB
pub const SZ_1G: u64 = 1 << 30;
/// 2 GiB
pub const SZ_2G: u64 = 2 << 30;
/// 4 GiB
pub const SZ_4G: u64 = 4 << 30;
/// 8 GiB
pub const SZ_8G: u64 = 8 << 30;

/// One DDR controller register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegVal {
    /// Register address
    pub reg: u32,
    /// Value to program
    pub val: u32,
}

/// Timing parameter set for one DRAM part
#[derive(Debug, PartialEq, Eq)]
pub struct DramTimingInfo {
    /// Part/configuration name
    pub name: &'static str,
    /// DDR controller configuration sequence
    pub ddrc_cfg: &'static [RegVal],
    /// Frequency setpoints in MT/s, fastest first
    pub fsp_table: &'static [u32],
}

/// Micron MT53D1024M32D4DT, 4 GiB, 2 channels, 2 chip selects (i.MX8MP)
pub static LPDDR4_MT53D1024M32D4DT_4GIB_2CHN_2CS: DramTimingInfo = DramTimingInfo {
    name: "mt53d1024m32d4dt-4gib-2chn-2cs",
    ddrc_cfg: &[
        RegVal { reg: 0x3d400304, val: 0x1 },
        RegVal { reg: 0x3d400030, val: 0x1 },
        RegVal { reg: 0x3d400000, val: 0xa3080020 },
        RegVal { reg: 0x3d400020, val: 0x1303 },
        RegVal { reg: 0x3d400024, val: 0x1e84800 },
        RegVal { reg: 0x3d400064, val: 0x7a0118 },
        RegVal { reg: 0x3d400200, val: 0x17 },
        RegVal { reg: 0x3d400218, val: 0x7070707 },
    ],
    fsp_table: &[4000, 400, 100],
};

/// Micron MT53D512M32D2DS, 2 GiB, 2 channels, 2 chip selects (i.MX8MP)
pub static LPDDR4_MT53D512M32D2DS_2GIB_2CHN_2CS: DramTimingInfo = DramTimingInfo {
    name: "mt53d512m32d2ds-2gib-2chn-2cs",
    ddrc_cfg: &[
        RegVal { reg: 0x3d400304, val: 0x1 },
        RegVal { reg: 0x3d400030, val: 0x1 },
        RegVal { reg: 0x3d400000, val: 0xa1080020 },
        RegVal { reg: 0x3d400020, val: 0x1303 },
        RegVal { reg: 0x3d400024, val: 0x1e84800 },
        RegVal { reg: 0x3d400064, val: 0x7a0118 },
        RegVal { reg: 0x3d400200, val: 0x16 },
        RegVal { reg: 0x3d400218, val: 0x7070707 },
    ],
    fsp_table: &[4000, 400, 100],
};

/// Nanya NT6AN512T32AV-J2I, 2 GiB, 2 channels, 1 chip select (i.MX8MM)
pub static LPDDR4_NT6AN512T32AVJ2I_2GIB_2CHN_1CS: DramTimingInfo = DramTimingInfo {
    name: "nt6an512t32avj2i-2gib-2chn-1cs",
    ddrc_cfg: &[
        RegVal { reg: 0x3d400304, val: 0x1 },
        RegVal { reg: 0x3d400030, val: 0x1 },
        RegVal { reg: 0x3d400000, val: 0xa1080020 },
        RegVal { reg: 0x3d400020, val: 0x303 },
        RegVal { reg: 0x3d400024, val: 0x16e3600 },
        RegVal { reg: 0x3d400064, val: 0x5b00d2 },
        RegVal { reg: 0x3d400200, val: 0x16 },
        RegVal { reg: 0x3d400218, val: 0x7070707 },
    ],
    fsp_table: &[3000, 400, 100],
};

/// Micron MT53B512M32D2NP, 2 GiB, 2 channels, 2 chip selects, DV1 (i.MX8MM)
pub static LPDDR4_MT53B512M32D2NP_2GIB_2CHN_2CS_DV1: DramTimingInfo = DramTimingInfo {
    name: "mt53b512m32d2np-2gib-2chn-2cs-dv1",
    ddrc_cfg: &[
        RegVal { reg: 0x3d400304, val: 0x1 },
        RegVal { reg: 0x3d400030, val: 0x1 },
        RegVal { reg: 0x3d400000, val: 0xa1080020 },
        RegVal { reg: 0x3d400020, val: 0x303 },
        RegVal { reg: 0x3d400024, val: 0x16e3600 },
        RegVal { reg: 0x3d400064, val: 0x5b00d2 },
        RegVal { reg: 0x3d400200, val: 0x17 },
        RegVal { reg: 0x3d400218, val: 0x7070707 },
    ],
    fsp_table: &[3000, 400, 100],
};
