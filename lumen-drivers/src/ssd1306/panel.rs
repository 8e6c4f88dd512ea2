//! Per-panel bring-up tables
//!
//! The init sequence is a contract with one specific module: same opcodes,
//! same arguments, same order. A step out of place does not fail, it
//! just leaves the glass dark or garbled. Tables are therefore plain data,
//! one per panel and VCC mode, replayed verbatim by the controller.
//!
//! `DISPLAY_ON` is not part of any table; the controller issues it last.

use lumen_core::{Geometry, Panel, VccMode};

use super::command::cmd;

/// Everything the controller needs to know about one panel module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelProfile {
    /// Pixel dimensions
    pub geometry: Geometry,
    /// First visible RAM column
    pub column_offset: u8,
    /// Init table when VCC is supplied externally
    pub init_external: &'static [u8],
    /// Init table when the charge pump generates VCC
    pub init_switchcap: &'static [u8],
}

impl PanelProfile {
    /// Init table for a VCC mode
    pub const fn init_sequence(&self, vcc: VccMode) -> &'static [u8] {
        match vcc {
            VccMode::External => self.init_external,
            VccMode::SwitchCap => self.init_switchcap,
        }
    }

    /// Contrast the init table leaves the panel at
    pub fn boot_contrast(&self, vcc: VccMode) -> Option<u8> {
        self.init_sequence(vcc)
            .windows(2)
            .find(|pair| pair[0] == cmd::SET_CONTRAST)
            .map(|pair| pair[1])
    }
}

/// 128x32 module bring-up
///
/// Both VCC modes share it; the on-board DC-DC is always used.
const INIT_128X32: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0xB1,
    cmd::SET_MULTIPLEX,
    0x1F, // 32 lines
    cmd::SET_DISPLAY_OFFSET,
    0x10,
    cmd::SET_START_LINE | 0x00,
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    0x82, // COM configuration for this glass
    0x00,
    cmd::SET_CONTRAST,
    0x4D,
    cmd::SET_PRECHARGE,
    0x62,
    cmd::SET_VCOM_DETECT,
    0x3F,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DC_DC_CONTROL,
    0x8B, // DC-DC on
];

macro_rules! init_128x64 {
    ($charge_pump:expr, $contrast:expr, $precharge:expr) => {
        &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MULTIPLEX,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::CHARGE_PUMP,
            $charge_pump,
            cmd::MEMORY_MODE,
            0x02, // page addressing
            cmd::SEG_REMAP | 0x01,
            cmd::COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12, // alternative COM config
            cmd::SET_CONTRAST,
            $contrast,
            cmd::SET_PRECHARGE,
            $precharge,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::DISPLAY_ALL_ON_RESUME,
            cmd::NORMAL_DISPLAY,
        ]
    };
}

const INIT_128X64_EXTERNAL: &[u8] = init_128x64!(0x10, 0x9F, 0x22);
const INIT_128X64_SWITCHCAP: &[u8] = init_128x64!(0x14, 0xCF, 0xF1);

/// SH1106 bring-up; it ignores the SSD1306 memory-mode command
const INIT_SH1106_128X64: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE | 0x00,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::NORMAL_DISPLAY,
];

/// SSD1306 128x32
pub const SSD1306_128X32: PanelProfile = PanelProfile {
    geometry: Geometry::W128_H32,
    column_offset: 0,
    init_external: INIT_128X32,
    init_switchcap: INIT_128X32,
};

/// SSD1306 128x64
pub const SSD1306_128X64: PanelProfile = PanelProfile {
    geometry: Geometry::W128_H64,
    column_offset: 0,
    init_external: INIT_128X64_EXTERNAL,
    init_switchcap: INIT_128X64_SWITCHCAP,
};

/// SH1106 128x64; visible area starts at RAM column 2
pub const SH1106_128X64: PanelProfile = PanelProfile {
    geometry: Geometry::W128_H64,
    column_offset: 2,
    init_external: INIT_SH1106_128X64,
    init_switchcap: INIT_SH1106_128X64,
};

/// Look up the profile for a configured panel
pub const fn profile(panel: Panel) -> &'static PanelProfile {
    match panel {
        Panel::Ssd1306_128x32 => &SSD1306_128X32,
        Panel::Ssd1306_128x64 => &SSD1306_128X64,
        Panel::Sh1106_128x64 => &SH1106_128X64,
    }
}
