//! Display configuration types
//!
//! Board firmware fills one of these in (or deserializes it with the
//! `serde` feature) and hands it to the driver. Panel-specific command
//! tables live with the driver; this crate only knows each panel's size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lumen_hal::DEFAULT_ADDRESS;

use crate::geometry::Geometry;

/// Supported panel modules
///
/// Each variant owns its own init table in the driver crate. Adding a
/// panel means adding a variant and a table, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(non_camel_case_types)]
pub enum Panel {
    /// SSD1306 128x32 module
    #[default]
    Ssd1306_128x32,
    /// SSD1306 128x64 module
    Ssd1306_128x64,
    /// SH1106 128x64 module (132-column RAM, 2-column offset)
    Sh1106_128x64,
}

impl Panel {
    /// Pixel dimensions of the panel
    pub const fn geometry(&self) -> Geometry {
        match self {
            Panel::Ssd1306_128x32 => Geometry::W128_H32,
            Panel::Ssd1306_128x64 | Panel::Sh1106_128x64 => Geometry::W128_H64,
        }
    }
}

/// How the panel's high voltage rail is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VccMode {
    /// Supplied externally on the VCC pin
    External,
    /// Generated by the internal charge pump
    #[default]
    SwitchCap,
}

impl VccMode {
    /// Contrast used at normal (non-dimmed) brightness
    pub const fn normal_contrast(&self) -> u8 {
        match self {
            VccMode::External => 0x9F,
            VccMode::SwitchCap => 0xCF,
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel module
    pub panel: Panel,
    /// 7-bit bus address (0x3C or 0x3D)
    pub address: u8,
    /// VCC supply used at bring-up
    pub vcc: VccMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel: Panel::default(),
            address: DEFAULT_ADDRESS,
            vcc: VccMode::default(),
        }
    }
}

impl DisplayConfig {
    /// Default configuration for a given panel
    pub fn for_panel(panel: Panel) -> Self {
        Self {
            panel,
            ..Self::default()
        }
    }

    /// Builder-style address override
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Builder-style VCC override
    pub fn with_vcc(mut self, vcc: VccMode) -> Self {
        self.vcc = vcc;
        self
    }
}
