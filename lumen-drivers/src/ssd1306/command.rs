//! Command set and wire framing
//!
//! Every I2C transfer to the controller starts with a control byte:
//!
//! | Transfer  | Control | Payload                |
//! |-----------|---------|------------------------|
//! | Command   | `0x00`  | 1 command byte         |
//! | Page data | `0x40`  | up to `width` bytes    |

use heapless::Vec;

/// Control byte: next byte is a command (Co = 0, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: remaining bytes are GDDRAM data (Co = 0, D/C# = 1)
pub const CONTROL_DATA: u8 = 0x40;

/// Controller commands
#[allow(dead_code)]
pub mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_START_LINE: u8 = 0x40;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SET_PAGE_START: u8 = 0xB0;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const CHARGE_PUMP: u8 = 0x8D;
    /// SH1106-style DC-DC control
    pub const DC_DC_CONTROL: u8 = 0xAD;

    // Scrolling
    pub const ACTIVATE_SCROLL: u8 = 0x2F;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
    pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
    pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
    pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
    pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
}

/// Frame a single command byte
pub const fn command_frame(command: u8) -> [u8; 2] {
    [CONTROL_COMMAND, command]
}

/// Page-addressing commands for one page refresh
///
/// Page start, then the column pointer split into low and high nibbles.
pub const fn page_address(page: u8, column: u8) -> [u8; 3] {
    [
        cmd::SET_PAGE_START | (page & 0x07),
        cmd::SET_LOW_COLUMN | (column & 0x0F),
        cmd::SET_HIGH_COLUMN | (column >> 4),
    ]
}

/// Horizontal scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Right,
    Left,
}

/// Frames between scroll steps
///
/// The register encoding is not monotonic, hence the explicit mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollInterval {
    Frames2,
    Frames3,
    Frames4,
    #[default]
    Frames5,
    Frames25,
    Frames64,
    Frames128,
    Frames256,
}

impl ScrollInterval {
    /// 3-bit register value
    pub const fn bits(&self) -> u8 {
        match self {
            ScrollInterval::Frames5 => 0b000,
            ScrollInterval::Frames64 => 0b001,
            ScrollInterval::Frames128 => 0b010,
            ScrollInterval::Frames256 => 0b011,
            ScrollInterval::Frames3 => 0b100,
            ScrollInterval::Frames4 => 0b101,
            ScrollInterval::Frames25 => 0b110,
            ScrollInterval::Frames2 => 0b111,
        }
    }
}

/// Longest scroll setup sequence, including the activate command
pub const MAX_SCROLL_SEQUENCE: usize = 8;

/// Command bytes for a continuous horizontal scroll, activate included
pub fn horizontal_scroll(
    direction: ScrollDirection,
    start_page: u8,
    end_page: u8,
    interval: ScrollInterval,
) -> Vec<u8, MAX_SCROLL_SEQUENCE> {
    let opcode = match direction {
        ScrollDirection::Right => cmd::RIGHT_HORIZONTAL_SCROLL,
        ScrollDirection::Left => cmd::LEFT_HORIZONTAL_SCROLL,
    };
    Vec::from_slice(&[
        opcode,
        0x00, // dummy
        start_page,
        interval.bits(),
        end_page,
        0x00, // dummy
        0xFF, // dummy
        cmd::ACTIVATE_SCROLL,
    ])
    .unwrap_or_default()
}

/// Command bytes for a combined vertical and horizontal scroll
///
/// `vertical_offset` is rows moved per step.
pub fn diagonal_scroll(
    direction: ScrollDirection,
    start_page: u8,
    end_page: u8,
    interval: ScrollInterval,
    vertical_offset: u8,
) -> Vec<u8, MAX_SCROLL_SEQUENCE> {
    let opcode = match direction {
        ScrollDirection::Right => cmd::VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
        ScrollDirection::Left => cmd::VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
    };
    Vec::from_slice(&[
        opcode,
        0x00, // dummy
        start_page,
        interval.bits(),
        end_page,
        vertical_offset,
        cmd::ACTIVATE_SCROLL,
    ])
    .unwrap_or_default()
}
