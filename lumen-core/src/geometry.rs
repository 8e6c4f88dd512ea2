//! Display geometry
//!
//! The controller addresses rows in pages of 8, so the height must be a
//! multiple of 8. Limits match the SSD1306/SH1106 family's GDDRAM.

use crate::error::BufferError;

/// Rows per page
pub const PAGE_HEIGHT: u32 = 8;

/// Widest panel the controller family can drive
pub const MAX_WIDTH: u32 = 128;

/// Tallest panel the controller family can drive
pub const MAX_HEIGHT: u32 = 64;

/// Largest framebuffer in bytes (128 columns x 8 pages)
pub const MAX_BUFFER_LEN: usize = (MAX_WIDTH * MAX_HEIGHT / PAGE_HEIGHT) as usize;

/// Validated display dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u32,
    height: u32,
}

impl Geometry {
    /// 128x32 panel
    pub const W128_H32: Self = Self {
        width: 128,
        height: 32,
    };

    /// 128x64 panel
    pub const W128_H64: Self = Self {
        width: 128,
        height: 64,
    };

    /// Create a geometry, rejecting sizes the controller cannot address
    pub const fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        if width == 0
            || width > MAX_WIDTH
            || height == 0
            || height > MAX_HEIGHT
            || height % PAGE_HEIGHT != 0
        {
            return Err(BufferError::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (columns)
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (rows)
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u32 {
        self.height / PAGE_HEIGHT
    }

    /// Framebuffer length in bytes
    pub const fn buffer_len(&self) -> usize {
        (self.width * self.pages()) as usize
    }

    /// Check that a pixel lies on the display
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// `(width, height)` tuple
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
