//! Framebuffer and geometry errors

/// Errors raised by buffer and geometry operations
///
/// These are programming errors: bad coordinates or an image that does
/// not fit the panel. None of them are ever clamped away silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Pixel or page coordinate outside the display
    OutOfBounds { x: u32, y: u32 },
    /// Image size differs from the display geometry
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    /// Pixel source is not one bit per pixel
    UnsupportedFormat { bit_depth: u8 },
    /// Width or height the controller cannot address
    InvalidGeometry { width: u32, height: u32 },
}
