//! Pixel sources for bulk import
//!
//! Decoding image files is someone else's job. Whatever does it hands the
//! framebuffer a [`PixelSource`]: a size, a bit depth and a way to read
//! one pixel.

/// Read access to an externally decoded image
pub trait PixelSource {
    /// `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Bits per pixel; only 1 can be imported
    fn bit_depth(&self) -> u8 {
        1
    }

    /// Whether the pixel at `(x, y)` is lit
    ///
    /// Only called with coordinates inside [`dimensions`](Self::dimensions).
    fn pixel_at(&self, x: u32, y: u32) -> bool;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn bit_depth(&self) -> u8 {
        (**self).bit_depth()
    }

    fn pixel_at(&self, x: u32, y: u32) -> bool {
        (**self).pixel_at(x, y)
    }
}

/// Row-major packed bitmap
///
/// The layout produced by most 1-bit decoders (PBM raw, BMP after row
/// flipping): rows top to bottom, each row padded to a whole byte, the
/// most significant bit of each byte is the leftmost pixel.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    bit_depth: u8,
}

impl<'a> Bitmap<'a> {
    /// Wrap packed 1-bit rows
    ///
    /// Returns `None` if `data` is too short for `width x height`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Option<Self> {
        Self::with_depth(data, width, height, 1)
    }

    /// Wrap packed rows with an explicit bit depth
    ///
    /// Decoders that hand over greyscale data say so here; the framebuffer
    /// refuses anything but depth 1.
    pub fn with_depth(data: &'a [u8], width: u32, height: u32, bit_depth: u8) -> Option<Self> {
        let stride = Self::stride_for(width, bit_depth);
        if bit_depth == 0 || data.len() < stride * height as usize {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            bit_depth,
        })
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        Self::stride_for(self.width, self.bit_depth)
    }

    fn stride_for(width: u32, bit_depth: u8) -> usize {
        (width as usize * bit_depth as usize).div_ceil(8)
    }
}

impl PixelSource for Bitmap<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    fn pixel_at(&self, x: u32, y: u32) -> bool {
        // Meaningful for depth 1 only; import rejects anything else first
        let byte = self.data[y as usize * self.stride() + (x as usize / 8)];
        byte & (0x80 >> (x % 8)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_msb_is_leftmost() {
        // 10x2: row 0 = pixel 0 and pixel 9, row 1 = pixel 1
        let data = [0b1000_0000, 0b0100_0000, 0b0100_0000, 0b0000_0000];
        let bmp = Bitmap::new(&data, 10, 2).unwrap();

        assert_eq!(bmp.stride(), 2);
        assert!(bmp.pixel_at(0, 0));
        assert!(!bmp.pixel_at(1, 0));
        assert!(bmp.pixel_at(9, 0));
        assert!(bmp.pixel_at(1, 1));
        assert!(!bmp.pixel_at(0, 1));
    }

    #[test]
    fn test_bitmap_too_short() {
        let data = [0u8; 3];
        assert!(Bitmap::new(&data, 16, 2).is_none());
        assert!(Bitmap::new(&data, 8, 3).is_some());
    }

    #[test]
    fn test_bitmap_depth() {
        let data = [0u8; 16];
        let bmp = Bitmap::with_depth(&data, 4, 4, 8).unwrap();
        assert_eq!(bmp.bit_depth(), 8);
        assert!(Bitmap::with_depth(&data, 4, 4, 0).is_none());
    }
}
