//! Page-packed framebuffer
//!
//! Mirrors the controller's GDDRAM: `pages` rows of `width` bytes, each
//! byte one column of 8 vertically stacked pixels with bit 0 on top.
//! The buffer is sized once from the geometry and never resized.

use heapless::Vec;

use crate::error::BufferError;
use crate::geometry::{Geometry, MAX_BUFFER_LEN, PAGE_HEIGHT};
use crate::image::PixelSource;

/// In-memory copy of the display contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    geometry: Geometry,
    buffer: Vec<u8, MAX_BUFFER_LEN>,
}

impl FrameBuffer {
    /// Create a zero-filled buffer for the given geometry
    pub fn new(geometry: Geometry) -> Self {
        let len = geometry.buffer_len();
        debug_assert!(len <= MAX_BUFFER_LEN);
        let buffer = core::iter::repeat(0).take(len).collect();
        Self { geometry, buffer }
    }

    /// Display geometry this buffer was sized for
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Buffer length in bytes (`width * pages`)
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; a geometry has at least one page
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Raw page-packed contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// One page row, `width` bytes
    pub fn page(&self, page: u32) -> Result<&[u8], BufferError> {
        if page >= self.geometry.pages() {
            return Err(BufferError::OutOfBounds {
                x: 0,
                y: page.saturating_mul(PAGE_HEIGHT),
            });
        }
        let width = self.geometry.width() as usize;
        let start = page as usize * width;
        Ok(&self.buffer[start..start + width])
    }

    /// Byte index and bit mask of a pixel
    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), BufferError> {
        if !self.geometry.contains(x, y) {
            return Err(BufferError::OutOfBounds { x, y });
        }
        let page = y / PAGE_HEIGHT;
        let index = (page * self.geometry.width() + x) as usize;
        Ok((index, 1 << (y % PAGE_HEIGHT)))
    }

    /// Turn a pixel on or off
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<(), BufferError> {
        let (index, mask) = self.locate(x, y)?;
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
        Ok(())
    }

    /// Read a pixel back
    pub fn pixel(&self, x: u32, y: u32) -> Result<bool, BufferError> {
        let (index, mask) = self.locate(x, y)?;
        Ok(self.buffer[index] & mask != 0)
    }

    /// Reset every byte to zero (all pixels off)
    pub fn clear(&mut self) {
        self.fill(0x00);
    }

    /// Reset every byte to `byte`
    ///
    /// `0xFF` lights the whole panel; patterns like `0x0F` light the top
    /// half of every page.
    pub fn fill(&mut self, byte: u8) {
        self.buffer.iter_mut().for_each(|b| *b = byte);
    }

    /// Overwrite the whole buffer from a 1-bit image of the same size
    ///
    /// Nothing is written unless both checks pass.
    pub fn import_image<S: PixelSource>(&mut self, source: &S) -> Result<(), BufferError> {
        let bit_depth = source.bit_depth();
        if bit_depth != 1 {
            return Err(BufferError::UnsupportedFormat { bit_depth });
        }
        let actual = source.dimensions();
        if actual != self.geometry.size() {
            return Err(BufferError::DimensionMismatch {
                expected: self.geometry.size(),
                actual,
            });
        }

        let width = self.geometry.width();
        for page in 0..self.geometry.pages() {
            let top = page * PAGE_HEIGHT;
            for x in 0..width {
                // Scan bottom row first so it ends up in bit 7
                let mut bits = 0u8;
                for row in (top..top + PAGE_HEIGHT).rev() {
                    bits = (bits << 1) | source.pixel_at(x, row) as u8;
                }
                self.buffer[(page * width + x) as usize] = bits;
            }
        }
        Ok(())
    }
}

impl PixelSource for FrameBuffer {
    fn dimensions(&self) -> (u32, u32) {
        self.geometry.size()
    }

    fn pixel_at(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Bitmap;
    use proptest::prelude::*;

    /// Pixel source backed by a closure
    struct FnSource<F> {
        width: u32,
        height: u32,
        depth: u8,
        f: F,
    }

    impl<F: Fn(u32, u32) -> bool> PixelSource for FnSource<F> {
        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn bit_depth(&self) -> u8 {
            self.depth
        }

        fn pixel_at(&self, x: u32, y: u32) -> bool {
            (self.f)(x, y)
        }
    }

    fn source<F: Fn(u32, u32) -> bool>(width: u32, height: u32, f: F) -> FnSource<F> {
        FnSource {
            width,
            height,
            depth: 1,
            f,
        }
    }

    #[test]
    fn test_new_is_zeroed() {
        let fb = FrameBuffer::new(Geometry::W128_H32);
        assert_eq!(fb.len(), 512);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_layout() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);

        fb.set_pixel(0, 0, true).unwrap();
        assert_eq!(fb.as_bytes()[0], 0x01);

        fb.set_pixel(0, 7, true).unwrap();
        assert_eq!(fb.as_bytes()[0], 0x81);

        // y=9 -> page 1, bit 1
        fb.set_pixel(5, 9, true).unwrap();
        assert_eq!(fb.as_bytes()[128 + 5], 0x02);

        fb.set_pixel(0, 0, false).unwrap();
        assert_eq!(fb.as_bytes()[0], 0x80);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        assert_eq!(
            fb.set_pixel(128, 0, true),
            Err(BufferError::OutOfBounds { x: 128, y: 0 })
        );
        assert_eq!(
            fb.pixel(0, 32),
            Err(BufferError::OutOfBounds { x: 0, y: 32 })
        );
        assert!(fb.page(4).is_err());
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.fill(0xFF);
        assert!(fb.pixel(17, 23).unwrap());
        assert_eq!(fb.len(), 512);

        fb.clear();
        assert!(!fb.pixel(17, 23).unwrap());

        // Low nibble lit: rows 0-3 of each page on, 4-7 off
        fb.fill(0x0F);
        assert!(fb.pixel(3, 8).unwrap());
        assert!(!fb.pixel(3, 12).unwrap());
        assert_eq!(fb.len(), 512);
    }

    #[test]
    fn test_page_slices() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.set_pixel(127, 31, true).unwrap();
        let last = fb.page(3).unwrap();
        assert_eq!(last.len(), 128);
        assert_eq!(last[127], 0x80);
        assert!(fb.page(0).unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_import_bit_order() {
        // Only the top row of each page lit
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.import_image(&source(128, 32, |_, y| y % 8 == 0)).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0x01));

        // Only the bottom row of each page lit
        fb.import_image(&source(128, 32, |_, y| y % 8 == 7)).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0x80));
    }

    #[test]
    fn test_import_is_not_mirrored() {
        // A diagonal stays a diagonal: pixel (x, x) within page 0
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.import_image(&source(128, 32, |x, y| x < 8 && x == y))
            .unwrap();
        for x in 0..8 {
            assert_eq!(fb.as_bytes()[x as usize], 1 << x);
        }
        assert!(fb.pixel(0, 0).unwrap());
        assert!(!fb.pixel(0, 7).unwrap());
    }

    #[test]
    fn test_import_matches_set_pixel() {
        let mut expected = FrameBuffer::new(Geometry::W128_H32);
        expected.set_pixel(10, 3, true).unwrap();
        expected.set_pixel(100, 30, true).unwrap();

        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.import_image(&source(128, 32, |x, y| (x, y) == (10, 3) || (x, y) == (100, 30)))
            .unwrap();
        assert_eq!(fb, expected);
    }

    #[test]
    fn test_import_dimension_mismatch_leaves_buffer() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        fb.fill(0x5A);

        let err = fb.import_image(&source(128, 64, |_, _| true)).unwrap_err();
        assert_eq!(
            err,
            BufferError::DimensionMismatch {
                expected: (128, 32),
                actual: (128, 64)
            }
        );
        assert!(fb.as_bytes().iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn test_import_unsupported_format() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        let mut src = source(128, 32, |_, _| true);
        src.depth = 8;
        assert_eq!(
            fb.import_image(&src),
            Err(BufferError::UnsupportedFormat { bit_depth: 8 })
        );
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_import_format_checked_before_size() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        let mut src = source(64, 32, |_, _| true);
        src.depth = 8;
        assert_eq!(
            fb.import_image(&src),
            Err(BufferError::UnsupportedFormat { bit_depth: 8 })
        );
    }

    #[test]
    fn test_new_full_size_buffer() {
        let fb = FrameBuffer::new(Geometry::W128_H64);
        assert_eq!(fb.len(), MAX_BUFFER_LEN);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_import_bitmap() {
        // 16x8: top-left and bottom-right pixels
        let mut data = [0u8; 16];
        data[0] = 0x80;
        data[15] = 0x01;
        let bmp = Bitmap::new(&data, 16, 8).unwrap();

        let mut fb = FrameBuffer::new(Geometry::new(16, 8).unwrap());
        fb.import_image(&bmp).unwrap();
        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[15], 0x80);
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 2);
    }

    proptest! {
        #[test]
        fn prop_set_then_read(x in 0u32..128, y in 0u32..32, on in any::<bool>()) {
            let mut fb = FrameBuffer::new(Geometry::W128_H32);
            fb.fill(if on { 0x00 } else { 0xFF });
            fb.set_pixel(x, y, on).unwrap();

            prop_assert_eq!(fb.pixel(x, y).unwrap(), on);
            let byte = fb.as_bytes()[((y / 8) * 128 + x) as usize];
            prop_assert_eq!(byte & (1 << (y % 8)) != 0, on);
            prop_assert_eq!(fb.len(), 512);
        }

        #[test]
        fn prop_out_of_range_rejected(x in 128u32..1024, y in 32u32..1024) {
            let mut fb = FrameBuffer::new(Geometry::W128_H32);
            prop_assert!(fb.set_pixel(x, 0, true).is_err());
            prop_assert!(fb.set_pixel(0, y, true).is_err());
            prop_assert!(fb.pixel(x, y).is_err());
        }

        #[test]
        fn prop_pack_unpack_round_trip(bytes in proptest::collection::vec(any::<u8>(), 512)) {
            let mut original = FrameBuffer::new(Geometry::W128_H32);
            original.buffer.copy_from_slice(&bytes);

            let mut copy = FrameBuffer::new(Geometry::W128_H32);
            copy.import_image(&original).unwrap();
            prop_assert_eq!(copy.as_bytes(), original.as_bytes());
        }
    }
}
