//! embedded-graphics integration
//!
//! Lets text, shapes and images be drawn straight into the framebuffer,
//! and lets a raw 1-bit `ImageRaw` be bulk imported.

use core::convert::Infallible;

use embedded_graphics::image::{GetPixel, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::image::PixelSource;

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        let (width, height) = self.geometry().size();
        Size::new(width, height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Off-screen pixels are clipped, as DrawTarget requires
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                let _ = self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

impl PixelSource for ImageRaw<'_, BinaryColor> {
    fn dimensions(&self) -> (u32, u32) {
        let size = OriginDimensions::size(self);
        (size.width, size.height)
    }

    fn pixel_at(&self, x: u32, y: u32) -> bool {
        GetPixel::pixel(self, Point::new(x as i32, y as i32)).is_some_and(|c| c.is_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn test_draw_line() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        Line::new(Point::new(0, 0), Point::new(7, 7))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();

        for x in 0..8 {
            assert_eq!(fb.as_bytes()[x], 1 << x);
        }
    }

    #[test]
    fn test_draw_clips() {
        let mut fb = FrameBuffer::new(Geometry::W128_H32);
        Pixel(Point::new(-1, 0), BinaryColor::On).draw(&mut fb).unwrap();
        Pixel(Point::new(200, 40), BinaryColor::On).draw(&mut fb).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.size(), Size::new(128, 32));
    }

    #[test]
    fn test_import_image_raw() {
        // 8x8, only the top-left pixel set
        let mut data = [0u8; 8];
        data[0] = 0x80;
        let raw = ImageRaw::<BinaryColor>::new(&data, 8);

        let mut fb = FrameBuffer::new(Geometry::new(8, 8).unwrap());
        fb.import_image(&raw).unwrap();
        assert_eq!(fb.as_bytes(), &[0x01, 0, 0, 0, 0, 0, 0, 0]);
    }
}
