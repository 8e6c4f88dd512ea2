//! Board-agnostic core logic for monochrome page-addressed displays
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Display geometry (width, height, page count)
//! - The page-packed framebuffer the controller expects
//! - The pixel source trait used to import externally decoded images
//! - Configuration type definitions
//!
//! # Page layout
//!
//! ```text
//!            x=0   x=1   x=2        x=width-1
//! page 0   [ b0 ][ b1 ][ b2 ] ... [ bW-1 ]    rows 0..7
//! page 1   [ bW ][ ...                  ]    rows 8..15
//! ```
//!
//! Each byte is one column of 8 rows; bit 0 is the top row of the page.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod geometry;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod image;

pub use config::{DisplayConfig, Panel, VccMode};
pub use error::BufferError;
pub use framebuffer::FrameBuffer;
pub use geometry::Geometry;
pub use image::{Bitmap, PixelSource};
