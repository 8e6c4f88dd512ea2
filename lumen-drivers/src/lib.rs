//! Display controller drivers
//!
//! This crate drives the page-addressed monochrome OLED controllers
//! described by `lumen-core` panels:
//!
//! - SSD1306 (128x32, 128x64)
//! - SH1106 (128x64, 132-column RAM)
//!
//! Both speak the same two-wire framing: every transfer starts with a
//! control byte, `0x00` for a command and `0x40` for display data.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod ssd1306;

pub use ssd1306::{Error, Ssd1306, State};
