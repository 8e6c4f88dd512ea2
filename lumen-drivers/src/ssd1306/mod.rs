//! SSD1306-family OLED controller over I2C
//!
//! # Bring-up
//!
//! ```text
//! Uninitialized ──begin()──▶ Initializing ──table + DISPLAY_ON──▶ On
//!                                                               │  ▲
//!                                              display_off()    ▼  │ display_on()
//!                                                               Off
//! ```
//!
//! Contrast is volatile across sleep, so `display_on()` replays the last
//! contrast value before waking the panel.

pub mod command;
mod controller;
pub mod panel;

use lumen_core::BufferError;

pub use command::{ScrollDirection, ScrollInterval};
pub use controller::Ssd1306;
pub use panel::PanelProfile;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Constructed, nothing sent yet
    Uninitialized,
    /// Init table being replayed (or replay failed part way)
    Initializing,
    /// Panel lit
    On,
    /// Panel asleep (`DISPLAY_OFF`), RAM retained
    Off,
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Framebuffer or geometry error
    Buffer(BufferError),
    /// Argument outside the range the controller accepts
    InvalidArgument,
    /// Operation needs `begin()` first
    NotInitialized,
    /// Bus write failed
    Transport(E),
}

impl<E> From<BufferError> for Error<E> {
    fn from(e: BufferError) -> Self {
        Error::Buffer(e)
    }
}
