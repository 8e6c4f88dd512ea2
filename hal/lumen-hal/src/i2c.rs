//! I2C bus abstractions
//!
//! Display controllers on a two-wire bus are write-only from the driver's
//! point of view, so the trait only carries the write half.

/// Default 7-bit address of SSD1306-class controllers (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit address (SA0 tied high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// I2C bus master
///
/// A single call is one bus transaction: START, address, bytes, STOP.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Every blocking `embedded-hal` I2C master is usable as a display bus.
impl<T> I2cBus for T
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(self, address, data)
    }
}

/// I2C configuration
///
/// Informational only: the bus itself is configured by the board HAL
/// before it is handed to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), the controller's rated maximum
    pub const FAST: Self = Self { frequency: 400_000 };
}
