//! SSD1306 controller driver
//!
//! Owns the bus, the device address and the framebuffer. Every method is
//! blocking and every bus failure is returned as-is; nothing is retried.

use lumen_core::geometry::MAX_WIDTH;
use lumen_core::{DisplayConfig, FrameBuffer, VccMode};
use lumen_hal::I2cBus;

use super::command::{
    self, cmd, command_frame, page_address, ScrollDirection, ScrollInterval, CONTROL_DATA,
};
use super::panel::{self, PanelProfile};
use super::{Error, State};

/// SSD1306-family OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    profile: &'static PanelProfile,
    buffer: FrameBuffer,
    vcc: VccMode,
    state: State,
    /// Last contrast sent, replayed on wake
    contrast: u8,
    scrolling: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2cBus,
{
    /// Create a driver for a configured panel
    ///
    /// Nothing is sent until [`begin`](Self::begin).
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        Self::with_profile(
            i2c,
            config.address,
            panel::profile(config.panel),
            config.vcc,
        )
    }

    /// Create a driver from an explicit panel profile
    pub fn with_profile(
        i2c: I2C,
        address: u8,
        profile: &'static PanelProfile,
        vcc: VccMode,
    ) -> Self {
        Self {
            i2c,
            address,
            profile,
            buffer: FrameBuffer::new(profile.geometry),
            vcc,
            state: State::Uninitialized,
            contrast: boot_contrast(profile, vcc),
            scrolling: false,
        }
    }

    /// Bring the panel up with the VCC mode from the configuration
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.begin(self.vcc)
    }

    /// Replay the panel's init table, then turn the display on
    ///
    /// On a bus error the driver stays in [`State::Initializing`] and the
    /// panel is in an unknown state; call `begin` again.
    pub fn begin(&mut self, vcc: VccMode) -> Result<(), Error<I2C::Error>> {
        // The init tables never touch the scroll engine
        self.prepare_scroll()?;

        self.vcc = vcc;
        self.state = State::Initializing;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: replaying init table", self.address);

        self.commands(self.profile.init_sequence(vcc))?;
        self.send_command(cmd::DISPLAY_ON)?;

        self.contrast = boot_contrast(self.profile, vcc);
        self.state = State::On;

        #[cfg(feature = "defmt")]
        defmt::info!("ssd1306 @ {=u8:#x}: display on", self.address);

        Ok(())
    }

    /// Send one raw command byte
    ///
    /// Raw `ACTIVATE_SCROLL` / `DEACTIVATE_SCROLL` keep
    /// [`is_scrolling`](Self::is_scrolling) in step; nothing else is tracked.
    pub fn command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        self.send_command(command)?;
        match command {
            cmd::ACTIVATE_SCROLL => self.scrolling = true,
            cmd::DEACTIVATE_SCROLL => self.scrolling = false,
            _ => {}
        }
        Ok(())
    }

    /// Frame and send one byte without interpreting it
    fn send_command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        let address = self.address;
        self.i2c
            .write(address, &command_frame(command))
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("ssd1306 @ {=u8:#x}: command {=u8:#x} failed", address, command);
                Error::Transport(e)
            })
    }

    /// Send a sequence of command bytes, one transfer each
    fn commands(&mut self, commands: &[u8]) -> Result<(), Error<I2C::Error>> {
        for &c in commands {
            self.send_command(c)?;
        }
        Ok(())
    }

    /// Flush the whole framebuffer, one page per data transfer
    ///
    /// Not atomic: a bus error leaves the earlier pages already updated.
    pub fn display(&mut self) -> Result<(), Error<I2C::Error>> {
        for page in 0..self.buffer.geometry().pages() {
            self.display_page(page)?;
        }
        Ok(())
    }

    /// Flush a single page
    pub fn display_page(&mut self, page: u32) -> Result<(), Error<I2C::Error>> {
        let row = self.buffer.page(page)?;
        let len = row.len() + 1;
        let mut data = [0u8; MAX_WIDTH as usize + 1];
        data[0] = CONTROL_DATA;
        data[1..len].copy_from_slice(row);

        self.commands(&page_address(page as u8, self.profile.column_offset))?;

        let address = self.address;
        self.i2c.write(address, &data[..len]).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ssd1306 @ {=u8:#x}: page {=u32} write failed", address, page);
            Error::Transport(e)
        })
    }

    /// Set contrast (0-255)
    ///
    /// Accepts any integer; values outside `0..=255` are rejected with
    /// [`Error::InvalidArgument`] before anything is sent.
    pub fn set_contrast<V>(&mut self, value: V) -> Result<(), Error<I2C::Error>>
    where
        V: TryInto<u8>,
    {
        let contrast: u8 = value
            .try_into()
            .map_err(|_| Error::<I2C::Error>::InvalidArgument)?;
        self.send_command(cmd::SET_CONTRAST)?;
        self.send_command(contrast)?;
        self.contrast = contrast;
        Ok(())
    }

    /// Dim to zero contrast, or restore the VCC mode's normal contrast
    pub fn dim(&mut self, dim: bool) -> Result<(), Error<I2C::Error>> {
        let contrast = if dim { 0 } else { self.vcc.normal_contrast() };
        self.set_contrast(contrast)
    }

    /// Swap lit and unlit pixels in hardware
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        if inverted {
            self.send_command(cmd::INVERT_DISPLAY)
        } else {
            self.send_command(cmd::NORMAL_DISPLAY)
        }
    }

    /// Light every pixel regardless of RAM, or resume showing RAM
    pub fn set_all_on(&mut self, all_on: bool) -> Result<(), Error<I2C::Error>> {
        if all_on {
            self.send_command(cmd::DISPLAY_ALL_ON)
        } else {
            self.send_command(cmd::DISPLAY_ALL_ON_RESUME)
        }
    }

    /// Put the panel to sleep; RAM is kept
    pub fn display_off(&mut self) -> Result<(), Error<I2C::Error>> {
        if !matches!(self.state, State::On | State::Off) {
            return Err(Error::NotInitialized);
        }
        self.send_command(cmd::DISPLAY_OFF)?;
        self.state = State::Off;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: display off", self.address);

        Ok(())
    }

    /// Wake the panel, restoring the last contrast first
    pub fn display_on(&mut self) -> Result<(), Error<I2C::Error>> {
        if !matches!(self.state, State::On | State::Off) {
            return Err(Error::NotInitialized);
        }
        self.set_contrast(self.contrast)?;
        self.send_command(cmd::DISPLAY_ON)?;
        self.state = State::On;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: display on", self.address);

        Ok(())
    }

    /// Start a continuous horizontal scroll over `start_page..=end_page`
    pub fn start_horizontal_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        interval: ScrollInterval,
    ) -> Result<(), Error<I2C::Error>> {
        self.check_page_range(start_page, end_page)?;
        self.prepare_scroll()?;
        self.commands(&command::horizontal_scroll(
            direction, start_page, end_page, interval,
        ))?;
        self.scrolling = true;
        Ok(())
    }

    /// Start a combined vertical and horizontal scroll
    ///
    /// The vertical part moves `vertical_offset` rows per step within the
    /// area set by [`set_vertical_scroll_area`](Self::set_vertical_scroll_area).
    pub fn start_diagonal_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        interval: ScrollInterval,
        vertical_offset: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.check_page_range(start_page, end_page)?;
        if u32::from(vertical_offset) >= self.buffer.geometry().height() {
            return Err(Error::InvalidArgument);
        }
        self.prepare_scroll()?;
        self.commands(&command::diagonal_scroll(
            direction,
            start_page,
            end_page,
            interval,
            vertical_offset,
        ))?;
        self.scrolling = true;
        Ok(())
    }

    /// Fix `top_fixed` rows at the top and scroll the next `rows` rows
    pub fn set_vertical_scroll_area(
        &mut self,
        top_fixed: u8,
        rows: u8,
    ) -> Result<(), Error<I2C::Error>> {
        if u32::from(top_fixed) + u32::from(rows) > self.buffer.geometry().height() {
            return Err(Error::InvalidArgument);
        }
        self.commands(&[cmd::SET_VERTICAL_SCROLL_AREA, top_fixed, rows])
    }

    /// Stop any active scroll
    ///
    /// The controller's RAM is undefined after a scroll; call
    /// [`display`](Self::display) to repaint.
    pub fn stop_scroll(&mut self) -> Result<(), Error<I2C::Error>> {
        self.send_command(cmd::DEACTIVATE_SCROLL)?;
        self.scrolling = false;
        Ok(())
    }

    /// Whether a scroll is running
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Scroll parameters must not change while a scroll is active
    fn prepare_scroll(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.scrolling {
            self.stop_scroll()?;
        }
        Ok(())
    }

    fn check_page_range(&self, start_page: u8, end_page: u8) -> Result<(), Error<I2C::Error>> {
        let pages = self.buffer.geometry().pages();
        if start_page > end_page || u32::from(end_page) >= pages {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Framebuffer contents
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Framebuffer for drawing; changes reach the panel on the next flush
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Last contrast sent (or set by the init table)
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// VCC mode used at bring-up
    pub fn vcc(&self) -> VccMode {
        self.vcc
    }

    /// 7-bit bus address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Panel profile in use
    pub fn profile(&self) -> &'static PanelProfile {
        self.profile
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Contrast the init table leaves the panel at
fn boot_contrast(profile: &PanelProfile, vcc: VccMode) -> u8 {
    profile
        .boot_contrast(vcc)
        .unwrap_or(vcc.normal_contrast())
}
