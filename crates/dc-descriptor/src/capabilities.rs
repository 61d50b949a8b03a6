//! Build-time transport capabilities
//!
//! Resolved by the build script from Cargo features and the target OS.
//! Catalog rows that need a missing backend are compiled out.

use crate::transport::Transport;

/// Transport backends available in this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capabilities {
    /// USB bulk transfers (libusb)
    pub usb: bool,
    /// USB HID (libusb outside macOS, or hidapi)
    pub usb_hid: bool,
    /// Platform infrared stack
    pub irda: bool,
}

impl Capabilities {
    /// Capabilities this crate was compiled with
    pub const CURRENT: Capabilities = Capabilities {
        usb: cfg!(dc_usb),
        usb_hid: cfg!(dc_usbhid),
        irda: cfg!(dc_irda),
    };

    /// Returns true if devices using `transport` can be listed in this build
    pub fn supports(&self, transport: Transport) -> bool {
        match transport {
            Transport::None => false,
            Transport::Serial => true,
            Transport::Usb => self.usb,
            Transport::UsbHid => self.usb_hid,
            Transport::Irda => self.irda,
        }
    }
}

/// Capabilities this crate was compiled with
pub fn capabilities() -> Capabilities {
    Capabilities::CURRENT
}
