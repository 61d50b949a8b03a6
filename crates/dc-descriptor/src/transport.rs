//! Transport classification
//!
//! Maps a device family to the physical link needed to reach it. Only a
//! handful of families need something other than a serial line.

use std::fmt;
use std::str::FromStr;

use crate::family::Family;

/// Physical or link-layer channel used to talk to a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Transport {
    /// No transport (absent descriptor)
    None,
    /// Serial line, including USB-serial adapters
    Serial,
    /// Raw USB bulk transfers
    Usb,
    /// USB human interface device
    UsbHid,
    /// Infrared (IrDA)
    Irda,
}

/// Error returned when a transport name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport: {0}")]
pub struct UnknownTransport(pub String);

impl Transport {
    /// Short lowercase name of the transport
    pub fn name(&self) -> &'static str {
        match self {
            Transport::None => "none",
            Transport::Serial => "serial",
            Transport::Usb => "usb",
            Transport::UsbHid => "usbhid",
            Transport::Irda => "irda",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transport {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Transport::None),
            "serial" => Ok(Transport::Serial),
            "usb" => Ok(Transport::Usb),
            "usbhid" | "usb-hid" | "hid" => Ok(Transport::UsbHid),
            "irda" | "infrared" => Ok(Transport::Irda),
            _ => Err(UnknownTransport(s.to_string())),
        }
    }
}

impl Family {
    /// Transport required to reach devices of this family
    ///
    /// Everything not listed explicitly talks over a serial line.
    pub fn transport(&self) -> Transport {
        match self {
            Family::AtomicsCobalt => Transport::Usb,
            Family::SuuntoEonSteel | Family::UwatecG2 => Transport::UsbHid,
            Family::UwatecSmart => Transport::Irda,
            _ => Transport::Serial,
        }
    }
}
