//! Device descriptors
//!
//! A descriptor names one supported device model. Descriptors only ever
//! live in the static catalog; callers get `&'static` views into it.

use crate::family::Family;
use crate::transport::Transport;

/// Identification record of one supported device model
///
/// `model` is only meaningful within its family, and several rebranded
/// products can share the same `(family, model)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    vendor: &'static str,
    product: &'static str,
    family: Family,
    model: u32,
    serial: u32,
}

impl Descriptor {
    /// Catalog entries never carry a serial number
    pub(crate) const fn new(
        vendor: &'static str,
        product: &'static str,
        family: Family,
        model: u32,
    ) -> Self {
        Self {
            vendor,
            product,
            family,
            model,
            serial: 0,
        }
    }

    /// Manufacturer name, e.g. `"Suunto"`
    pub fn vendor(&self) -> &'static str {
        self.vendor
    }

    /// Model name as marketed, e.g. `"Vyper"`
    pub fn product(&self) -> &'static str {
        self.product
    }

    /// Protocol family the device belongs to
    pub fn family(&self) -> Family {
        self.family
    }

    /// Family-specific model number
    pub fn model(&self) -> u32 {
        self.model
    }

    /// Always zero for catalog entries
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Physical link used to reach the device, derived from its family
    ///
    /// ```
    /// use dc_descriptor::{search, Family, Query, Transport};
    ///
    /// let vyper = search(Query::by_name("Suunto Vyper")).unwrap().unwrap();
    /// assert_eq!(vyper.family(), Family::SuuntoVyper);
    /// assert_eq!(vyper.transport(), Transport::Serial);
    /// ```
    pub fn transport(&self) -> Transport {
        self.family.transport()
    }
}

/// Null-safe descriptor accessors
///
/// Implemented for `Option<&Descriptor>` so an absent handle yields a
/// documented default instead of an error: `None` text, `Family::Null`,
/// zero numbers and `Transport::None`.
pub trait DescriptorHandle {
    fn vendor(&self) -> Option<&'static str>;
    fn product(&self) -> Option<&'static str>;
    fn family(&self) -> Family;
    fn model(&self) -> u32;
    fn serial(&self) -> u32;
    fn transport(&self) -> Transport;
}

impl DescriptorHandle for Option<&Descriptor> {
    fn vendor(&self) -> Option<&'static str> {
        self.map(Descriptor::vendor)
    }

    fn product(&self) -> Option<&'static str> {
        self.map(Descriptor::product)
    }

    fn family(&self) -> Family {
        self.map_or(Family::Null, Descriptor::family)
    }

    fn model(&self) -> u32 {
        self.map_or(0, Descriptor::model)
    }

    fn serial(&self) -> u32 {
        self.map_or(0, Descriptor::serial)
    }

    fn transport(&self) -> Transport {
        self.map_or(Transport::None, Descriptor::transport)
    }
}

/// Transport of a possibly absent descriptor
pub fn transport(descriptor: Option<&Descriptor>) -> Transport {
    descriptor.transport()
}
