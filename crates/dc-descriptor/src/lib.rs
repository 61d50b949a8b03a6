//! Dive Computer Descriptor Catalog
//!
//! This crate answers two questions about dive computers without ever
//! touching hardware: which models are supported, and how would you reach
//! one of them.
//!
//! - **Catalog**: a compiled-in, read-only list of [`Descriptor`]s
//!   (vendor, product, [`Family`], family-scoped model number)
//! - **Enumeration**: the catalog is only reachable through a cursor
//!   implementing the generic [`DcIterator`] protocol
//! - **Transport**: every family maps to the [`Transport`] it needs
//!   (serial, USB, USB-HID or infrared)
//!
//! Rows needing an optional backend are compiled in only when the build
//! provides it; see [`Capabilities`].
//!
//! # Example
//!
//! ```rust
//! use dc_descriptor::{DcIterator, DescriptorIterator, Transport};
//!
//! let mut cursor = DescriptorIterator::new();
//! while let Some(descriptor) = cursor.advance().unwrap() {
//!     if descriptor.vendor() == "Suunto" && descriptor.product() == "Vyper" {
//!         assert_eq!(descriptor.model(), 0x0A);
//!         assert_eq!(descriptor.transport(), Transport::Serial);
//!     }
//! }
//! ```

pub mod capabilities;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod family;
pub mod iterator;
pub mod search;
pub mod transport;

pub use capabilities::{capabilities, Capabilities};
pub use catalog::{descriptor_iterator, descriptors, DescriptorIterator};
pub use descriptor::{transport, Descriptor, DescriptorHandle};
pub use error::{DcError, Status};
pub use family::{Family, UnknownFamily};
pub use iterator::{release, BoxedIterator, DcIterator, Filter, Items};
pub use search::{search, Query};
pub use transport::{Transport, UnknownTransport};
