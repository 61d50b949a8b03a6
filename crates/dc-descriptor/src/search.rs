//! Catalog search
//!
//! Searching is just enumeration with a predicate, so the catalog stays
//! reachable only through a cursor.

use tracing::debug;

use crate::catalog::DescriptorIterator;
use crate::descriptor::Descriptor;
use crate::error::DcError;
use crate::family::Family;
use crate::iterator::DcIterator;

/// Criteria for [`search`]; `None` fields match every descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// `"<vendor> <product>"` or just the product, ignoring case
    pub name: Option<&'a str>,
    pub family: Option<Family>,
    pub model: Option<u32>,
}

impl<'a> Query<'a> {
    pub fn by_name(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_model(mut self, model: u32) -> Self {
        self.model = Some(model);
        self
    }

    /// Returns true if `descriptor` satisfies every criterion
    pub fn matches(&self, descriptor: &Descriptor) -> bool {
        self.name.is_none_or(|n| name_matches(n, descriptor))
            && self.family.is_none_or(|f| f == descriptor.family())
            && self.model.is_none_or(|m| m == descriptor.model())
    }
}

fn name_matches(name: &str, descriptor: &Descriptor) -> bool {
    let name = name.trim();
    if name.eq_ignore_ascii_case(descriptor.product()) {
        return true;
    }

    // "<vendor> <product>", where the vendor itself may contain spaces
    let vendor = descriptor.vendor();
    match (name.get(..vendor.len()), name.get(vendor.len()..)) {
        (Some(head), Some(tail)) => {
            head.eq_ignore_ascii_case(vendor)
                && tail
                    .strip_prefix(' ')
                    .is_some_and(|p| p.trim_start().eq_ignore_ascii_case(descriptor.product()))
        }
        _ => false,
    }
}

/// Cursor over the descriptors matching `query`
pub fn filter(query: Query<'_>) -> impl DcIterator<Item = &'static Descriptor> + '_ {
    DescriptorIterator::new().filter(move |d: &&'static Descriptor| query.matches(d))
}

/// First descriptor in catalog order matching `query`
pub fn search(query: Query<'_>) -> Result<Option<&'static Descriptor>, DcError> {
    let found = filter(query).advance()?;
    match found {
        Some(d) => debug!(
            "Found {} {} ({}, model 0x{:X})",
            d.vendor(),
            d.product(),
            d.family(),
            d.model()
        ),
        None => debug!("No descriptor matches {:?}", query),
    }
    Ok(found)
}
