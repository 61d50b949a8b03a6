//! Subcommand implementations

use std::io::Write;

use dc_descriptor::{
    capabilities, search, DcIterator, Descriptor, DescriptorIterator, Family, Query, Transport,
};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::output::{self, DeviceRow, FamilyRow};
use crate::settings::{OutputFormat, Settings};

/// Filters for `dctool list`, AND-combined
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub vendor: Option<String>,
    pub family: Option<Family>,
    pub transport: Option<Transport>,
}

impl ListFilter {
    fn matches(&self, d: &Descriptor) -> bool {
        self.vendor
            .as_deref()
            .is_none_or(|v| v.eq_ignore_ascii_case(d.vendor()))
            && self.family.is_none_or(|f| f == d.family())
            && self.transport.is_none_or(|t| t == d.transport())
    }
}

/// Collect the catalog rows matching `filter`
pub fn collect_devices(filter: &ListFilter) -> Result<Vec<DeviceRow>, ToolError> {
    let mut cursor = DescriptorIterator::new().filter(|d| filter.matches(d));
    let mut rows = Vec::new();
    while let Some(d) = cursor.advance()? {
        rows.push(DeviceRow::from(d));
    }
    debug!("{} device(s) match {:?}", rows.len(), filter);
    Ok(rows)
}

/// One row per family with its number of catalog entries
pub fn collect_families() -> Result<Vec<FamilyRow>, ToolError> {
    let mut counts = [0usize; Family::ALL.len()];
    let mut cursor = DescriptorIterator::new();
    while let Some(d) = cursor.advance()? {
        if let Some(i) = Family::ALL.iter().position(|f| *f == d.family()) {
            counts[i] += 1;
        }
    }

    Ok(Family::ALL
        .iter()
        .zip(counts)
        .map(|(family, entries)| FamilyRow {
            family: *family,
            name: family.name(),
            backend: family.backend_name().unwrap_or_default(),
            code: family.code(),
            transport: family.transport(),
            entries,
        })
        .collect())
}

pub fn list<W: Write>(
    out: &mut W,
    filter: &ListFilter,
    format: OutputFormat,
    settings: &Settings,
) -> Result<(), ToolError> {
    let rows = collect_devices(filter)?;
    if rows.is_empty() {
        info!("No devices match");
    }
    output::write_devices(out, &rows, format, settings.show_hex_models)
}

/// Returns `Ok(false)` when nothing matched
pub fn search_device<W: Write>(
    out: &mut W,
    query: Query<'_>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<bool, ToolError> {
    match search(query)? {
        Some(d) => {
            output::write_devices(out, &[DeviceRow::from(d)], format, settings.show_hex_models)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn families<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), ToolError> {
    let rows = collect_families()?;
    output::write_families(out, &rows, format)
}

pub fn show_capabilities<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), ToolError> {
    output::write_capabilities(out, &capabilities(), format)
}

pub fn config<W: Write>(out: &mut W, settings: &Settings, save: bool) -> Result<(), ToolError> {
    if save {
        let path = settings.save()?;
        info!("Settings written to {}", path.display());
    }
    match Settings::settings_path() {
        Some(path) => writeln!(out, "# {}", path.display())?,
        None => writeln!(out, "# (no settings path)")?,
    }
    serde_json::to_writer_pretty(&mut *out, settings)?;
    writeln!(out)?;
    Ok(())
}
