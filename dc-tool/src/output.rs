//! Rendering of catalog listings

use std::io::Write;

use dc_descriptor::{Capabilities, Descriptor, Family, Transport};
use serde::Serialize;

use crate::error::ToolError;
use crate::settings::OutputFormat;

/// One listed device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRow {
    pub vendor: &'static str,
    pub product: &'static str,
    pub family: Family,
    pub model: u32,
    pub transport: Transport,
}

impl From<&Descriptor> for DeviceRow {
    fn from(d: &Descriptor) -> Self {
        Self {
            vendor: d.vendor(),
            product: d.product(),
            family: d.family(),
            model: d.model(),
            transport: d.transport(),
        }
    }
}

/// One listed family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyRow {
    pub family: Family,
    pub name: &'static str,
    pub backend: &'static str,
    pub code: u32,
    pub transport: Transport,
    pub entries: usize,
}

fn model_string(model: u32, hex: bool) -> String {
    if hex {
        format!("0x{:X}", model)
    } else {
        model.to_string()
    }
}

pub fn write_devices<W: Write>(
    out: &mut W,
    rows: &[DeviceRow],
    format: OutputFormat,
    hex_models: bool,
) -> Result<(), ToolError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let name_width = rows
                .iter()
                .map(|r| r.vendor.len() + 1 + r.product.len())
                .max()
                .unwrap_or(0);
            for r in rows {
                let name = format!("{} {}", r.vendor, r.product);
                writeln!(
                    out,
                    "{:<name_width$}  {:<26}  {:>8}  {}",
                    name,
                    r.family.name(),
                    model_string(r.model, hex_models),
                    r.transport,
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_families<W: Write>(
    out: &mut W,
    rows: &[FamilyRow],
    format: OutputFormat,
) -> Result<(), ToolError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for r in rows {
                writeln!(
                    out,
                    "{:<12} 0x{:08X}  {:<26}  {:<7} {:>3}",
                    r.backend, r.code, r.name, r.transport, r.entries
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_capabilities<W: Write>(
    out: &mut W,
    caps: &Capabilities,
    format: OutputFormat,
) -> Result<(), ToolError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, caps)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let yes_no = |b: bool| if b { "yes" } else { "no" };
            writeln!(out, "usb:    {}", yes_no(caps.usb))?;
            writeln!(out, "usbhid: {}", yes_no(caps.usb_hid))?;
            writeln!(out, "irda:   {}", yes_no(caps.irda))?;
        }
    }
    Ok(())
}
