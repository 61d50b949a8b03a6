//! Command-line definitions

use clap::{Parser, Subcommand};
use dc_descriptor::{Family, Transport};

use crate::error::ToolError;
use crate::settings::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "dctool")]
#[command(about = "Browse the catalog of supported dive computers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the settings file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported devices
    List {
        /// Only devices from this vendor (case-insensitive)
        #[arg(long)]
        vendor: Option<String>,

        /// Only devices of this family (backend name such as `vyper`)
        #[arg(long)]
        family: Option<Family>,

        /// Only devices reached over this transport
        #[arg(long)]
        transport: Option<Transport>,
    },

    /// Find the first device matching a name
    Search {
        /// "<vendor> <product>" or just the product
        name: String,

        /// Restrict to this family
        #[arg(long)]
        family: Option<Family>,

        /// Restrict to this model number (decimal or 0x hex)
        #[arg(long, value_parser = parse_model)]
        model: Option<u32>,
    },

    /// List device families with their transport
    Families,

    /// Show which optional transports this build supports
    Capabilities,

    /// Show the effective settings
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Parse a model number in decimal or `0x`-prefixed hex
pub fn parse_model(s: &str) -> Result<u32, ToolError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| ToolError::InvalidModel(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use proptest::prelude::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_model() {
        assert_eq!(parse_model("10").unwrap(), 10);
        assert_eq!(parse_model("0x0A").unwrap(), 10);
        assert_eq!(parse_model("0X4342").unwrap(), 0x4342);
        assert!(matches!(parse_model("ten"), Err(ToolError::InvalidModel(_))));
        assert!(parse_model("0x").is_err());
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "dctool",
            "list",
            "--family",
            "eonsteel",
            "--transport",
            "usbhid",
        ])
        .unwrap();

        match cli.command {
            Command::List {
                family, transport, ..
            } => {
                assert_eq!(family, Some(Family::SuuntoEonSteel));
                assert_eq!(transport, Some(Transport::UsbHid));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_family_rejected() {
        let err = Cli::try_parse_from(["dctool", "list", "--family", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown family: bogus"));
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let err = Cli::try_parse_from(["dctool", "list", "--transport", "bluetooth"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    proptest! {
        #[test]
        fn parse_model_accepts_decimal_and_hex(n in any::<u32>()) {
            prop_assert_eq!(parse_model(&n.to_string()).unwrap(), n);
            prop_assert_eq!(parse_model(&format!("0x{:X}", n)).unwrap(), n);
            prop_assert_eq!(parse_model(&format!("0x{:x}", n)).unwrap(), n);
        }

        #[test]
        fn parse_model_rejects_overflow(n in (u32::MAX as u64 + 1)..=u64::MAX) {
            prop_assert!(parse_model(&n.to_string()).is_err());
        }
    }
}
