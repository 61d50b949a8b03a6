//! dctool - browse the supported dive computer catalog
//!
//! Lists, filters and searches the descriptors compiled into
//! `dc-descriptor`. Nothing here talks to a device.

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dc_descriptor::Query;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use commands::ListFilter;
use error::ToolError;
use settings::Settings;

const DEFAULT_FILTER: &str = "dctool=info,dc_descriptor=info";
const VERBOSE_FILTER: &str = "dctool=debug,dc_descriptor=debug";

fn init_logging(cli: &Cli, settings: &Settings) {
    // RUST_LOG wins, then --verbose, then the settings file
    let fallback = if cli.verbose {
        VERBOSE_FILTER.to_string()
    } else {
        settings
            .log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli, settings: Settings) -> Result<ExitCode, ToolError> {
    let format = cli.format.unwrap_or(settings.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List {
            vendor,
            family,
            transport,
        } => {
            let filter = ListFilter {
                vendor,
                family,
                transport,
            };
            commands::list(&mut out, &filter, format, &settings)?;
        }
        Command::Search {
            name,
            family,
            model,
        } => {
            let query = Query {
                name: Some(name.as_str()),
                family,
                model,
            };
            if !commands::search_device(&mut out, query, format, &settings)? {
                tracing::warn!("No device matches \"{}\"", name);
                return Ok(ExitCode::from(1));
            }
        }
        Command::Families => commands::families(&mut out, format)?,
        Command::Capabilities => commands::show_capabilities(&mut out, format)?,
        Command::Config { save } => {
            let effective = Settings { format, ..settings };
            commands::config(&mut out, &effective, save)?;
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();
    init_logging(&cli, &settings);

    tracing::debug!("Settings: {:?}", settings);

    match run(cli, settings) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
