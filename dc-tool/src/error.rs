//! Error types for dctool

use thiserror::Error;

/// Errors reported by the command-line tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// Catalog enumeration failed
    #[error("catalog error: {0}")]
    Catalog(#[from] dc_descriptor::DcError),

    /// Model number is neither decimal nor 0x-prefixed hex
    #[error("invalid model number: {0}")]
    InvalidModel(String),

    /// Settings path couldn't be determined
    #[error("could not determine settings path")]
    NoSettingsPath,

    /// Reading or writing the settings file failed
    #[error("settings I/O error on {path}: {source}")]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
