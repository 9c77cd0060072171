//! Errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that may occur while loading a configuration.
///
/// Toast lifecycle operations themselves never fail; see the crate docs.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration isn’t valid TOML or doesn’t match the expected shape.
    #[error("could not parse toast configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("could not read {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    /// A color string is neither a hex color nor a known color name.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A numeric setting is out of range.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
