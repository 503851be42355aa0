//! Error types produced by the configuration loader.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration.
///
/// Default application and flattening are total over well-formed trees and
/// never fail, and accessor type mismatches degrade to zero values rather
/// than erroring, so neither appears here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration source could not be opened or read.
    #[error("configuration source '{path}' is unavailable: {source}")]
    Source {
        /// Path of the unreachable file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The comment-stripped byte stream was not a valid JSON object.
    #[error("failed to parse configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// The decoded JSON was incompatible with the caller's target structure.
    ///
    /// Only the typed decode path produces this; callers must not rely on
    /// which fields were populated before the mismatch surfaced.
    #[error("failed to decode configuration into the target structure: {0}")]
    Decode(#[source] serde_json::Error),
}
