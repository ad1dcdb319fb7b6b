//! Error types emitted by the velomap CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use velomap_core::{GeoPointError, ParseSortError};
use velomap_data::LoadError;

/// Errors emitted by the velomap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Only one of latitude and longitude was supplied.
    #[error("--lat and --lng must be given together")]
    IncompleteCoordinates,
    /// The supplied position is not on the globe.
    #[error("invalid user position: {0}")]
    InvalidCoordinates(#[source] GeoPointError),
    /// An entry of the radius ladder is not a number.
    #[error("invalid search radius {value:?} in --radii")]
    InvalidRadius {
        /// Offending entry.
        value: String,
    },
    /// The sort key or direction is unknown.
    #[error(transparent)]
    InvalidSort(#[from] ParseSortError),
    /// A snapshot could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Serialising the listing failed.
    #[error("failed to serialise listing: {0}")]
    SerialiseListing(#[source] serde_json::Error),
    /// Writing the listing to standard output failed.
    #[error("failed to write listing: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the listing to a file failed.
    #[error("failed to write listing to {path:?}: {source}")]
    WriteOutputFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
