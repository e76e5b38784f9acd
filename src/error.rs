use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by scaffold-ml operations.
///
/// One variant per failure class, each carrying the path or key it
/// happened on. Nothing is caught, retried, or downgraded inside the
/// crate; every failure propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be opened or read (missing file,
    /// permission denied, ...).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file is not valid YAML, or does not match the
    /// shape requested by a typed loader.
    #[error("invalid YAML in {}: {source}", path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A dotted configuration key is absent from the document.
    #[error("configuration key `{key}` not found in {origin}")]
    KeyMissing { key: String, origin: String },

    /// A configuration subtree exists but cannot be mapped onto the
    /// requested type.
    #[error("configuration value at `{key}` in {origin} is invalid: {source}")]
    InvalidValue {
        key: String,
        origin: String,
        source: serde_yaml::Error,
    },

    /// A directory (or one of its parents) could not be created, e.g.
    /// permission denied or a path component is an existing file.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An artifact could not be written to its destination, e.g. the
    /// parent directory is missing or not writable.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The value handed to [`save_json`](crate::artifact::save_json) is
    /// not representable as JSON (e.g. a map keyed by non-strings).
    #[error("cannot serialize JSON artifact {}: {source}", path.display())]
    JsonSerialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A JSON artifact exists but does not parse, or does not match the
    /// requested type.
    #[error("invalid JSON artifact {}: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A value could not be bincode-encoded.
    #[error("cannot encode binary artifact {}: {source}", path.display())]
    BinEncode {
        path: PathBuf,
        source: bincode::Error,
    },

    /// A binary artifact exists but does not decode as the requested
    /// type.
    #[error("invalid binary artifact {}: {source}", path.display())]
    BinDecode {
        path: PathBuf,
        source: bincode::Error,
    },
}
