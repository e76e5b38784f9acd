use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{Error, Result};

/// Serialize `value` as pretty-printed JSON (4-space indent) and write it
/// to `path`.
///
/// The parent directory must already exist; provision it first with
/// [`create_directories`](crate::workspace::create_directories). The write
/// replaces any previous file wholesale and is not atomic, so concurrent
/// writers race and the last one wins.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|source| Error::JsonSerialize {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, &buf).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = buf.len(), "json artifact saved");
    Ok(())
}

/// Read a JSON artifact back into a deserializable type.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: T = serde_json::from_str(&raw).map_err(|source| Error::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "json artifact loaded");
    Ok(value)
}

/// Encode `value` with bincode and write it to `path`.
///
/// For artifacts where fidelity beats readability (encoders, fitted
/// scalers, model state). Same write discipline as [`save_json`]: parent
/// must exist, replacement is wholesale and non-atomic.
pub fn save_bin<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let buf = bincode::serialize(value).map_err(|source| Error::BinEncode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, &buf).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = buf.len(), "binary artifact saved");
    Ok(())
}

/// Read a bincode artifact back into a deserializable type.
pub fn load_bin<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: T = bincode::deserialize(&raw).map_err(|source| Error::BinDecode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "binary artifact loaded");
    Ok(value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
