use std::any::type_name;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::info;

use crate::error::{Error, Result};

/// A parsed YAML configuration document.
///
/// Values are reached either dynamically, through [`get`](Self::get) and
/// the typed getters (dotted keys, e.g. `"model.name"`), or statically, by
/// mapping the document or a subtree onto a `Deserialize` struct with
/// [`deserialize`](Self::deserialize) / [`deserialize_at`](Self::deserialize_at).
/// The document is plain data: nothing here caches, mutates, or watches
/// the underlying file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    root: Value,
    origin: Option<PathBuf>,
}

impl ConfigValue {
    /// Wrap an already-parsed YAML value, e.g. one assembled in memory or
    /// received from another subsystem.
    pub fn from_value(root: Value) -> Self {
        ConfigValue { root, origin: None }
    }

    fn with_origin(root: Value, origin: &Path) -> Self {
        ConfigValue {
            root,
            origin: Some(origin.to_path_buf()),
        }
    }

    /// The file this document was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    fn origin_label(&self) -> String {
        match &self.origin {
            Some(path) => path.display().to_string(),
            None => "inline configuration".to_string(),
        }
    }

    /// YAML node kind of the document root (`"mapping"`, `"sequence"`,
    /// `"string"`, ...).
    pub fn kind(&self) -> &'static str {
        value_kind(&self.root)
    }

    /// Borrow the underlying YAML value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume the wrapper, returning the document.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Look up a value by dotted key.
    ///
    /// Each segment indexes a mapping by string key; a segment that parses
    /// as an integer also indexes into a sequence (`"layers.0.units"`).
    /// Returns `None` as soon as any segment is absent or the current node
    /// is a scalar. Keys containing literal dots are not addressable this
    /// way; use [`as_value`](Self::as_value) and walk manually.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in key.split('.') {
            current = match current {
                Value::Mapping(_) => current.get(segment)?,
                Value::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// [`get`](Self::get) narrowed to a string scalar.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// [`get`](Self::get) narrowed to an integer scalar.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// [`get`](Self::get) narrowed to a float scalar (integers widen).
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// [`get`](Self::get) narrowed to a boolean scalar.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Like [`get`](Self::get), but an absent key is an error naming the
    /// key and the file it was expected in.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::KeyMissing {
            key: key.to_string(),
            origin: self.origin_label(),
        })
    }

    /// Map the whole document onto a deserializable type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(self.root.clone()).map_err(|source| Error::InvalidValue {
            key: ".".to_string(),
            origin: self.origin_label(),
            source,
        })
    }

    /// Map the subtree at a dotted key onto a deserializable type.
    pub fn deserialize_at<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.require(key)?;
        serde_yaml::from_value(value.clone()).map_err(|source| Error::InvalidValue {
            key: key.to_string(),
            origin: self.origin_label(),
            source,
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Read a YAML configuration file.
///
/// Any valid YAML document is accepted; no schema is imposed here (that is
/// the caller's business). An empty file parses to the null document, on
/// which every lookup returns `None`. Each call re-reads the file.
pub fn read_yaml(path: &Path) -> Result<ConfigValue> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let root: Value = serde_yaml::from_str(&raw).map_err(|source| Error::YamlParse {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = ConfigValue::with_origin(root, path);
    info!(path = %path.display(), kind = doc.kind(), "loaded yaml configuration");
    Ok(doc)
}

/// Read a YAML configuration file straight into a typed struct.
///
/// The compile-time counterpart of [`read_yaml`]: plain field access
/// replaces dotted lookup, and a document that does not match `T`'s shape
/// surfaces as [`Error::YamlParse`].
pub fn read_yaml_as<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: T = serde_yaml::from_str(&raw).map_err(|source| Error::YamlParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), ty = type_name::<T>(), "loaded yaml configuration");
    Ok(parsed)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
