use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Line that pip requirement files use to install the surrounding project
/// itself in editable mode. It refers to the local checkout rather than a
/// package, so dependency listings drop it.
pub const EDITABLE_INSTALL_SENTINEL: &str = "-e .";

/// Read a pip-style requirements file and return its lines, minus every
/// line that is exactly [`EDITABLE_INSTALL_SENTINEL`].
///
/// No other interpretation happens: comments, version pins, and blank
/// lines pass through untouched, and a sentinel with stray whitespace is
/// treated as an ordinary requirement. Line order is preserved.
pub fn get_requirements(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let requirements: Vec<String> = raw
        .lines()
        .filter(|line| *line != EDITABLE_INSTALL_SENTINEL)
        .map(str::to_owned)
        .collect();
    info!(
        path = %path.display(),
        count = requirements.len(),
        "requirements manifest parsed"
    );
    Ok(requirements)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
