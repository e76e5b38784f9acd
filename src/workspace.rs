use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Record of a provisioned workspace: the configuration it was derived
/// from and the directories that were requested. Saved next to the tree
/// (as JSON) so a later run can audit or rebuild it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldManifest {
    /// Configuration file the directory list came from.
    pub config: PathBuf,
    /// Directories requested, in provisioning order.
    pub directories: Vec<PathBuf>,
}

/// Create each directory in `paths`, parents included.
///
/// Existing directories are left untouched, so repeated runs converge on
/// the same tree. Paths are processed in order and the first failure
/// aborts the walk; directories created before it stay on disk. With
/// `verbose` set, every path is logged whether it already existed or not.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|source| Error::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
        if verbose {
            info!(path = %path.display(), "created directory");
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
