//! Archive discovery.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::{PackageFormat, PackageRef};

/// Recursively collect all `.deb` and `.rpm` archives under `root`.
///
/// Files with any other extension are ignored. Results are sorted by path
/// so the seed set, and everything derived from it, is deterministic.
pub fn discover_packages(root: &Path) -> Result<Vec<PackageRef>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("failed to traverse {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(format) = PackageFormat::detect(path) {
            tracing::debug!(path = %path.display(), %format, "discovered package archive");
            found.push(PackageRef::from_path(path).with_context(|| {
                format!("failed to reference archive {}", path.display())
            })?);
        }
    }

    found.sort();
    Ok(found)
}
