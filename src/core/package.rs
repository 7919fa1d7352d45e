//! Package archive identification - WHICH archive (path + format).
//!
//! PackageRef identifies one archive under inspection. The file path is the
//! unique key; the format is derived from the file extension exactly once,
//! when the ref is created.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Binary package archive format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageFormat {
    /// Debian binary archive (`.deb`)
    Deb,
    /// RPM binary archive (`.rpm`)
    Rpm,
}

impl PackageFormat {
    /// Detect the format from a file extension, if it is a recognized one.
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("deb") => Some(PackageFormat::Deb),
            Some("rpm") => Some(PackageFormat::Rpm),
            _ => None,
        }
    }

    /// The file extension for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            PackageFormat::Deb => "deb",
            PackageFormat::Rpm => "rpm",
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A path with neither recognized package extension reached format-sensitive
/// code. Signals a caller or configuration mistake, not a bad archive.
#[derive(Debug, Error)]
#[error("unsupported package format: `{}` (expected a `.deb` or `.rpm` archive)", .path.display())]
pub struct UnsupportedFormatError {
    pub path: PathBuf,
}

/// A reference to one package archive on disk.
///
/// Immutable once created. Ordered and hashed by path so that closures and
/// reports are deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    path: PathBuf,
    format: PackageFormat,
}

impl PackageRef {
    /// Create a ref from a path, deriving the format from its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, UnsupportedFormatError> {
        let path = path.into();
        match PackageFormat::detect(&path) {
            Some(format) => Ok(PackageRef { path, format }),
            None => Err(UnsupportedFormatError { path }),
        }
    }

    /// The archive's path (the unique key).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The archive's format.
    pub fn format(&self) -> PackageFormat {
        self.format
    }

    /// The archive's file name, as seen from inside a mounted container.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// The directory containing the archive (the bind-mount source).
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl PartialOrd for PackageRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .cmp(&other.path)
            .then_with(|| self.format.cmp(&other.format))
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            PackageFormat::detect(Path::new("/repo/curl_8.5.0_amd64.deb")),
            Some(PackageFormat::Deb)
        );
        assert_eq!(
            PackageFormat::detect(Path::new("pkgs/glibc-2.17.x86_64.rpm")),
            Some(PackageFormat::Rpm)
        );
        assert_eq!(PackageFormat::detect(Path::new("notes.txt")), None);
        assert_eq!(PackageFormat::detect(Path::new("no_extension")), None);
    }

    #[test]
    fn test_from_path_unsupported() {
        let err = PackageRef::from_path("/repo/archive.tar.gz").unwrap_err();
        assert!(err.to_string().contains("archive.tar.gz"));
        assert!(err.to_string().contains("unsupported package format"));
    }

    #[test]
    fn test_ref_accessors() {
        let pkg = PackageRef::from_path("/repo/nested/curl.deb").unwrap();
        assert_eq!(pkg.format(), PackageFormat::Deb);
        assert_eq!(pkg.file_name(), "curl.deb");
        assert_eq!(pkg.parent_dir(), Path::new("/repo/nested"));
    }

    #[test]
    fn test_ordering_by_path() {
        let a = PackageRef::from_path("/repo/a.rpm").unwrap();
        let b = PackageRef::from_path("/repo/b.deb").unwrap();
        assert!(a < b);
    }
}
