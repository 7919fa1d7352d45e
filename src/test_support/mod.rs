//! Test utilities and mocks for Stevedore unit tests.
//!
//! Provides a recording mock inspector plus fixture helpers that fabricate
//! realistic inspection-tool output and on-disk archive trees.
//!
//! # Example
//!
//! ```rust,ignore
//! use stevedore::test_support::{deb_info, MockInspector};
//!
//! let inspector = MockInspector::new()
//!     .with_output("/repo/curl.deb", deb_info(&["libc6", "libcurl4"]));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::PackageRef;
use crate::inspect::{Inspect, InspectError};

/// Scripted outcome for one archive.
#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Failure(String),
}

/// Mock inspector with scripted per-archive outcomes and recorded calls.
///
/// Inspecting an archive with no scripted outcome fails, so a test cannot
/// silently traverse further than it expected.
#[derive(Debug, Default)]
pub struct MockInspector {
    scripted: HashMap<PathBuf, Scripted>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockInspector {
    /// Create a new mock inspector with no scripted outcomes.
    pub fn new() -> Self {
        MockInspector {
            scripted: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script successful inspection output for an archive.
    pub fn with_output(mut self, path: impl AsRef<Path>, raw: impl Into<String>) -> Self {
        self.scripted.insert(
            path.as_ref().to_path_buf(),
            Scripted::Output(raw.into()),
        );
        self
    }

    /// Script a non-zero tool exit for an archive, with the given captured
    /// output.
    pub fn with_failure(mut self, path: impl AsRef<Path>, output: impl Into<String>) -> Self {
        self.scripted.insert(
            path.as_ref().to_path_buf(),
            Scripted::Failure(output.into()),
        );
        self
    }

    /// All archives that were inspected, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Inspect for MockInspector {
    fn inspect(&self, pkg: &PackageRef) -> Result<String, InspectError> {
        self.calls.lock().unwrap().push(pkg.path().to_path_buf());

        match self.scripted.get(pkg.path()) {
            Some(Scripted::Output(raw)) => Ok(raw.clone()),
            Some(Scripted::Failure(output)) => Err(InspectError::CommandFailed {
                command: format!("mock inspect {}", pkg),
                code: Some(1),
                output: output.clone(),
            }),
            None => Err(InspectError::CommandFailed {
                command: format!("mock inspect {}", pkg),
                code: None,
                output: "no scripted outcome for this archive".to_string(),
            }),
        }
    }
}

/// Fabricate `dpkg-deb -I` output declaring the given dependency names.
pub fn deb_info(names: &[&str]) -> String {
    let mut out = String::from(
        " new Debian package, version 2.0.\n Package: fixture\n Architecture: amd64\n",
    );
    if !names.is_empty() {
        out.push_str(&format!(" Depends: {}\n", names.join(", ")));
    }
    out.push_str(" Description: test fixture package\n");
    out
}

/// Fabricate `rpm -qpR` output declaring the given dependency names.
pub fn rpm_requires(names: &[&str]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Create empty archive files with the given names under `dir`.
pub fn touch_archives(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, b"").expect("failed to write fixture archive");
            path
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PackageFormat;
    use crate::inspect::parse;

    #[test]
    fn test_mock_inspector_records_calls() {
        let inspector = MockInspector::new().with_output("/repo/a.deb", deb_info(&[]));
        let pkg = PackageRef::from_path("/repo/a.deb").unwrap();

        inspector.inspect(&pkg).unwrap();
        inspector.inspect(&pkg).unwrap();

        assert_eq!(inspector.calls().len(), 2);
    }

    #[test]
    fn test_mock_inspector_unscripted_archive_fails() {
        let inspector = MockInspector::new();
        let pkg = PackageRef::from_path("/repo/surprise.rpm").unwrap();

        let err = inspector.inspect(&pkg).unwrap_err();
        assert!(err.to_string().contains("no scripted outcome"));
    }

    #[test]
    fn test_fixture_output_parses_back() {
        let raw = deb_info(&["libc6", "zlib1g"]);
        let names = parse::dependencies(&raw, PackageFormat::Deb);
        assert_eq!(names.len(), 2);
        assert!(names.contains("libc6"));

        let raw = rpm_requires(&["glibc", "openssl"]);
        let names = parse::dependencies(&raw, PackageFormat::Rpm);
        assert_eq!(names.len(), 2);
        assert!(names.contains("openssl"));
    }
}
