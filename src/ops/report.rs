//! Closure reporting and install-command derivation.
//!
//! The report lists, for every package in the closure, its identity, its
//! declared dependency names, and a package-manager install command. The
//! command's arguments are the dependency *names*, never the resolved
//! archive paths - name-based resolution against the system repositories is
//! delegated to the invoked package manager.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::core::{Closure, PackageFormat};

/// Install verbs per package family.
#[derive(Debug, Clone)]
pub struct InstallVerbs {
    /// Debian-family installer invocation.
    pub deb: String,
    /// RPM-family installer invocation.
    pub rpm: String,
}

impl Default for InstallVerbs {
    fn default() -> Self {
        InstallVerbs {
            deb: "apt-get install -y".to_string(),
            rpm: "dnf install -y".to_string(),
        }
    }
}

impl InstallVerbs {
    fn for_format(&self, format: PackageFormat) -> &str {
        match format {
            PackageFormat::Deb => &self.deb,
            PackageFormat::Rpm => &self.rpm,
        }
    }
}

/// One reportable closure entry.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Archive path (the package's identity).
    pub package: PathBuf,
    /// Archive format.
    pub format: PackageFormat,
    /// Declared dependency names, sorted.
    pub dependencies: Vec<String>,
    /// Derived install invocation.
    pub install_command: String,
}

/// Derive the install command for one package.
pub fn install_command(format: PackageFormat, names: &[String], verbs: &InstallVerbs) -> String {
    let verb = verbs.for_format(format);
    if names.is_empty() {
        verb.to_string()
    } else {
        format!("{} {}", verb, names.join(" "))
    }
}

/// Flatten a closure into report entries, in path order.
pub fn report_entries(closure: &Closure, verbs: &InstallVerbs) -> Vec<ReportEntry> {
    closure
        .iter()
        .map(|(pkg, names)| {
            let dependencies: Vec<String> = names.iter().cloned().collect();
            let install_command = install_command(pkg.format(), &dependencies, verbs);
            ReportEntry {
                package: pkg.path().to_path_buf(),
                format: pkg.format(),
                dependencies,
                install_command,
            }
        })
        .collect()
}

/// Render entries as text: three lines per package, a blank line between
/// packages.
pub fn render_text(entries: &[ReportEntry], writer: &mut impl Write) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "Package: {}", entry.package.display())?;
        if entry.dependencies.is_empty() {
            writeln!(writer, "Dependencies:")?;
        } else {
            writeln!(writer, "Dependencies: {}", entry.dependencies.join(", "))?;
        }
        writeln!(writer, "Install: {}", entry.install_command)?;
    }
    Ok(())
}

/// Render entries as a JSON array.
pub fn render_json(entries: &[ReportEntry], writer: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer)?;
    Ok(())
}
