//! Direct-subprocess archive inspection.

use std::path::PathBuf;

use crate::core::{PackageFormat, PackageRef};
use crate::inspect::{Inspect, InspectError};
use crate::util::process::{find_executable, ProcessBuilder};

/// Inspector that runs the format's inspection tool as a local subprocess.
///
/// `deb` archives are queried with `dpkg-deb -I`, `rpm` archives with
/// `rpm -qpR`. Only the tool's standard output is consumed; the rpm tool's
/// diagnostic stream is discarded outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalInspector;

impl LocalInspector {
    /// Create a new local inspector.
    pub fn new() -> Self {
        LocalInspector
    }

    fn tool_name(format: PackageFormat) -> &'static str {
        match format {
            PackageFormat::Deb => "dpkg-deb",
            PackageFormat::Rpm => "rpm",
        }
    }

    fn builder_for(program: PathBuf, pkg: &PackageRef) -> ProcessBuilder {
        match pkg.format() {
            PackageFormat::Deb => ProcessBuilder::new(program).arg("-I").arg(pkg.path()),
            PackageFormat::Rpm => ProcessBuilder::new(program)
                .arg("-qpR")
                .arg(pkg.path())
                .discard_stderr(),
        }
    }
}

impl Inspect for LocalInspector {
    fn inspect(&self, pkg: &PackageRef) -> Result<String, InspectError> {
        let tool = Self::tool_name(pkg.format());
        let program = find_executable(tool).ok_or_else(|| InspectError::ToolNotFound {
            tool: tool.to_string(),
        })?;

        let builder = Self::builder_for(program, pkg);
        tracing::debug!(command = %builder.display_command(), "inspecting archive");

        let output = builder.exec().map_err(|e| InspectError::Launch {
            command: builder.display_command(),
            source: e.into(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(InspectError::CommandFailed {
                command: builder.display_command(),
                code: output.status.code(),
                output: stdout,
            });
        }

        Ok(stdout)
    }
}
