//! Archive inspection - extracting raw dependency metadata from archives.
//!
//! An inspector runs the format's inspection tool against one archive and
//! returns the tool's raw standard output. Two interchangeable
//! implementations exist: [`LocalInspector`] runs the tool as a direct
//! subprocess, [`ContainerInspector`] runs it inside an ephemeral container
//! with the archive's directory mounted read-only.

mod container;
mod local;
pub mod parse;

use thiserror::Error;

use crate::core::PackageRef;
use crate::util::diagnostic::{suggestions, Diagnostic};

pub use container::{ContainerInspector, DEFAULT_IMAGE, MOUNT_POINT};
pub use local::LocalInspector;

/// Raw-text extraction from one package archive.
pub trait Inspect {
    /// Run the inspection tool for `pkg` and return its captured stdout.
    ///
    /// Any failure is fatal to the resolution run: there are no retries and
    /// a single unreadable archive aborts dependency extraction.
    fn inspect(&self, pkg: &PackageRef) -> Result<String, InspectError>;
}

/// Error during archive inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("inspection tool `{tool}` not found in PATH")]
    ToolNotFound { tool: String },

    #[error("failed to launch `{command}`")]
    Launch {
        command: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("`{command}` failed with exit code {code:?}\n{output}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

impl InspectError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            InspectError::ToolNotFound { tool } => {
                Diagnostic::error(format!("inspection tool `{}` not found in PATH", tool))
                    .with_suggestion(suggestions::TOOL_MISSING)
            }

            InspectError::Launch { command, source } => {
                Diagnostic::error(format!("failed to launch `{}`", command))
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::CONTAINER_RUNTIME)
            }

            InspectError::CommandFailed {
                command,
                code,
                output,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "`{}` failed with exit code {}",
                    command,
                    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
                ));

                for line in output.lines().filter(|l| !l.trim().is_empty()) {
                    diag = diag.with_context(line.to_string());
                }

                diag.with_suggestion(suggestions::INSPECTION_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display_carries_command_and_output() {
        let err = InspectError::CommandFailed {
            command: "dpkg-deb -I /repo/broken.deb".to_string(),
            code: Some(2),
            output: "dpkg-deb: error: archive magic mismatch".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("dpkg-deb -I /repo/broken.deb"));
        assert!(msg.contains("exit code Some(2)"));
        assert!(msg.contains("archive magic mismatch"));
    }

    #[test]
    fn test_tool_not_found_diagnostic() {
        let err = InspectError::ToolNotFound {
            tool: "rpm".to_string(),
        };

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("error: inspection tool `rpm` not found"));
        assert!(output.contains("help"));
    }

    #[test]
    fn test_command_failed_diagnostic_includes_tool_output() {
        let err = InspectError::CommandFailed {
            command: "rpm -qpR /repo/bad.rpm".to_string(),
            code: Some(1),
            output: "error: open of /repo/bad.rpm failed\n".to_string(),
        };

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("rpm -qpR /repo/bad.rpm"));
        assert!(output.contains("open of /repo/bad.rpm failed"));
    }
}
