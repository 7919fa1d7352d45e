//! Container-isolated archive inspection.
//!
//! Runs the same inspection commands as the local variant, but inside an
//! ephemeral named container with the archive's directory bind-mounted
//! read-only at a fixed internal path. The container is created, started,
//! awaited, its logs captured, and removed unconditionally - teardown
//! happens on every exit path.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::{PackageFormat, PackageRef};
use crate::inspect::{Inspect, InspectError};
use crate::util::process::{find_executable, ProcessBuilder};

/// Default image expected to carry both `dpkg-deb` and `rpm`.
pub const DEFAULT_IMAGE: &str = "dependency-extractor:latest";

/// Path at which the archive's directory is mounted inside the container.
pub const MOUNT_POINT: &str = "/packages";

/// Inspector that runs the inspection tool inside an ephemeral container.
#[derive(Debug)]
pub struct ContainerInspector {
    docker: PathBuf,
    image: String,
    name_prefix: String,
    sequence: AtomicU64,
}

impl ContainerInspector {
    /// Create a container inspector using the given image and name prefix.
    ///
    /// Fails if no container runtime CLI is available on PATH.
    pub fn new(
        image: impl Into<String>,
        name_prefix: impl Into<String>,
    ) -> Result<Self, InspectError> {
        let docker = find_executable("docker").ok_or_else(|| InspectError::ToolNotFound {
            tool: "docker".to_string(),
        })?;

        Ok(ContainerInspector {
            docker,
            image: image.into(),
            name_prefix: name_prefix.into(),
            sequence: AtomicU64::new(0),
        })
    }

    /// Unique per-invocation container name.
    ///
    /// A fixed name would collide when a previous run's container has not
    /// been reaped yet.
    fn next_name(&self) -> String {
        format!(
            "{}-{}-{}",
            self.name_prefix,
            std::process::id(),
            self.sequence.fetch_add(1, Ordering::Relaxed)
        )
    }
}

/// The inspection command as seen from inside the container.
fn inner_command(pkg: &PackageRef) -> Vec<String> {
    let mounted = format!("{}/{}", MOUNT_POINT, pkg.file_name());
    match pkg.format() {
        PackageFormat::Deb => vec!["dpkg-deb".to_string(), "-I".to_string(), mounted],
        PackageFormat::Rpm => vec!["rpm".to_string(), "-qpR".to_string(), mounted],
    }
}

/// Run one docker CLI invocation; non-zero exit is a plumbing failure.
fn run_docker(builder: &ProcessBuilder) -> Result<Output, InspectError> {
    let output = builder.exec().map_err(|e| InspectError::Launch {
        command: builder.display_command(),
        source: e.into(),
    })?;

    if !output.status.success() {
        return Err(InspectError::CommandFailed {
            command: builder.display_command(),
            code: output.status.code(),
            output: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output)
}

impl Inspect for ContainerInspector {
    fn inspect(&self, pkg: &PackageRef) -> Result<String, InspectError> {
        let name = self.next_name();
        let command = inner_command(pkg);
        let mount = format!("{}:{}:ro", pkg.parent_dir().display(), MOUNT_POINT);

        tracing::debug!(container = %name, command = %command.join(" "), "inspecting archive");

        run_docker(
            &ProcessBuilder::new(&self.docker)
                .args(["create", "--name", name.as_str(), "-v", mount.as_str()])
                .arg(&self.image)
                .args(&command),
        )?;
        let _guard = ContainerGuard {
            docker: self.docker.as_path(),
            name: &name,
        };

        run_docker(&ProcessBuilder::new(&self.docker).args(["start", name.as_str()]))?;

        let wait = ProcessBuilder::new(&self.docker).args(["wait", name.as_str()]);
        let wait_out = run_docker(&wait)?;
        let wait_text = String::from_utf8_lossy(&wait_out.stdout).into_owned();
        let code: i32 =
            wait_text
                .trim()
                .parse()
                .map_err(|_| InspectError::CommandFailed {
                    command: wait.display_command(),
                    code: None,
                    output: wait_text.clone(),
                })?;

        let logs = run_docker(&ProcessBuilder::new(&self.docker).args(["logs", name.as_str()]))?;
        let output = String::from_utf8_lossy(&logs.stdout).into_owned();

        if code != 0 {
            return Err(InspectError::CommandFailed {
                command: format!("{} (container {})", command.join(" "), name),
                code: Some(code),
                output,
            });
        }

        Ok(output)
    }
}

/// Removes the named container when dropped, on success and failure alike.
struct ContainerGuard<'a> {
    docker: &'a Path,
    name: &'a str,
}

impl Drop for ContainerGuard<'_> {
    fn drop(&mut self) {
        // Teardown is best-effort: there is nothing actionable left to do
        // with a container that refuses to be removed.
        let _ = ProcessBuilder::new(self.docker)
            .args(["rm", "-f", self.name])
            .exec();
    }
}
