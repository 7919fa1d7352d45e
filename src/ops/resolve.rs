//! Transitive dependency-closure resolution.
//!
//! The engine drives a worklist over package archives: each dequeued
//! archive is inspected exactly once, its declared dependency names are
//! recorded, and every name the locator can map to a known archive is
//! queued for inspection in turn. Termination is guaranteed because the
//! worklist accepts each archive at most once and the package universe the
//! locator can return is finite.

use anyhow::{Context, Result};

use crate::core::{Closure, PackageRef, Worklist};
use crate::inspect::{parse, Inspect};
use crate::locate::Locate;
use crate::util::shell::Status;
use crate::util::Shell;

/// Resolve the dependency closure of a seed set of package archives.
///
/// One blocking inspection runs per iteration; any inspection failure is
/// fatal and discards the partially built closure. Dependency names the
/// locator cannot map are recorded but do not expand the traversal.
///
/// The returned closure maps each reachable archive to its *direct*
/// declared dependency names.
pub fn resolve_closure(
    seeds: Vec<PackageRef>,
    inspector: &dyn Inspect,
    locator: &dyn Locate,
    shell: &Shell,
) -> Result<Closure> {
    let mut closure = Closure::new();
    let mut worklist = Worklist::from_seeds(seeds);

    while let Some(pkg) = worklist.pop() {
        // Reprocessing a recorded archive is a no-op.
        if closure.contains(&pkg) {
            continue;
        }

        shell.status(Status::Inspecting, &pkg);
        let raw = inspector
            .inspect(&pkg)
            .with_context(|| format!("failed to extract dependencies from {}", pkg))?;
        let names = parse::dependencies(&raw, pkg.format());
        tracing::debug!(package = %pkg, count = names.len(), "parsed dependency names");

        for name in &names {
            let Some(dep) = locator.locate(name) else {
                tracing::debug!(%name, "dependency does not map to a known archive");
                continue;
            };
            if !closure.contains(&dep) {
                worklist.push(dep);
            }
        }

        closure.insert(pkg, names);
    }

    Ok(closure)
}
