//! Stevedore - dependency closure inspection for binary package archives.
//!
//! This crate provides the core library functionality for Stevedore:
//! discovering `.deb` and `.rpm` archives, extracting their declared
//! dependency lists through external inspection tools, and resolving the
//! transitive dependency closure.

pub mod core;
pub mod inspect;
pub mod locate;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Stevedore unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording mock inspector and fixture
/// helpers for fake tool output and archive trees.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{Closure, PackageFormat, PackageRef, UnsupportedFormatError, Worklist};
pub use inspect::{ContainerInspector, Inspect, InspectError, LocalInspector};
pub use locate::{Locate, NullLocator, TableLocator};
pub use util::Shell;
