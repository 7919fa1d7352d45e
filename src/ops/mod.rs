//! High-level operations.
//!
//! This module contains the implementation of Stevedore commands.

pub mod discover;
pub mod report;
pub mod resolve;

pub use discover::discover_packages;
pub use report::{install_command, report_entries, InstallVerbs, ReportEntry};
pub use resolve::resolve_closure;
