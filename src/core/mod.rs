//! Core data structures for Stevedore.
//!
//! This module contains the foundational types used throughout Stevedore:
//! - Archive identity (PackageRef, PackageFormat)
//! - Resolution state (Closure, Worklist)

pub mod closure;
pub mod package;

pub use closure::{Closure, Worklist};
pub use package::{PackageFormat, PackageRef, UnsupportedFormatError};
