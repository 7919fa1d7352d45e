//! Command implementations

pub mod completions;
pub mod resolve;
pub mod scan;
