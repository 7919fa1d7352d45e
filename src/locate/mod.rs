//! Mapping declared dependency names back to archive files.
//!
//! A locator answers one question: given a bare dependency name, which known
//! archive provides it? "Not found" is an expected outcome, not an error -
//! the resolution engine simply stops traversing that edge.

use std::collections::HashMap;

use crate::core::PackageRef;

/// Maps a declared dependency name to a concrete archive, if known.
pub trait Locate {
    /// Resolve `name` against the known package universe.
    fn locate(&self, name: &str) -> Option<PackageRef>;
}

/// Locator that knows no packages.
///
/// With this locator the traversal never expands beyond the seed set: every
/// declared name is recorded in the closure but maps to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocator;

impl NullLocator {
    /// Create a new null locator.
    pub fn new() -> Self {
        NullLocator
    }
}

impl Locate for NullLocator {
    fn locate(&self, _name: &str) -> Option<PackageRef> {
        None
    }
}

/// Pure prebuilt name-to-archive mapping.
///
/// How the mapping is populated is up to the caller - typically an index
/// built from each archive's own embedded package name. The locator itself
/// holds no other state and can be swapped freely in tests.
#[derive(Debug, Clone, Default)]
pub struct TableLocator {
    entries: HashMap<String, PackageRef>,
}

impl TableLocator {
    /// Create an empty table.
    pub fn new() -> Self {
        TableLocator {
            entries: HashMap::new(),
        }
    }

    /// Build a table from `(name, archive)` pairs. Later pairs win.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (impl Into<String>, PackageRef)>,
    ) -> Self {
        let mut table = TableLocator::new();
        for (name, pkg) in entries {
            table.insert(name, pkg);
        }
        table
    }

    /// Map `name` to `pkg`.
    pub fn insert(&mut self, name: impl Into<String>, pkg: PackageRef) {
        self.entries.insert(name.into(), pkg);
    }

    /// Number of known names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table knows any names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Locate for TableLocator {
    fn locate(&self, name: &str) -> Option<PackageRef> {
        self.entries.get(name).cloned()
    }
}
