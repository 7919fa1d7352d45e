//! Resolution state - the dependency closure and the pending worklist.
//!
//! Both types live for exactly one resolution run. The closure grows
//! monotonically; the worklist accepts each ref at most once.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::core::PackageRef;

/// Mapping from each reachable package to its directly declared dependency
/// names.
///
/// A ref appears as a key at most once. Entries are kept in path order so
/// that iteration, and therefore reporting, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    entries: BTreeMap<PackageRef, BTreeSet<String>>,
}

impl Closure {
    /// Create an empty closure.
    pub fn new() -> Self {
        Closure {
            entries: BTreeMap::new(),
        }
    }

    /// Whether the package has already been recorded.
    pub fn contains(&self, pkg: &PackageRef) -> bool {
        self.entries.contains_key(pkg)
    }

    /// Record a package's declared dependency names.
    ///
    /// If the package is already present the names are unioned into the
    /// existing set, so recording never loses information.
    pub fn insert(&mut self, pkg: PackageRef, names: BTreeSet<String>) {
        self.entries.entry(pkg).or_default().extend(names);
    }

    /// The declared names for a recorded package.
    pub fn get(&self, pkg: &PackageRef) -> Option<&BTreeSet<String>> {
        self.entries.get(pkg)
    }

    /// Number of recorded packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageRef, &BTreeSet<String>)> {
        self.entries.iter()
    }
}

/// FIFO queue of packages pending inspection, with an explicit seen-set
/// dedup guard.
///
/// A ref is accepted at most once across the lifetime of the worklist,
/// whether it is still pending or already popped. This is what bounds the
/// traversal and guarantees termination on cyclic dependency graphs.
#[derive(Debug, Default)]
pub struct Worklist {
    queue: VecDeque<PackageRef>,
    seen: HashSet<PackageRef>,
}

impl Worklist {
    /// Create an empty worklist.
    pub fn new() -> Self {
        Worklist {
            queue: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Create a worklist from a seed set, deduplicating it.
    pub fn from_seeds(seeds: impl IntoIterator<Item = PackageRef>) -> Self {
        let mut worklist = Worklist::new();
        for seed in seeds {
            worklist.push(seed);
        }
        worklist
    }

    /// Enqueue a package unless it was already accepted at any point.
    ///
    /// Returns whether the package was actually enqueued.
    pub fn push(&mut self, pkg: PackageRef) -> bool {
        if self.seen.contains(&pkg) {
            return false;
        }
        self.seen.insert(pkg.clone());
        self.queue.push_back(pkg);
        true
    }

    /// Dequeue the next pending package.
    pub fn pop(&mut self) -> Option<PackageRef> {
        self.queue.pop_front()
    }

    /// Number of pending packages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether any packages are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(path: &str) -> PackageRef {
        PackageRef::from_path(path).unwrap()
    }

    #[test]
    fn test_worklist_fifo_order() {
        let mut wl = Worklist::new();
        wl.push(pkg("/repo/a.deb"));
        wl.push(pkg("/repo/b.rpm"));
        wl.push(pkg("/repo/c.deb"));

        assert_eq!(wl.pop(), Some(pkg("/repo/a.deb")));
        assert_eq!(wl.pop(), Some(pkg("/repo/b.rpm")));
        assert_eq!(wl.pop(), Some(pkg("/repo/c.deb")));
        assert_eq!(wl.pop(), None);
    }

    #[test]
    fn test_worklist_rejects_duplicates() {
        let mut wl = Worklist::new();
        assert!(wl.push(pkg("/repo/a.deb")));
        assert!(!wl.push(pkg("/repo/a.deb")));
        assert_eq!(wl.len(), 1);

        // Still rejected after the ref has been popped.
        wl.pop();
        assert!(!wl.push(pkg("/repo/a.deb")));
        assert!(wl.is_empty());
    }

    #[test]
    fn test_from_seeds_dedups() {
        let wl = Worklist::from_seeds(vec![
            pkg("/repo/a.deb"),
            pkg("/repo/b.rpm"),
            pkg("/repo/a.deb"),
        ]);
        assert_eq!(wl.len(), 2);
    }

    #[test]
    fn test_closure_insert_unions() {
        let mut closure = Closure::new();
        closure.insert(pkg("/repo/a.deb"), ["libc6".to_string()].into());
        closure.insert(pkg("/repo/a.deb"), ["zlib1g".to_string()].into());

        let names = closure.get(&pkg("/repo/a.deb")).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("libc6"));
        assert!(names.contains("zlib1g"));
        assert_eq!(closure.len(), 1);
    }

    #[test]
    fn test_closure_iterates_in_path_order() {
        let mut closure = Closure::new();
        closure.insert(pkg("/repo/b.rpm"), BTreeSet::new());
        closure.insert(pkg("/repo/a.deb"), BTreeSet::new());

        let keys: Vec<_> = closure.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(keys, vec![pkg("/repo/a.deb"), pkg("/repo/b.rpm")]);
    }
}
