//! Parsing raw inspector output into dependency name sets.
//!
//! Parsing is pure: the resulting set is a function of the input text alone.
//! Version constraints, operators, and boolean alternatives are stripped -
//! only bare package names survive.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::PackageFormat;

/// A requires line: a bare, optionally hyphen-segmented identifier, followed
/// by an optional `= version` clause. Anything else (comments, blank lines,
/// file paths, parenthesised capabilities) is skipped.
static REQUIRES_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.+]+(?:-[A-Za-z0-9_.+]+)*)\s*(?:=\s*\S.*)?$")
        .expect("requires-line pattern is valid")
});

/// Parse raw inspector output for the given format into a set of bare
/// dependency names.
pub fn dependencies(raw: &str, format: PackageFormat) -> BTreeSet<String> {
    match format {
        PackageFormat::Deb => parse_depends(raw),
        PackageFormat::Rpm => parse_requires(raw),
    }
}

/// `dpkg-deb -I` output: lines carrying the `Depends:` field contribute
/// their comma-separated entries, each entry's first whitespace-delimited
/// token taken as the bare name.
fn parse_depends(raw: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for line in raw.lines() {
        let Some(rest) = line.trim_start().strip_prefix("Depends:") else {
            continue;
        };
        for entry in rest.split(',') {
            if let Some(name) = entry.split_whitespace().next() {
                names.insert(name.to_string());
            }
        }
    }
    names
}

/// `rpm -qpR` output: one capability per line; only bare package-name lines
/// are kept.
fn parse_requires(raw: &str) -> BTreeSet<String> {
    raw.lines()
        .filter_map(|line| {
            REQUIRES_LINE
                .captures(line.trim())
                .map(|caps| caps[1].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_depends_strips_version_constraints() {
        let raw = " Depends: libc6 (>= 2.15), libssl1.1";
        assert_eq!(
            dependencies(raw, PackageFormat::Deb),
            set(&["libc6", "libssl1.1"])
        );
    }

    #[test]
    fn test_depends_takes_first_alternative() {
        let raw = " Depends: debconf (>= 0.5) | debconf-2.0, libgcc-s1\n";
        assert_eq!(
            dependencies(raw, PackageFormat::Deb),
            set(&["debconf", "libgcc-s1"])
        );
    }

    #[test]
    fn test_depends_ignores_other_fields() {
        let raw = concat!(
            " new Debian package, version 2.0.\n",
            " Package: curl\n",
            " Pre-Depends: dpkg (>= 1.17)\n",
            " Depends: libcurl4 (= 8.5.0-2), zlib1g\n",
            " Recommends: ca-certificates\n",
        );
        assert_eq!(
            dependencies(raw, PackageFormat::Deb),
            set(&["libcurl4", "zlib1g"])
        );
    }

    #[test]
    fn test_depends_empty_when_field_absent() {
        let raw = " Package: tiny\n Architecture: all\n";
        assert!(dependencies(raw, PackageFormat::Deb).is_empty());
    }

    #[test]
    fn test_requires_strips_version_clause_and_comments() {
        let raw = "glibc = 2.17\n#comment\nopenssl";
        assert_eq!(
            dependencies(raw, PackageFormat::Rpm),
            set(&["glibc", "openssl"])
        );
    }

    #[test]
    fn test_requires_skips_non_name_lines() {
        let raw = concat!(
            "/bin/sh\n",
            "rpmlib(CompressedFileNames) <= 3.0.4-1\n",
            "libc.so.6(GLIBC_2.4)(64bit)\n",
            "\n",
            "bash-completion\n",
            "zlib = 1.2.11\n",
        );
        assert_eq!(
            dependencies(raw, PackageFormat::Rpm),
            set(&["bash-completion", "zlib"])
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "zlib\nglibc = 2.17\nzlib\n";
        let first = dependencies(raw, PackageFormat::Rpm);
        let second = dependencies(raw, PackageFormat::Rpm);
        assert_eq!(first, second);
        assert_eq!(first, set(&["glibc", "zlib"]));
    }
}
