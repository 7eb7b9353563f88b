use std::cmp::Ordering;
use std::path::Path;

use crate::core::models::package::HEADER_BYTES;
use crate::core::services::package_codec;
use crate::core::traits::archive::CommentReader;

/// Version freshness and header-vs-payload binding checks.
pub struct VersionGate<'a, C: CommentReader> {
    comments: &'a C,
}

/// Compare two dotted version strings.
///
/// Segments split on `.`, `-` and `_`. A pair of numeric segments
/// compares numerically, anything else lexicographically, and a missing
/// segment counts as "0", so "0.10.0" beats "0.9.9" and "1.0" equals
/// "1.0.0".
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split(['.', '-', '_']).collect();
    let right: Vec<&str> = b.split(['.', '-', '_']).collect();

    for i in 0..left.len().max(right.len()) {
        let x = left.get(i).copied().unwrap_or("0");
        let y = right.get(i).copied().unwrap_or("0");
        let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
            (Ok(nx), Ok(ny)) => nx.cmp(&ny),
            _ => x.cmp(y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Is `candidate` strictly newer than `current`?
pub fn is_newer(current: &str, candidate: &str) -> bool {
    compare_versions(current, candidate) == Ordering::Less
}

impl<'a, C: CommentReader> VersionGate<'a, C> {
    pub fn new(comments: &'a C) -> Self {
        Self { comments }
    }

    /// The version declared in the package header, or "" when the file
    /// is missing, truncated, or carries no version.
    pub fn extract_version(&self, path: &Path) -> String {
        package_codec::read_version_from_file(path)
    }

    /// The version the payload embeds in its own archive metadata, if
    /// the payload is a readable archive with a comment.
    pub fn embedded_version(&self, path: &Path) -> Option<String> {
        self.comments.read_comment(path, HEADER_BYTES as u64).ok()
    }

    /// Does the payload's embedded version match `expected` byte for
    /// byte?
    ///
    /// This is deliberately redundant with the signature covering the
    /// header: it catches packages whose payload was built from
    /// different source data than the header claims. Any read error is
    /// a failed check.
    pub fn check_version_binding(&self, path: &Path, expected: &str) -> bool {
        match self.embedded_version(path) {
            Some(embedded) => embedded == expected,
            None => false,
        }
    }
}
