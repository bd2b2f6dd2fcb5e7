//! Dot path expressions
//!
//! `advert.status.ttl` → ["advert", "status", "ttl"]
//!
//! No array indices, no wildcards, no `$` root marker: a segment is whatever
//! sits between two dots, matched literally against map keys.

use std::fmt;

/// A parsed dot path, borrowed from the input string
///
/// Always holds at least one segment. The empty path is a single empty
/// segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathExpr<'a> {
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the path parsed from `""`, a single empty segment
    pub fn is_blank(&self) -> bool {
        self.segments == [""]
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.segments.len()
    }
}

impl fmt::Display for PathExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
