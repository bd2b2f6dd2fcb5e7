//! Path resolution over a `Map`
//!
//! Walks one segment per map level:
//! - missing key → not found
//! - map on the last segment → that map
//! - map before the last segment → descend
//! - string or integer at any depth → that leaf, even with segments left
//! - anything else (array, float, bool, null) → not found
//!
//! The leaf short-circuit is the default (`Mode::Lenient`). `Mode::Strict`
//! only accepts a leaf on the last segment.

use tracing::trace;

use crate::path::PathExpr;
use crate::value::{Map, NestedValue};

/// How to treat a leaf reached before the path is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Return the leaf, ignoring the remaining segments
    #[default]
    Lenient,
    /// Every segment must be consumed
    Strict,
}

/// Resolve `path` against `root` with the lenient leaf rule
pub fn resolve<'a>(path: &str, root: &'a Map) -> Option<&'a NestedValue> {
    resolve_with(path, root, Mode::Lenient)
}

/// Resolve `path` against `root`
///
/// The returned reference always points into `root`; nothing is copied or
/// synthesized.
pub fn resolve_with<'a>(path: &str, root: &'a Map, mode: Mode) -> Option<&'a NestedValue> {
    let expr = PathExpr::parse(path);
    if expr.is_blank() {
        return None;
    }

    let mut current = root;
    for (index, segment) in expr.segments().iter().enumerate() {
        let Some(value) = current.get(segment) else {
            trace!(path, segment, "segment not found");
            return None;
        };

        match value {
            NestedValue::Map(inner) => {
                if expr.is_last(index) {
                    return Some(value);
                }
                current = inner;
            }
            NestedValue::String(_) | NestedValue::Integer(_) => {
                if !expr.is_last(index) {
                    if mode == Mode::Strict {
                        trace!(path, segment, "leaf before end of path (strict)");
                        return None;
                    }
                    trace!(path, segment, "leaf before end of path, short-circuit");
                }
                return Some(value);
            }
            NestedValue::Other(_) => {
                trace!(path, segment, kind = value.kind(), "cannot traverse");
                return None;
            }
        }
    }

    None
}
