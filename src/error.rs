//! Error types with fix suggestions
//!
//! Lookups never fail: a missing key or a wrong leaf type is `None`.
//! These errors cover the edges only (building a `Map` from untyped input,
//! reading documents, loading config).

use thiserror::Error;

pub type Result<T, E = NestedError> = std::result::Result<T, E>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum NestedError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Input errors (NESTED-010 to NESTED-011)
    // ─────────────────────────────────────────────────────────────

    #[error("NESTED-010: Input is not a JSON object (got {found})")]
    InvalidInput { found: &'static str },

    #[error("NESTED-011: No path given")]
    MissingPath,

    // ─────────────────────────────────────────────────────────────
    // Timestamp layout errors (NESTED-020)
    // ─────────────────────────────────────────────────────────────

    #[error("NESTED-020: Invalid timestamp layout '{layout}': {reason}")]
    Layout { layout: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Config errors (NESTED-030)
    // ─────────────────────────────────────────────────────────────

    #[error("NESTED-030: Config error: {reason}")]
    ConfigError { reason: String },
}

impl FixSuggestion for NestedError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            NestedError::Json(_) => Some("Check the document is valid JSON (try parsing with jq)"),
            NestedError::Io(_) => Some("Check file path and permissions"),
            NestedError::InvalidInput { .. } => {
                Some("Wrap the document in an object: lookups start from a JSON object")
            }
            NestedError::MissingPath => Some("Pass a dot path such as advert.contact.name"),
            NestedError::Layout { .. } => {
                Some("Use rfc3339, rfc2822, ansic or a strftime format like %d/%m/%Y")
            }
            NestedError::ConfigError { .. } => Some("Fix or remove ~/.config/nested/config.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_suggestion() {
        let errors = [
            NestedError::InvalidInput { found: "array" },
            NestedError::MissingPath,
            NestedError::Layout {
                layout: "%Q".into(),
                reason: "bad".into(),
            },
            NestedError::ConfigError {
                reason: "bad".into(),
            },
            NestedError::Io(std::io::Error::other("boom")),
        ];
        for error in &errors {
            assert!(error.fix_suggestion().is_some(), "{error}");
        }
    }

    #[test]
    fn messages_carry_codes() {
        let err = NestedError::InvalidInput { found: "array" };
        assert_eq!(
            err.to_string(),
            "NESTED-010: Input is not a JSON object (got array)"
        );
        assert!(NestedError::MissingPath.to_string().starts_with("NESTED-011"));
    }
}
