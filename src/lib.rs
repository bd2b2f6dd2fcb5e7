//! Nested - typed dot-path lookups into JSON documents
//!
//! ```
//! use nested::Map;
//!
//! let doc = Map::from_json(r#"{"advert": {"status": {"ttl": 60, "code": "active"}}}"#).unwrap();
//! assert_eq!(doc.int("advert.status.ttl"), Some(60));
//! assert_eq!(doc.string("advert.status.code"), Some("active"));
//! assert_eq!(doc.string("advert.status.ttl"), None);
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod layout;
pub mod path;
pub mod report;
pub mod resolve;
pub mod value;

pub use accessor::{
    get_int, get_string, get_sub_from_string, get_time, get_value, int, string, sub_from_string,
    time, value,
};
pub use config::NestedConfig;
pub use error::{FixSuggestion, NestedError, Result};
pub use layout::{TimeLayout, Timestamp};
pub use path::PathExpr;
pub use report::LookupReport;
pub use resolve::{resolve, resolve_with, Mode};
pub use value::{Map, NestedValue};
