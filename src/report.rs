//! Lookup report for the CLI
//!
//! Runs the raw, string, integer and timestamp accessors against one path
//! and collects every outcome, found or not, into a serializable report.

use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;

use crate::accessor::time_of;
use crate::layout::{TimeLayout, Timestamp};
use crate::resolve::Mode;
use crate::value::{Map, NestedValue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub result: Value,
    pub found: bool,
}

impl Outcome {
    fn new(result: impl Into<Value>, found: bool) -> Self {
        Self {
            result: result.into(),
            found,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Results {
    pub interface: Outcome,
    pub string: Outcome,
    pub int: Outcome,
    pub time: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupReport {
    pub field: String,
    pub data: Map,
    pub results: Results,
}

impl LookupReport {
    /// Build a report for `field` against `data`
    ///
    /// Misses carry the zero value of their type (null, "", 0, Unix epoch).
    pub fn build(field: &str, data: Map, layout: &TimeLayout, mode: Mode) -> Self {
        let raw = data.value_with(field, mode);

        let interface = match raw {
            Some(v) => Outcome::new(v.clone(), true),
            None => Outcome::new(Value::Null, false),
        };
        let string = match raw.and_then(NestedValue::as_str) {
            Some(s) => Outcome::new(s, true),
            None => Outcome::new("", false),
        };
        let int = match raw.and_then(NestedValue::as_i64) {
            Some(n) => Outcome::new(n, true),
            None => Outcome::new(0, false),
        };
        let time = match time_of(raw, layout) {
            Some(ts) => Outcome::new(format_time(&ts), true),
            None => Outcome::new(format_time(&Timestamp::default()), false),
        };

        Self {
            field: field.to_string(),
            results: Results {
                interface,
                string,
                int,
                time,
            },
            data,
        }
    }
}

/// RFC 3339 with `Z` for UTC and fractional seconds only when present
fn format_time(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
