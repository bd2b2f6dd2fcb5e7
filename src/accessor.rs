//! Typed accessors over resolved values
//!
//! Each accessor resolves the path, then narrows the value to the requested
//! type. A wrong type is the same as a missing value: `None`. There is no
//! coercion between strings and integers.
//!
//! Every `Option` accessor has a `get_*` twin returning the zero value
//! instead of `None`.

use tracing::debug;

use crate::layout::{TimeLayout, Timestamp};
use crate::resolve::{self, Mode};
use crate::value::{Map, NestedValue};

static NO_VALUE: NestedValue = NestedValue::Other(serde_json::Value::Null);

impl Map {
    /// Raw value at `path`
    pub fn value(&self, path: &str) -> Option<&NestedValue> {
        resolve::resolve(path, self)
    }

    /// Raw value at `path` under an explicit resolution mode
    pub fn value_with(&self, path: &str, mode: Mode) -> Option<&NestedValue> {
        resolve::resolve_with(path, self, mode)
    }

    /// Raw value, or a JSON null marker when absent
    pub fn get_value(&self, path: &str) -> &NestedValue {
        self.value(path).unwrap_or(&NO_VALUE)
    }

    pub fn string(&self, path: &str) -> Option<&str> {
        self.value(path).and_then(NestedValue::as_str)
    }

    pub fn get_string(&self, path: &str) -> &str {
        self.string(path).unwrap_or_default()
    }

    pub fn int(&self, path: &str) -> Option<i64> {
        self.value(path).and_then(NestedValue::as_i64)
    }

    pub fn get_int(&self, path: &str) -> i64 {
        self.int(path).unwrap_or_default()
    }

    /// Parse the string at `path` as a timestamp
    ///
    /// `layout` accepts a [`TimeLayout`] or a layout name; `""` means RFC 3339.
    /// Parse failures are logged and reported as `None`.
    pub fn time(&self, path: &str, layout: impl Into<TimeLayout>) -> Option<Timestamp> {
        time_of(self.value(path), &layout.into())
    }

    /// Timestamp at `path`, or the Unix epoch when absent or unparsable
    pub fn get_time(&self, path: &str, layout: impl Into<TimeLayout>) -> Timestamp {
        self.time(path, layout).unwrap_or_default()
    }

    /// Re-parse the JSON text stored as a string at `path`
    ///
    /// Lets an escaped JSON string be entered as a nested map.
    pub fn sub_from_string(&self, path: &str) -> Option<Map> {
        sub_of(self.value(path))
    }

    pub fn get_sub_from_string(&self, path: &str) -> Map {
        self.sub_from_string(path).unwrap_or_default()
    }
}

/// Narrow a resolved value to a timestamp
pub fn time_of(value: Option<&NestedValue>, layout: &TimeLayout) -> Option<Timestamp> {
    let text = value.and_then(NestedValue::as_str)?;
    match layout.parse(text) {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!(%layout, error = %e, "timestamp did not match layout");
            None
        }
    }
}

/// Narrow a resolved value to a re-parsed subdocument
pub fn sub_of(value: Option<&NestedValue>) -> Option<Map> {
    let text = value.and_then(NestedValue::as_str)?;
    match serde_json::from_str::<Map>(text) {
        Ok(map) => Some(map),
        Err(e) => {
            debug!(error = %e, "string value is not a JSON object");
            None
        }
    }
}

// Free-function forms taking the map as an argument.

pub fn value<'a>(path: &str, map: &'a Map) -> Option<&'a NestedValue> {
    map.value(path)
}

pub fn get_value<'a>(path: &str, map: &'a Map) -> &'a NestedValue {
    map.get_value(path)
}

pub fn string<'a>(path: &str, map: &'a Map) -> Option<&'a str> {
    map.string(path)
}

pub fn get_string<'a>(path: &str, map: &'a Map) -> &'a str {
    map.get_string(path)
}

pub fn int(path: &str, map: &Map) -> Option<i64> {
    map.int(path)
}

pub fn get_int(path: &str, map: &Map) -> i64 {
    map.get_int(path)
}

pub fn time(path: &str, map: &Map, layout: impl Into<TimeLayout>) -> Option<Timestamp> {
    map.time(path, layout)
}

pub fn get_time(path: &str, map: &Map, layout: impl Into<TimeLayout>) -> Timestamp {
    map.get_time(path, layout)
}

pub fn sub_from_string(path: &str, map: &Map) -> Option<Map> {
    map.sub_from_string(path)
}

pub fn get_sub_from_string(path: &str, map: &Map) -> Map {
    map.get_sub_from_string(path)
}
