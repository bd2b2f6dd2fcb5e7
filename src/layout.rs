//! Timestamp layouts
//!
//! An empty layout means RFC 3339. Named layouts are matched
//! case-insensitively; anything else is a chrono strftime format.
//!
//! Formats without an offset (`%d/%m/%Y`, ANSI C) are read as UTC.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, ParseError};

use crate::error::{NestedError, Result};

pub type Timestamp = DateTime<FixedOffset>;

/// `Mon Jan  2 15:04:05 2006`
const ANSI_C: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimeLayout {
    #[default]
    Rfc3339,
    Rfc2822,
    AnsiC,
    /// strftime-style format string
    Format(String),
}

impl TimeLayout {
    /// Map a layout name to a layout; unknown names are kept as formats
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("rfc3339") {
            TimeLayout::Rfc3339
        } else if trimmed.eq_ignore_ascii_case("rfc2822") {
            TimeLayout::Rfc2822
        } else if trimmed.eq_ignore_ascii_case("ansic") {
            TimeLayout::AnsiC
        } else {
            TimeLayout::Format(name.to_string())
        }
    }

    /// Reject strftime formats chrono cannot interpret
    pub fn validate(&self) -> Result<()> {
        let TimeLayout::Format(fmt) = self else {
            return Ok(());
        };
        if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(NestedError::Layout {
                layout: fmt.clone(),
                reason: "unknown or incomplete % specifier".to_string(),
            });
        }
        Ok(())
    }

    pub fn parse(&self, input: &str) -> std::result::Result<Timestamp, ParseError> {
        match self {
            TimeLayout::Rfc3339 => DateTime::parse_from_rfc3339(input),
            TimeLayout::Rfc2822 => DateTime::parse_from_rfc2822(input),
            TimeLayout::AnsiC => parse_with_format(input, ANSI_C),
            TimeLayout::Format(fmt) => parse_with_format(input, fmt),
        }
    }
}

impl From<&str> for TimeLayout {
    fn from(name: &str) -> Self {
        TimeLayout::from_name(name)
    }
}

impl From<String> for TimeLayout {
    fn from(name: String) -> Self {
        TimeLayout::from_name(&name)
    }
}

impl From<&TimeLayout> for TimeLayout {
    fn from(layout: &TimeLayout) -> Self {
        layout.clone()
    }
}

impl fmt::Display for TimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLayout::Rfc3339 => f.write_str("rfc3339"),
            TimeLayout::Rfc2822 => f.write_str("rfc2822"),
            TimeLayout::AnsiC => f.write_str("ansic"),
            TimeLayout::Format(fmt) => f.write_str(fmt),
        }
    }
}

/// Try with offset, then as a naive date-time, then as a bare date
fn parse_with_format(input: &str, fmt: &str) -> std::result::Result<Timestamp, ParseError> {
    let err = match DateTime::parse_from_str(input, fmt) {
        Ok(ts) => return Ok(ts),
        Err(err) => err,
    };
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(err)
}
