//! Document timestamps and the flexible date parser.
//!
//! Front-matter dates arrive as plain strings. [`parse_date`] tries a fixed
//! list of common textual formats, most specific first:
//!
//! - RFC 3339 (`2020-01-02T10:30:00+02:00`) and RFC 2822
//! - ISO-like with an offset (`2020-01-02 10:30:00 +0200`)
//! - ISO-like without an offset (`2020-01-02 10:30`, `2020-01-02T10:30:00.5`)
//! - slash forms (`2020/01/02 10:30`, US `01/02/2020`)
//! - month names (`January 2, 2020`, `2 Jan 2020`)
//!
//! Date-only inputs become midnight of that day.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::{Error, Result};

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// A parsed document timestamp.
///
/// Inputs without a UTC offset stay naive; the host decides which timezone
/// they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Naive(date.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Offset(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// Parse a `YYYY-MM-DD` value with no time-of-day component.
pub fn parse_date_only(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Parse a date string in any of the supported formats.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] when no format matches.
pub fn parse_date(input: &str) -> Result<Timestamp> {
    let value = input.trim();
    if value.is_empty() {
        return Err(Error::date_format(input));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Timestamp::Offset(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Ok(Timestamp::Offset(dt));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(Timestamp::Offset(dt));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Timestamp::Naive(dt));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(Timestamp::from_date(date));
        }
    }

    Err(Error::date_format(input))
}
