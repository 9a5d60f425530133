//! Facet text parsing and output formatting.
//!
//! # Responsibility
//! - Turn submitted date/time text into typed chrono values, either against a
//!   configured strict pattern or through the flexible form-input parser.
//! - Render typed facets back to text through configured patterns without
//!   ever panicking on a broken pattern.
//!
//! # Invariants
//! - Parsing is the only failure source in the crate; it reports exactly one
//!   error kind (`FacetParseError`).
//! - Flexible parsing never guesses beyond the documented format table.

use crate::split::facets::FacetKind;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static ORDINAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid ordinal regex"));
static MERIDIEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*([ap])\.?\s*m\.?\s*$").expect("valid meridiem regex"));

/// Date shapes the flexible parser accepts, tried in order.
const FLEXIBLE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%b %d %Y",
];

/// Time-of-day shapes the flexible parser accepts, tried in order.
const FLEXIBLE_TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
];

/// Full date-time shapes both flexible parsers fall back to, taking the date
/// or time component as needed.
const FLEXIBLE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The crate's single error kind: a date or time component that no accepted
/// shape could parse.
///
/// The accessor layer absorbs this error (fail-soft); it stays public so
/// callers wanting strict validation can run the parsers directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetParseError {
    /// Facet the input was meant for.
    pub facet: FacetKind,
    /// Input exactly as submitted.
    pub input: String,
}

impl FacetParseError {
    fn date(input: &str) -> Self {
        Self {
            facet: FacetKind::Date,
            input: input.to_string(),
        }
    }

    fn time(input: &str) -> Self {
        Self {
            facet: FacetKind::Time,
            input: input.to_string(),
        }
    }
}

impl Display for FacetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unparsable {} input: `{}`", self.facet, self.input)
    }
}

impl Error for FacetParseError {}

/// Parses date text against `format` when given, else flexibly.
///
/// Strict mode mirrors the configured form contract: the input must match the
/// pattern. Flexible mode normalizes whitespace and English ordinal suffixes,
/// then walks the documented format table; full date-time text contributes
/// its calendar date.
pub fn parse_date_text(input: &str, format: Option<&str>) -> Result<NaiveDate, FacetParseError> {
    let trimmed = input.trim();

    if let Some(pattern) = format {
        return NaiveDate::parse_from_str(trimmed, pattern)
            .map_err(|_| FacetParseError::date(input));
    }

    let normalized = normalize_date_text(trimmed);
    for pattern in FLEXIBLE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, pattern) {
            return Ok(date);
        }
    }
    for pattern in FLEXIBLE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Ok(datetime.date());
        }
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }

    Err(FacetParseError::date(input))
}

/// Parses time-of-day text against `format` when given, else flexibly.
///
/// Flexible mode normalizes whitespace and a trailing meridiem (so `1:45pm`
/// parses), then walks the time table; full date-time text contributes its
/// time-of-day.
pub fn parse_time_text(input: &str, format: Option<&str>) -> Result<NaiveTime, FacetParseError> {
    let trimmed = input.trim();

    if let Some(pattern) = format {
        return NaiveTime::parse_from_str(trimmed, pattern)
            .map_err(|_| FacetParseError::time(input));
    }

    let normalized = normalize_time_text(trimmed);
    for pattern in FLEXIBLE_TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(&normalized, pattern) {
            return Ok(time);
        }
    }
    for pattern in FLEXIBLE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Ok(datetime.time());
        }
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).time());
    }

    Err(FacetParseError::time(input))
}

/// Renders a date through a configured pattern.
///
/// The date is widened to midnight UTC before formatting so stray time or
/// offset specifiers in the pattern render zeros instead of aborting the
/// write. Returns `None` when the pattern itself is invalid; the caller then
/// falls back to the typed value instead of panicking inside chrono's
/// `Display`.
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let items = checked_items(format)?;
    let widened = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    Some(widened.format_with_items(items.iter()).to_string())
}

/// Renders a full instant through a configured time pattern.
///
/// The whole instant is formatted, so time patterns may reference date
/// specifiers as well. Returns `None` on an invalid pattern.
pub fn format_instant(instant: DateTime<Utc>, format: &str) -> Option<String> {
    let items = checked_items(format)?;
    Some(instant.format_with_items(items.iter()).to_string())
}

/// Pre-scans a strftime pattern, rejecting unknown specifiers.
fn checked_items(format: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(items)
}

fn normalize_date_text(input: &str) -> String {
    let collapsed = MULTI_SPACE_RE.replace_all(input, " ");
    ORDINAL_SUFFIX_RE.replace_all(&collapsed, "$1").into_owned()
}

fn normalize_time_text(input: &str) -> String {
    let collapsed = MULTI_SPACE_RE.replace_all(input, " ").into_owned();
    match MERIDIEM_RE.captures(&collapsed) {
        Some(caps) => {
            let head = &collapsed[..caps.get(0).map(|m| m.start()).unwrap_or(collapsed.len())];
            let meridiem = caps
                .get(1)
                .map(|m| m.as_str().to_ascii_uppercase())
                .unwrap_or_default();
            format!("{head} {meridiem}M")
        }
        None => collapsed,
    }
}
