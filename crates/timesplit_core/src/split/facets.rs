//! Transient facet side table for one split timestamp attribute.
//!
//! # Responsibility
//! - Hold the four optional decomposed views (date, hour, minute, time) of
//!   one composite timestamp.
//! - Provide lifecycle helpers for invalidation on composite writes.
//!
//! # Invariants
//! - The composite field stays authoritative; slots are caches, never truth.
//! - Slots live only as long as the in-memory host value and are never
//!   persisted.
//! - Every slot is wiped when the composite is assigned directly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt::{Display, Formatter};

/// Names one decomposed facet in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetKind {
    Date,
    Hour,
    Min,
    Time,
}

impl FacetKind {
    /// Stable lowercase id used in log events and error text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Hour => "hour",
            Self::Min => "min",
            Self::Time => "time",
        }
    }
}

impl Display for FacetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cached facet value.
///
/// A slot holds either the verbatim input a writer received (so forms can
/// redisplay exactly what was submitted, valid or not) or the projection a
/// reader derived from the composite.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetValue {
    /// Calendar date without time-of-day.
    Date(NaiveDate),
    /// Wall-clock time without calendar date.
    Time(NaiveTime),
    /// Full composite instant.
    Instant(DateTime<Utc>),
    /// Numeric hour or minute component.
    Int(u32),
    /// Raw submitted text, or a format-rendered projection.
    Text(String),
}

impl FacetValue {
    /// Calendar date when this value is the `Date` variant.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Wall-clock time when this value is the `Time` variant.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Full instant when this value is the `Instant` variant.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(instant) => Some(*instant),
            _ => None,
        }
    }

    /// Numeric component when this value is the `Int` variant.
    pub fn as_int(&self) -> Option<u32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Text content when this value is the `Text` variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl Display for FacetValue {
    /// Form-friendly rendering: ISO date, `HH:MM` time, decimal int, text
    /// verbatim, chrono's default for full instants.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Time(time) => write!(f, "{}", time.format("%H:%M")),
            Self::Instant(instant) => write!(f, "{instant}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Per-instance side table of optional cached facets.
///
/// Host records embed one `FacetCache` next to each split composite field.
/// The cache carries no serde derives on purpose: slots are in-memory state
/// and must never reach storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetCache {
    date: Option<FacetValue>,
    hour: Option<FacetValue>,
    min: Option<FacetValue>,
    time: Option<FacetValue>,
}

impl FacetCache {
    /// Creates an empty cache with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipes all four slots.
    ///
    /// Called by the composite setter so stale views never survive a direct
    /// timestamp write.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every slot is unset.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.hour.is_none() && self.min.is_none() && self.time.is_none()
    }

    /// Reads one slot.
    pub fn get(&self, kind: FacetKind) -> Option<&FacetValue> {
        match kind {
            FacetKind::Date => self.date.as_ref(),
            FacetKind::Hour => self.hour.as_ref(),
            FacetKind::Min => self.min.as_ref(),
            FacetKind::Time => self.time.as_ref(),
        }
    }

    /// Replaces one slot, `None` unsetting it.
    pub fn set(&mut self, kind: FacetKind, value: Option<FacetValue>) {
        match kind {
            FacetKind::Date => self.date = value,
            FacetKind::Hour => self.hour = value,
            FacetKind::Min => self.min = value,
            FacetKind::Time => self.time = value,
        }
    }
}
