//! Split-attribute accessor: one composite timestamp edited through
//! date/hour/min/time facets.
//!
//! # Responsibility
//! - Mediate facet writes and reads against a host-owned composite slot and
//!   its facet cache.
//! - Rebase every facet write onto the current composite (or the configured
//!   base instant) so independent form fields compose into one timestamp.
//!
//! # Invariants
//! - A composite write invalidates every cached facet except the slot that
//!   initiated it.
//! - Facet writers never panic on user input; uninterpretable input parks in
//!   its cache slot and leaves the composite unchanged.
//! - Clock-facet writes (`hour`, `min`, `time`) truncate the composite to
//!   minute precision; date writes preserve the time of day.
//!
//! # See also
//! - `crate::split::parse` for text interpretation and pattern rendering.
//! - `crate::split::params` for form-shaped batch application.

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use log::debug;

use crate::split::config::SplitConfig;
use crate::split::facets::{FacetCache, FacetKind, FacetValue};
use crate::split::input::FieldInput;
use crate::split::params::{SplitParams, TimestampParts};
use crate::split::parse;

/// Borrowed editing view over one split attribute.
///
/// The host owns the composite slot and the cache; the view borrows both for
/// the duration of one edit and carries the attribute's declaration-time
/// configuration alongside.
#[derive(Debug)]
pub struct SplitAccessor<'a> {
    composite: &'a mut Option<DateTime<Utc>>,
    facets: &'a mut FacetCache,
    config: &'a SplitConfig,
}

impl<'a> SplitAccessor<'a> {
    pub fn new(
        composite: &'a mut Option<DateTime<Utc>>,
        facets: &'a mut FacetCache,
        config: &'a SplitConfig,
    ) -> Self {
        Self {
            composite,
            facets,
            config,
        }
    }

    /// Current composite value, if any.
    pub fn composite(&self) -> Option<DateTime<Utc>> {
        *self.composite
    }

    /// Composite value, or the configured base instant when unset.
    ///
    /// The base instant is never written back; it only seeds merges until a
    /// facet write lands.
    pub fn or_new(&self) -> DateTime<Utc> {
        self.composite()
            .unwrap_or_else(|| self.config.default_instant())
    }

    /// Replaces the composite wholesale and invalidates every cached facet.
    pub fn assign(&mut self, value: Option<DateTime<Utc>>) {
        self.facets.clear();
        *self.composite = value;
        debug!(
            "event=composite_assign module=split status=ok present={}",
            value.is_some()
        );
    }

    /// Writes the date facet.
    ///
    /// Accepts dates, instants, and date text; the parsed day merges onto the
    /// composite with its time of day preserved.
    pub fn set_date(&mut self, input: impl Into<FieldInput>) {
        let Some(raw) = self.cache_verbatim(FacetKind::Date, input.into()) else {
            return;
        };
        let parsed = match &raw {
            FacetValue::Date(date) => Some(*date),
            FacetValue::Instant(instant) => Some(instant.date_naive()),
            FacetValue::Text(text) => {
                parse::parse_date_text(text, self.config.date_format()).ok()
            }
            FacetValue::Time(_) | FacetValue::Int(_) => None,
        };
        let Some(date) = parsed else {
            self.soft_fail(FacetKind::Date, &raw);
            return;
        };
        let base = self.or_new();
        let merged = Utc.from_utc_datetime(&NaiveDateTime::new(date, base.naive_utc().time()));
        self.merge_into(FacetKind::Date, merged);
    }

    /// Writes the hour facet (0 through 23).
    ///
    /// Accepts integers and numeric text. Minutes survive the write; seconds
    /// do not.
    pub fn set_hour(&mut self, input: impl Into<FieldInput>) {
        let Some(raw) = self.cache_verbatim(FacetKind::Hour, input.into()) else {
            return;
        };
        let parsed = match &raw {
            FacetValue::Int(hour) => Some(*hour),
            FacetValue::Text(text) => text.trim().parse::<u32>().ok(),
            _ => None,
        };
        let merged = parsed.and_then(|hour| {
            self.or_new()
                .naive_utc()
                .with_hour(hour)
                .and_then(|moved| moved.with_second(0))
                .and_then(|moved| moved.with_nanosecond(0))
        });
        let Some(naive) = merged else {
            self.soft_fail(FacetKind::Hour, &raw);
            return;
        };
        self.merge_into(FacetKind::Hour, Utc.from_utc_datetime(&naive));
    }

    /// Writes the minute facet (0 through 59). Seconds reset to zero.
    pub fn set_min(&mut self, input: impl Into<FieldInput>) {
        let Some(raw) = self.cache_verbatim(FacetKind::Min, input.into()) else {
            return;
        };
        let parsed = match &raw {
            FacetValue::Int(min) => Some(*min),
            FacetValue::Text(text) => text.trim().parse::<u32>().ok(),
            _ => None,
        };
        let merged = parsed.and_then(|min| {
            self.or_new()
                .naive_utc()
                .with_minute(min)
                .and_then(|moved| moved.with_second(0))
                .and_then(|moved| moved.with_nanosecond(0))
        });
        let Some(naive) = merged else {
            self.soft_fail(FacetKind::Min, &raw);
            return;
        };
        self.merge_into(FacetKind::Min, Utc.from_utc_datetime(&naive));
    }

    /// Writes the time facet: hour and minute together.
    ///
    /// Accepts times of day, instants, and clock text. The composite keeps
    /// its date; seconds reset to zero.
    pub fn set_time(&mut self, input: impl Into<FieldInput>) {
        let Some(raw) = self.cache_verbatim(FacetKind::Time, input.into()) else {
            return;
        };
        let parsed = match &raw {
            FacetValue::Time(time) => Some((time.hour(), time.minute())),
            FacetValue::Instant(instant) => Some((instant.hour(), instant.minute())),
            FacetValue::Text(text) => parse::parse_time_text(text, self.config.time_format())
                .ok()
                .map(|time| (time.hour(), time.minute())),
            FacetValue::Date(_) | FacetValue::Int(_) => None,
        };
        let merged = parsed.and_then(|(hour, min)| {
            self.or_new()
                .naive_utc()
                .with_hour(hour)
                .and_then(|moved| moved.with_minute(min))
                .and_then(|moved| moved.with_second(0))
                .and_then(|moved| moved.with_nanosecond(0))
        });
        let Some(naive) = merged else {
            self.soft_fail(FacetKind::Time, &raw);
            return;
        };
        self.merge_into(FacetKind::Time, Utc.from_utc_datetime(&naive));
    }

    /// Date facet reader: the cached write-through value, or a value derived
    /// from the composite (pattern-rendered when a date format is set).
    pub fn date(&mut self) -> Option<FacetValue> {
        self.read_facet(FacetKind::Date, |composite, config| {
            let date = composite.date_naive();
            config
                .date_format()
                .and_then(|pattern| parse::format_date(date, pattern))
                .map(FacetValue::Text)
                .unwrap_or(FacetValue::Date(date))
        })
    }

    /// Hour facet reader.
    pub fn hour(&mut self) -> Option<FacetValue> {
        self.read_facet(FacetKind::Hour, |composite, _| {
            FacetValue::Int(composite.hour())
        })
    }

    /// Minute facet reader.
    pub fn min(&mut self) -> Option<FacetValue> {
        self.read_facet(FacetKind::Min, |composite, _| {
            FacetValue::Int(composite.minute())
        })
    }

    /// Time facet reader: the cached write-through value, or the whole
    /// composite instant (pattern-rendered when a time format is set).
    pub fn time(&mut self) -> Option<FacetValue> {
        self.read_facet(FacetKind::Time, |composite, config| {
            config
                .time_format()
                .and_then(|pattern| parse::format_instant(composite, pattern))
                .map(FacetValue::Text)
                .unwrap_or(FacetValue::Instant(composite))
        })
    }

    /// Routes one multipart form submission through the facet writers.
    ///
    /// Field order is fixed (date, hour, min, time); absent fields are
    /// skipped rather than treated as blank.
    pub fn apply_params(&mut self, params: &SplitParams) {
        if let Some(date) = params.date.as_deref() {
            self.set_date(date);
        }
        if let Some(hour) = params.hour.as_deref() {
            self.set_hour(hour);
        }
        if let Some(min) = params.min.as_deref() {
            self.set_min(min);
        }
        if let Some(time) = params.time.as_deref() {
            self.set_time(time);
        }
    }

    /// Replaces the composite from discrete calendar and clock parts.
    ///
    /// Parts that name no real instant (month 13, hour 24) are rejected with
    /// the composite left untouched.
    pub fn assign_parts(&mut self, parts: &TimestampParts) {
        match parts.to_instant() {
            Some(instant) => self.assign(Some(instant)),
            None => debug!(
                "event=multipart_assign module=split status=rejected year={} month={} day={}",
                parts.year, parts.month, parts.day
            ),
        }
    }

    /// Caches the raw input in its slot. Returns the cached value when the
    /// input warrants interpretation, `None` when the write stops at the
    /// cache (blank text stays for echo; empty input clears the slot).
    fn cache_verbatim(&mut self, kind: FacetKind, input: FieldInput) -> Option<FacetValue> {
        let blank = input.is_blank();
        let verbatim = input.into_facet();
        self.facets.set(kind, verbatim.clone());
        if blank {
            return None;
        }
        verbatim
    }

    /// Composite write on behalf of one facet: the initiating slot survives
    /// the cache invalidation so the form echoes what was typed.
    fn merge_into(&mut self, kind: FacetKind, merged: DateTime<Utc>) {
        let keep = self.facets.get(kind).cloned();
        self.assign(Some(merged));
        self.facets.set(kind, keep);
    }

    fn soft_fail(&self, kind: FacetKind, raw: &FacetValue) {
        debug!(
            "event=facet_parse_soft_fail module=split facet={} input={}",
            kind, raw
        );
    }

    fn read_facet(
        &mut self,
        kind: FacetKind,
        derive: impl Fn(DateTime<Utc>, &SplitConfig) -> FacetValue,
    ) -> Option<FacetValue> {
        if let Some(cached) = self.facets.get(kind) {
            return Some(cached.clone());
        }
        let composite = self.composite()?;
        let derived = derive(composite, self.config);
        self.facets.set(kind, Some(derived.clone()));
        Some(derived)
    }
}
