//! Per-attribute configuration for the accessor family.
//!
//! # Responsibility
//! - Carry the base-instant factory and the optional strict parse/format
//!   patterns one split attribute was declared with.
//!
//! # Invariants
//! - The factory runs on every materialization; results are never memoized.
//! - An unset pattern means flexible parsing and typed (unformatted) reader
//!   output.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Factory producing the base instant when no composite value exists yet.
pub type DefaultInstantFn = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

static FALLBACK_INSTANT: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0)
        .single()
        .expect("year-zero midnight is a valid instant")
});

/// Returns the built-in base instant: year 0, Jan 1, 00:00:00 UTC.
pub fn fallback_instant() -> DateTime<Utc> {
    *FALLBACK_INSTANT
}

/// Declaration-time options for one split attribute.
#[derive(Clone)]
pub struct SplitConfig {
    default_instant: DefaultInstantFn,
    date_format: Option<String>,
    time_format: Option<String>,
}

impl SplitConfig {
    /// Creates the default configuration: year-zero base instant, flexible
    /// parsing, typed reader output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the base-instant factory.
    ///
    /// Typical override: "start of the current hour" so a form that only
    /// submits a time lands on today.
    pub fn with_default<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.default_instant = Arc::new(factory);
        self
    }

    /// Sets the strict strftime pattern for the date facet.
    ///
    /// Applies to both directions: writer text must match it, and readers
    /// render through it.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    /// Sets the strict strftime pattern for the time facet.
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = Some(pattern.into());
        self
    }

    /// Invokes the base-instant factory.
    pub fn default_instant(&self) -> DateTime<Utc> {
        (self.default_instant)()
    }

    /// Configured date pattern, when any.
    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// Configured time pattern, when any.
    pub fn time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            default_instant: Arc::new(fallback_instant),
            date_format: None,
            time_format: None,
        }
    }
}

impl Debug for SplitConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitConfig")
            .field("default_instant", &"<factory>")
            .field("date_format", &self.date_format)
            .field("time_format", &self.time_format)
            .finish()
    }
}
