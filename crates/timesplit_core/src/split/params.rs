//! Form-shaped payloads for split attributes.
//!
//! # Responsibility
//! - Model the two wire shapes a split attribute is edited through: facet
//!   text fields and discrete timestamp parts.
//! - Define the capability hosts opt into for multipart assignment.
//!
//! # Invariants
//! - An absent field means "not posted" and skips its writer; an empty
//!   string means "posted blank" and reaches it.
//!
//! # See also
//! - `crate::split::accessor` for how each field lands on the composite.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

use crate::split::accessor::SplitAccessor;

/// One form submission for a split attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SplitParams {
    pub date: Option<String>,
    pub hour: Option<String>,
    pub min: Option<String>,
    pub time: Option<String>,
}

/// Discrete calendar and clock parts naming one instant.
///
/// Clock parts default to zero so a date-only payload resolves to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimestampParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub min: u32,
    #[serde(default)]
    pub sec: u32,
}

impl TimestampParts {
    /// Resolves the parts to a UTC instant; `None` when they name no real
    /// calendar or clock position.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let time = NaiveTime::from_hms_opt(self.hour, self.min, self.sec)?;
        Some(Utc.from_utc_datetime(&date.and_time(time)))
    }
}

/// Capability a host implements when one of its split attributes accepts
/// whole-timestamp assignment from discrete parts.
pub trait MultipartComposite {
    /// Accessor for the attribute the parts target.
    fn split_accessor(&mut self) -> SplitAccessor<'_>;

    /// Routes the parts through the accessor, dropping invalid ones.
    fn assign_multipart(&mut self, parts: &TimestampParts) {
        self.split_accessor().assign_parts(parts);
    }
}

#[cfg(test)]
mod tests {
    use super::{MultipartComposite, SplitParams, TimestampParts};
    use crate::split::accessor::SplitAccessor;
    use crate::split::config::SplitConfig;
    use crate::split::facets::FacetCache;
    use chrono::{DateTime, TimeZone, Utc};

    #[test]
    fn params_distinguish_absent_from_posted_fields() {
        let params: SplitParams =
            serde_json::from_str(r#"{"date": "2021-01-02", "time": ""}"#)
                .expect("payload should deserialize");
        assert_eq!(params.date.as_deref(), Some("2021-01-02"));
        assert_eq!(params.time.as_deref(), Some(""));
        assert_eq!(params.hour, None);
        assert_eq!(params.min, None);
    }

    #[test]
    fn parts_default_clock_fields_to_midnight() {
        let parts: TimestampParts =
            serde_json::from_str(r#"{"year": 2021, "month": 5, "day": 4}"#)
                .expect("payload should deserialize");
        let expected = Utc
            .with_ymd_and_hms(2021, 5, 4, 0, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(parts.to_instant(), Some(expected));
    }

    #[test]
    fn parts_naming_no_real_instant_resolve_to_none() {
        let invalid_month = TimestampParts {
            year: 2021,
            month: 13,
            day: 1,
            hour: 0,
            min: 0,
            sec: 0,
        };
        assert_eq!(invalid_month.to_instant(), None);

        let invalid_hour = TimestampParts {
            year: 2021,
            month: 5,
            day: 4,
            hour: 24,
            min: 0,
            sec: 0,
        };
        assert_eq!(invalid_hour.to_instant(), None);
    }

    struct Booking {
        starts_at: Option<DateTime<Utc>>,
        starts_at_facets: FacetCache,
        starts_at_config: SplitConfig,
    }

    impl MultipartComposite for Booking {
        fn split_accessor(&mut self) -> SplitAccessor<'_> {
            SplitAccessor::new(
                &mut self.starts_at,
                &mut self.starts_at_facets,
                &self.starts_at_config,
            )
        }
    }

    #[test]
    fn assign_multipart_lands_on_the_composite() {
        let mut booking = Booking {
            starts_at: None,
            starts_at_facets: FacetCache::new(),
            starts_at_config: SplitConfig::default(),
        };

        booking.assign_multipart(&TimestampParts {
            year: 2024,
            month: 6,
            day: 1,
            hour: 10,
            min: 30,
            sec: 0,
        });
        let expected = Utc
            .with_ymd_and_hms(2024, 6, 1, 10, 30, 0)
            .single()
            .expect("valid instant");
        assert_eq!(booking.starts_at, Some(expected));

        booking.assign_multipart(&TimestampParts {
            year: 2024,
            month: 13,
            day: 1,
            hour: 0,
            min: 0,
            sec: 0,
        });
        assert_eq!(booking.starts_at, Some(expected), "invalid parts are dropped");
    }
}
