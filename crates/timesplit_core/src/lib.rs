//! Split editing for timestamp attributes: one composite value, four
//! facet fields. This crate is the single source of truth for how facet
//! writes merge and how facet reads derive.

pub mod logging;
pub mod split;

pub use logging::{default_log_level, init_logging, logging_status};
pub use split::accessor::SplitAccessor;
pub use split::config::{fallback_instant, DefaultInstantFn, SplitConfig};
pub use split::facets::{FacetCache, FacetKind, FacetValue};
pub use split::input::FieldInput;
pub use split::params::{MultipartComposite, SplitParams, TimestampParts};
pub use split::parse::{
    format_date, format_instant, parse_date_text, parse_time_text, FacetParseError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
