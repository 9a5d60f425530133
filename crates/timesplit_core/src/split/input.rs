//! Writer input values as a form or caller submits them.
//!
//! # Responsibility
//! - Give the four facet writers one input shape covering raw form text,
//!   already-typed chrono values, numbers, and cleared fields.
//! - Keep blankness rules in one place.

use crate::split::facets::FacetValue;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One raw value handed to a facet writer.
///
/// Form fields arrive as text (possibly blank); application code may hand
/// over typed chrono values or numbers directly. Writers cache the input
/// verbatim before interpreting it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Nothing submitted (cleared field).
    Empty,
    /// Raw text exactly as submitted.
    Text(String),
    /// Already-typed calendar date.
    Date(NaiveDate),
    /// Already-typed wall-clock time.
    Time(NaiveTime),
    /// Already-typed full instant.
    Instant(DateTime<Utc>),
    /// Numeric hour or minute component.
    Number(u32),
}

impl FieldInput {
    /// Returns whether the input carries nothing to apply.
    ///
    /// `Empty` and whitespace-only text count as blank. Blank text is still
    /// cached verbatim by writers; blankness only short-circuits the
    /// composite update.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Converts the input into its cache representation.
    ///
    /// `Empty` maps to `None`, unsetting the slot so readers derive from the
    /// composite again.
    pub fn into_facet(self) -> Option<FacetValue> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(FacetValue::Text(text)),
            Self::Date(date) => Some(FacetValue::Date(date)),
            Self::Time(time) => Some(FacetValue::Time(time)),
            Self::Instant(instant) => Some(FacetValue::Instant(instant)),
            Self::Number(value) => Some(FacetValue::Int(value)),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for FieldInput {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for FieldInput {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime<Utc>> for FieldInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl<T> From<Option<T>> for FieldInput
where
    T: Into<FieldInput>,
{
    /// `None` means "field absent": the writer unsets the slot and leaves the
    /// composite alone.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldInput;
    use crate::split::facets::FacetValue;
    use chrono::NaiveDate;

    #[test]
    fn blankness_covers_empty_and_whitespace_text() {
        assert!(FieldInput::Empty.is_blank());
        assert!(FieldInput::from("").is_blank());
        assert!(FieldInput::from("   ").is_blank());
        assert!(!FieldInput::from("2020-05-01").is_blank());
        assert!(!FieldInput::Number(0).is_blank());
    }

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(
            FieldInput::from("raw"),
            FieldInput::Text("raw".to_string())
        );
        assert_eq!(FieldInput::from(13_u32), FieldInput::Number(13));

        let date = NaiveDate::from_ymd_opt(2020, 5, 1).expect("valid date");
        assert_eq!(FieldInput::from(date), FieldInput::Date(date));

        assert_eq!(FieldInput::from(None::<&str>), FieldInput::Empty);
        assert_eq!(
            FieldInput::from(Some("x")),
            FieldInput::Text("x".to_string())
        );
    }

    #[test]
    fn into_facet_keeps_text_verbatim_and_drops_empty() {
        assert_eq!(FieldInput::Empty.into_facet(), None);
        assert_eq!(
            FieldInput::from(" not-a-date ").into_facet(),
            Some(FacetValue::Text(" not-a-date ".to_string()))
        );
        assert_eq!(
            FieldInput::Number(45).into_facet(),
            Some(FacetValue::Int(45))
        );
    }
}
