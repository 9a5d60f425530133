use chrono::{DateTime, TimeZone, Utc};
use timesplit_core::{FacetCache, FacetValue, SplitAccessor, SplitConfig};

struct Appointment {
    starts_at: Option<DateTime<Utc>>,
    starts_at_facets: FacetCache,
    starts_at_config: SplitConfig,
}

impl Appointment {
    fn new() -> Self {
        Self::with_config(SplitConfig::default())
    }

    fn with_config(config: SplitConfig) -> Self {
        Self {
            starts_at: None,
            starts_at_facets: FacetCache::new(),
            starts_at_config: config,
        }
    }

    fn starts_at(&mut self) -> SplitAccessor<'_> {
        SplitAccessor::new(
            &mut self.starts_at,
            &mut self.starts_at_facets,
            &self.starts_at_config,
        )
    }
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap()
}

#[test]
fn facet_writes_compose_onto_the_default_base() {
    let mut appointment = Appointment::new();

    appointment.starts_at().set_date("2021-05-04");
    assert_eq!(appointment.starts_at, Some(utc(2021, 5, 4, 0, 0, 0)));

    appointment.starts_at().set_time("09:30");
    assert_eq!(appointment.starts_at, Some(utc(2021, 5, 4, 9, 30, 0)));
}

#[test]
fn date_then_time_reaches_the_same_instant_as_time_then_date() {
    let mut first = Appointment::new();
    first.starts_at().set_date("2021-05-04");
    first.starts_at().set_time("09:30");

    let mut second = Appointment::new();
    second.starts_at().set_time("09:30");
    second.starts_at().set_date("2021-05-04");

    assert_eq!(first.starts_at, second.starts_at);
    assert_eq!(first.starts_at, Some(utc(2021, 5, 4, 9, 30, 0)));
}

#[test]
fn hour_and_min_writes_rebase_onto_the_existing_composite() {
    let mut appointment = Appointment::new();
    appointment.starts_at().assign(Some(utc(2020, 5, 5, 9, 30, 45)));

    appointment.starts_at().set_hour(13u32);
    assert_eq!(appointment.starts_at, Some(utc(2020, 5, 5, 13, 30, 0)));

    appointment.starts_at().set_min("45");
    assert_eq!(appointment.starts_at, Some(utc(2020, 5, 5, 13, 45, 0)));
}

#[test]
fn custom_base_factory_seeds_the_first_write() {
    let config = SplitConfig::new().with_default(|| utc(2024, 6, 1, 8, 0, 0));
    let mut appointment = Appointment::with_config(config);

    appointment.starts_at().set_min(15u32);
    assert_eq!(appointment.starts_at, Some(utc(2024, 6, 1, 8, 15, 0)));
}

#[test]
fn or_new_returns_the_base_without_writing_it_back() {
    let mut appointment = Appointment::new();

    let base = appointment.starts_at().or_new();
    assert_eq!(base, timesplit_core::fallback_instant());
    assert_eq!(appointment.starts_at, None);
    assert!(appointment.starts_at_facets.is_empty());
}

#[test]
fn readers_echo_typed_text_until_the_next_assignment() {
    let mut appointment = Appointment::new();

    appointment.starts_at().set_date("2021-05-04");
    assert_eq!(
        appointment.starts_at().date(),
        Some(FacetValue::Text("2021-05-04".into()))
    );

    appointment.starts_at().assign(Some(utc(2022, 1, 2, 3, 4, 5)));
    assert_eq!(
        appointment.starts_at().date(),
        Some(FacetValue::Date(utc(2022, 1, 2, 0, 0, 0).date_naive()))
    );
    assert_eq!(appointment.starts_at().hour(), Some(FacetValue::Int(3)));
}

#[test]
fn reassembling_read_facets_reproduces_the_minute() {
    let mut source = Appointment::new();
    source.starts_at().assign(Some(utc(2020, 5, 5, 9, 30, 45)));

    let mut accessor = source.starts_at();
    let date = accessor.date().and_then(|facet| facet.as_date()).unwrap();
    let hour = accessor.hour().and_then(|facet| facet.as_int()).unwrap();
    let min = accessor.min().and_then(|facet| facet.as_int()).unwrap();

    let mut rebuilt = Appointment::new();
    rebuilt.starts_at().set_date(date);
    rebuilt.starts_at().set_hour(hour);
    rebuilt.starts_at().set_min(min);

    assert_eq!(
        rebuilt.starts_at,
        Some(utc(2020, 5, 5, 9, 30, 0)),
        "seconds are not carried by the clock writers"
    );
}

#[test]
fn typed_inputs_take_the_same_path_as_text() {
    let mut appointment = Appointment::new();
    appointment.starts_at().assign(Some(utc(2020, 5, 5, 9, 30, 45)));

    appointment
        .starts_at()
        .set_date(utc(2021, 1, 2, 0, 0, 0).date_naive());
    assert_eq!(appointment.starts_at, Some(utc(2021, 1, 2, 9, 30, 45)));

    appointment
        .starts_at()
        .set_time(utc(2000, 1, 1, 18, 45, 59).time());
    assert_eq!(appointment.starts_at, Some(utc(2021, 1, 2, 18, 45, 0)));
}
