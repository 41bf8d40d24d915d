//! Per-day inputs supplied by the astronomy layer.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use panchang_base::{AstronomicalSample, Masa, Rashi};
use panchang_day::{DayError, DaySpan};
use panchang_festival::{LunarDayState, ResolvedDay, SolarEvent};
use serde::{Deserialize, Serialize};

use crate::error::PanchangError;

/// Everything known about one civil date before assembly.
///
/// `masa`/`adhik` name the Amanta month at sunrise; paksha and tithi at
/// sunrise come from `sample`. `later_tithis` lists tithis that begin
/// before the next sunrise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DayInputRecord", into = "DayInputRecord")]
pub struct DayInput {
    pub date: NaiveDate,
    pub sample: AstronomicalSample,
    pub span: DaySpan,
    pub masa: Masa,
    pub adhik: bool,
    pub solar_month: Option<Rashi>,
    pub solar_day: Option<u8>,
    pub solar_events: Vec<SolarEvent>,
    pub later_tithis: Vec<LunarDayState>,
}

/// Wire form with an unchecked span.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayInputRecord {
    date: NaiveDate,
    sun_sidereal_longitude_deg: f64,
    moon_sidereal_longitude_deg: f64,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
    /// 1 = Sunday .. 7 = Saturday.
    weekday: u8,
    masa: Masa,
    #[serde(default)]
    adhik: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solar_month: Option<Rashi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solar_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    solar_events: Vec<SolarEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    later_tithis: Vec<LunarDayState>,
}

impl TryFrom<DayInputRecord> for DayInput {
    type Error = DayError;

    fn try_from(r: DayInputRecord) -> Result<Self, Self::Error> {
        let span = DaySpan::from_weekday_number(r.sunrise, r.sunset, r.next_sunrise, r.weekday)?;
        Ok(Self {
            date: r.date,
            sample: AstronomicalSample::new(
                r.sun_sidereal_longitude_deg,
                r.moon_sidereal_longitude_deg,
            ),
            span,
            masa: r.masa,
            adhik: r.adhik,
            solar_month: r.solar_month,
            solar_day: r.solar_day,
            solar_events: r.solar_events,
            later_tithis: r.later_tithis,
        })
    }
}

impl From<DayInput> for DayInputRecord {
    fn from(d: DayInput) -> Self {
        Self {
            date: d.date,
            sun_sidereal_longitude_deg: d.sample.sun_sidereal_longitude_deg,
            moon_sidereal_longitude_deg: d.sample.moon_sidereal_longitude_deg,
            sunrise: d.span.sunrise(),
            sunset: d.span.sunset(),
            next_sunrise: d.span.next_sunrise(),
            weekday: d.span.vaar().number(),
            masa: d.masa,
            adhik: d.adhik,
            solar_month: d.solar_month,
            solar_day: d.solar_day,
            solar_events: d.solar_events,
            later_tithis: d.later_tithis,
        }
    }
}

/// Lunar and solar state of `input`'s date, with the sunrise tithi derived
/// from the sample.
pub fn resolved_day(input: &DayInput) -> ResolvedDay {
    let pos = input.sample.tithi_position();
    let mut lunar = Vec::with_capacity(1 + input.later_tithis.len());
    lunar.push(LunarDayState::new(
        input.masa,
        input.adhik,
        pos.paksha,
        pos.tithi_in_paksha,
    ));
    lunar.extend_from_slice(&input.later_tithis);
    ResolvedDay {
        date: input.date,
        lunar,
        solar_month: input.solar_month,
        solar_day: input.solar_day,
        solar_events: input.solar_events.clone(),
    }
}

/// Parse a JSON array of day inputs.
pub fn load_day_inputs_from_str(json: &str) -> Result<Vec<DayInput>, PanchangError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_day_inputs_from_path(path: impl AsRef<Path>) -> Result<Vec<DayInput>, PanchangError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PanchangError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_day_inputs_from_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble_day;
    use panchang_base::{Paksha, Tradition, Vaar};
    use panchang_festival::{DayCalendar, ReferencePolicy, load_festivals_from_str};

    const HOLIKA: &str = r#"{
        "date": "2025-03-14",
        "sunSiderealLongitudeDeg": 329.8,
        "moonSiderealLongitudeDeg": 144.8,
        "sunrise": "2025-03-14T00:58:00Z",
        "sunset": "2025-03-14T12:51:00Z",
        "nextSunrise": "2025-03-15T00:57:00Z",
        "weekday": 6,
        "masa": "phalguna",
        "laterTithis": [{"masa": "phalguna", "paksha": "krishna", "tithi": 1}]
    }"#;

    #[test]
    fn parses_record() {
        let input: DayInput = serde_json::from_str(HOLIKA).unwrap();
        assert_eq!(input.span.vaar(), Vaar::Shukravaar);
        assert!(!input.adhik);
        let day = resolved_day(&input);
        assert_eq!(day.lunar.len(), 2);
        assert_eq!(day.lunar[0].paksha, Paksha::Shukla);
        assert_eq!(day.lunar[0].tithi, 15);
        assert_eq!(day.lunar[1].paksha, Paksha::Krishna);
    }

    #[test]
    fn bad_span_is_rejected() {
        let text = HOLIKA.replace("\"weekday\": 6", "\"weekday\": 9");
        let err = serde_json::from_str::<DayInput>(&text).unwrap_err();
        assert!(err.to_string().contains("weekday 9"));
    }

    #[test]
    fn serializes_back_to_record() {
        let input: DayInput = serde_json::from_str(HOLIKA).unwrap();
        let v = serde_json::to_value(&input).unwrap();
        assert_eq!(v["weekday"], 6);
        let again: DayInput = serde_json::from_value(v).unwrap();
        assert_eq!(again, input);
    }

    #[test]
    fn later_amavasya_matches_under_any_in_day() {
        let text = HOLIKA.replace(
            r#"{"masa": "phalguna", "paksha": "krishna", "tithi": 1}"#,
            r#"{"masa": "ashvina", "paksha": "krishna", "tithi": 30}"#,
        );
        let input: DayInput = serde_json::from_str(&text).unwrap();
        assert_eq!(input.later_tithis[0].tithi, 15);

        let festivals = load_festivals_from_str(
            r#"[{"id": "diwali", "traditions": ["marathi"],
                 "rule": {"type": "tithi", "masa": "ashvina", "paksha": "krishna", "tithi": 30}}]"#,
        )
        .unwrap();
        let calendar = DayCalendar::new();
        let any = assemble_day(
            &input,
            &calendar,
            &festivals,
            &Tradition::Marathi,
            &ReferencePolicy::AnyInDay,
        );
        assert_eq!(any.festivals.len(), 1);
        assert_eq!(any.festivals[0].festival_id, "diwali");
        let sunrise = assemble_day(
            &input,
            &calendar,
            &festivals,
            &Tradition::Marathi,
            &ReferencePolicy::Sunrise,
        );
        assert!(sunrise.festivals.is_empty());
    }

    #[test]
    fn out_of_range_later_tithi_is_rejected() {
        let text = HOLIKA.replace("\"tithi\": 1}", "\"tithi\": 200}");
        assert!(serde_json::from_str::<DayInput>(&text).is_err());
    }
}
