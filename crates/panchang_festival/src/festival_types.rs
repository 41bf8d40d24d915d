//! Festival definitions, resolved calendar days and occurrences.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use panchang_base::{Masa, Paksha, Rashi, Tithi, Tradition};
use serde::{Deserialize, Serialize};

use crate::rule::{FestivalRule, SolarEvent, normalize_tithi};

/// Broad grouping of a festival, as authored in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalCategory {
    #[default]
    Major,
    Minor,
    Vrat,
    Jayanti,
    Regional,
    Solar,
    #[serde(other)]
    Other,
}

/// One festival definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub id: String,
    /// Display names keyed by language code.
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    #[serde(default)]
    pub rule: FestivalRule,
    #[serde(default)]
    pub traditions: Vec<Tradition>,
    #[serde(default = "default_duration")]
    pub duration_days: u32,
    #[serde(default)]
    pub category: FestivalCategory,
}

fn default_duration() -> u32 {
    1
}

impl Default for FestivalRule {
    fn default() -> Self {
        Self::Unrecognized { kind: None }
    }
}

impl Festival {
    /// Name in `lang`, falling back to English and then the id.
    pub fn name(&self, lang: &str) -> &str {
        self.names
            .get(lang)
            .or_else(|| self.names.get("en"))
            .map_or(self.id.as_str(), String::as_str)
    }

    pub fn observed_in(&self, tradition: &Tradition) -> bool {
        self.traditions.contains(tradition)
    }

    /// Last day of an occurrence starting on `date`, when it spans more than one day.
    pub fn end_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        if self.duration_days > 1 {
            date.checked_add_days(Days::new(u64::from(self.duration_days - 1)))
        } else {
            None
        }
    }
}

/// A festival falling on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalOccurrence {
    pub festival_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Lunar state of a day in Amanta naming. `tithi` is 1..=15 within `paksha`.
///
/// Deserializing accepts 30 for a Krishna Amavasya and rejects other
/// tithis outside 1..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LunarDayRecord")]
pub struct LunarDayState {
    pub masa: Masa,
    #[serde(default)]
    pub adhik: bool,
    pub paksha: Paksha,
    pub tithi: u8,
}

impl LunarDayState {
    pub fn new(masa: Masa, adhik: bool, paksha: Paksha, tithi: u8) -> Self {
        Self {
            masa,
            adhik,
            paksha,
            tithi: tithi.clamp(1, 15),
        }
    }

    pub fn tithi(&self) -> Tithi {
        Tithi::in_paksha(self.paksha, self.tithi)
    }
}

#[derive(Deserialize)]
struct LunarDayRecord {
    masa: Masa,
    #[serde(default)]
    adhik: bool,
    paksha: Paksha,
    tithi: u8,
}

impl TryFrom<LunarDayRecord> for LunarDayState {
    type Error = String;

    fn try_from(r: LunarDayRecord) -> Result<Self, Self::Error> {
        let tithi = normalize_tithi(r.paksha, r.tithi).ok_or_else(|| {
            format!("tithi {} outside 1..=15 for {:?} paksha", r.tithi, r.paksha)
        })?;
        Ok(Self {
            masa: r.masa,
            adhik: r.adhik,
            paksha: r.paksha,
            tithi,
        })
    }
}

/// Everything the evaluator needs to know about one civil date.
///
/// `lunar[0]` is the state at sunrise; later entries are tithis beginning
/// before the next sunrise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub lunar: Vec<LunarDayState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_month: Option<Rashi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solar_events: Vec<SolarEvent>,
}

impl ResolvedDay {
    pub fn sunrise_state(&self) -> Option<&LunarDayState> {
        self.lunar.first()
    }
}

/// Inclusive range of civil dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range between `a` and `b` in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_festival_with_defaults() {
        let f: Festival = serde_json::from_value(json!({
            "id": "holi",
            "names": {"en": "Holi", "hi": "होली"},
            "rule": {"type": "tithi_offset", "anchor": "holika_dahan", "daysAfter": 1},
            "traditions": ["north_indian", "Gujarati"]
        }))
        .unwrap();
        assert_eq!(f.duration_days, 1);
        assert_eq!(f.category, FestivalCategory::Major);
        assert!(f.observed_in(&Tradition::Gujarati));
        assert!(!f.observed_in(&Tradition::Tamil));
        assert_eq!(f.name("hi"), "होली");
        assert_eq!(f.name("ta"), "Holi");
    }

    #[test]
    fn missing_rule_is_unrecognized() {
        let f: Festival = serde_json::from_value(json!({"id": "x", "category": "mela"})).unwrap();
        assert!(!f.rule.is_recognized());
        assert_eq!(f.category, FestivalCategory::Other);
    }

    #[test]
    fn end_date_only_for_multi_day() {
        let mut f: Festival = serde_json::from_value(json!({"id": "navratri"})).unwrap();
        assert_eq!(f.end_date(date(2025, 3, 14)), None);
        f.duration_days = 3;
        assert_eq!(f.end_date(date(2025, 3, 14)), Some(date(2025, 3, 16)));
    }

    #[test]
    fn date_range_iterates_inclusive() {
        let r = DateRange::new(date(2025, 3, 2), date(2025, 2, 27));
        let days: Vec<_> = r.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2025, 2, 27));
        assert!(r.contains(date(2025, 3, 2)));
    }

    #[test]
    fn lunar_state_tithi() {
        let s = LunarDayState::new(Masa::Ashvina, false, Paksha::Krishna, 15);
        assert_eq!(s.tithi(), Tithi::Amavasya);
    }

    #[test]
    fn lunar_state_json_normalizes_amavasya() {
        let s: LunarDayState =
            serde_json::from_value(json!({"masa": "ashvina", "paksha": "krishna", "tithi": 30}))
                .unwrap();
        assert_eq!(s, LunarDayState::new(Masa::Ashvina, false, Paksha::Krishna, 15));

        for bad in [
            json!({"masa": "ashvina", "paksha": "krishna", "tithi": 200}),
            json!({"masa": "ashvina", "paksha": "shukla", "tithi": 30}),
            json!({"masa": "ashvina", "paksha": "krishna", "tithi": 0}),
        ] {
            assert!(serde_json::from_value::<LunarDayState>(bad).is_err());
        }
    }
}
