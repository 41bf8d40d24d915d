//! Assembly of elements, partitions and festivals into day snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use panchang_base::{Masa, PanchangElements, Tradition, Vaar, resolve_from_sample};
use panchang_config::PanchangConfig;
use panchang_day::{DayPartitions, KaalWindows, abhijit_window, kaal_windows, partition_day};
use panchang_festival::{
    DateRange, DayCalendar, DayLookup, Festival, FestivalOccurrence, ResolvedDay, TithiPolicy,
    evaluate_festivals_with,
};
use serde::Serialize;

use crate::input::{DayInput, resolved_day};

/// Everything computed for one civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangDaySnapshot {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub masa: Masa,
    pub adhik: bool,
    pub elements: PanchangElements,
    pub partitions: DayPartitions,
    pub kaal: KaalWindows,
    pub abhijit: (DateTime<Utc>, DateTime<Utc>),
    pub festivals: Vec<FestivalOccurrence>,
}

/// `calendar` with one extra day layered on top.
struct WithDay<'a> {
    day: &'a ResolvedDay,
    rest: &'a dyn DayLookup,
}

impl DayLookup for WithDay<'_> {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        if date == self.day.date {
            Some(self.day)
        } else {
            self.rest.day(date)
        }
    }
}

/// Snapshot for `input`. `calendar` supplies neighbouring days for offset
/// festivals; the input's own day is always visible.
pub fn assemble_day(
    input: &DayInput,
    calendar: &dyn DayLookup,
    festivals: &[Festival],
    tradition: &Tradition,
    policy: &dyn TithiPolicy,
) -> PanchangDaySnapshot {
    let resolved = resolved_day(input);
    let lookup = WithDay {
        day: &resolved,
        rest: calendar,
    };
    let occurrences = evaluate_festivals_with(
        festivals,
        &lookup,
        tradition,
        DateRange::single(input.date),
        policy,
    );
    let elements = resolve_from_sample(&input.sample);
    debug!(
        "assembled {}: {} {} {}, {} festivals",
        input.date,
        elements.paksha.name(),
        elements.tithi.name(),
        elements.nakshatra.name(),
        occurrences.len()
    );
    PanchangDaySnapshot {
        date: input.date,
        vaar: input.span.vaar(),
        masa: input.masa,
        adhik: input.adhik,
        elements,
        partitions: partition_day(&input.span),
        kaal: kaal_windows(&input.span),
        abhijit: abhijit_window(&input.span),
        festivals: occurrences,
    }
}

/// Snapshots for every input, in input order.
///
/// All inputs form the calendar used for offset festivals, so an anchor
/// inside the batch is found regardless of order.
pub fn assemble_range(
    inputs: &[DayInput],
    festivals: &[Festival],
    config: &PanchangConfig,
) -> Vec<PanchangDaySnapshot> {
    let calendar: DayCalendar = inputs.iter().map(resolved_day).collect();
    inputs
        .iter()
        .map(|input| {
            assemble_day(
                input,
                &calendar,
                festivals,
                &config.tradition,
                &config.tithi_policy,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};
    use panchang_base::{AstronomicalSample, Paksha, Tithi};
    use panchang_day::DaySpan;
    use panchang_festival::{SunriseTithi, load_festivals_from_str};

    fn input(day: u32, moon: f64) -> DayInput {
        let sunrise = Utc.with_ymd_and_hms(2025, 3, day, 1, 0, 0).unwrap();
        let date = sunrise.date_naive();
        let vaar = Vaar::from_number(date.weekday().num_days_from_sunday() as u8 + 1).unwrap();
        DayInput {
            date,
            sample: AstronomicalSample::new(330.0, moon),
            span: DaySpan::new(
                sunrise,
                sunrise + Duration::hours(12),
                sunrise + Duration::hours(24),
                vaar,
            )
            .unwrap(),
            masa: Masa::Phalguna,
            adhik: false,
            solar_month: None,
            solar_day: None,
            solar_events: Vec::new(),
            later_tithis: Vec::new(),
        }
    }

    #[test]
    fn snapshot_has_all_parts() {
        let i = input(14, 145.0);
        let snap = assemble_day(
            &i,
            &DayCalendar::new(),
            &[],
            &Tradition::NorthIndian,
            &SunriseTithi,
        );
        assert_eq!(snap.elements.tithi, Tithi::Purnima);
        assert_eq!(snap.elements.paksha, Paksha::Shukla);
        assert_eq!(snap.vaar, Vaar::Shukravaar);
        assert_eq!(snap.partitions.muhurtas.len(), 30);
        assert_eq!(snap.partitions.horas.len(), 24);
        assert!(snap.festivals.is_empty());
    }

    #[test]
    fn range_resolves_offset_anchor_in_batch() {
        let festivals = load_festivals_from_str(
            r#"[
            {"id": "holi", "rule": {"type": "tithi_offset", "anchor": "holika_dahan", "daysAfter": 1}, "traditions": ["north_indian"]},
            {"id": "holika_dahan", "rule": {"type": "tithi", "masa": "phalguna", "paksha": "shukla", "tithi": 15}, "traditions": ["north_indian"]}
        ]"#,
        )
        .unwrap();
        // later day first: order of inputs must not matter
        let inputs = vec![input(15, 158.0), input(14, 145.0)];
        let snaps = assemble_range(&inputs, &festivals, &PanchangConfig::default());
        assert_eq!(snaps[0].festivals[0].festival_id, "holi");
        assert_eq!(snaps[1].festivals[0].festival_id, "holika_dahan");
    }
}
