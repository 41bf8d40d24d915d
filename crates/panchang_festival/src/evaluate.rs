//! Matching festival rules against resolved days.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use log::{debug, trace};
use panchang_base::{MonthSystem, Tradition};

use crate::festival_types::{DateRange, Festival, FestivalOccurrence, ResolvedDay};
use crate::lookup::DayLookup;
use crate::policy::{SunriseTithi, TithiPolicy};
use crate::rule::FestivalRule;

/// Deepest chain of offset rules followed before giving up.
pub const MAX_ANCHOR_DEPTH: usize = 8;

/// Whether `rule` holds on `day`, ignoring offset rules (which need other
/// days) and unrecognized rules (which never hold). Tithi rules without a
/// month system name their masa in `default_system`.
pub fn rule_matches_day(
    rule: &FestivalRule,
    day: &ResolvedDay,
    policy: &dyn TithiPolicy,
    default_system: MonthSystem,
) -> bool {
    match rule {
        FestivalRule::TithiBased {
            masa,
            paksha,
            tithi,
            month_system,
            adhik,
        } => {
            let system = month_system.unwrap_or(default_system);
            policy.candidates(day).iter().any(|s| {
                s.adhik == *adhik
                    && s.paksha == *paksha
                    && s.tithi == *tithi
                    && s.masa.in_system(s.paksha, system) == *masa
            })
        }
        FestivalRule::SolarEvent { event } => day.solar_events.contains(event),
        FestivalRule::FixedSolarDate {
            solar_month,
            solar_day,
        } => day.solar_month == Some(*solar_month) && day.solar_day == Some(*solar_day),
        FestivalRule::TithiOffset { .. } | FestivalRule::Unrecognized { .. } => false,
    }
}

/// Festival list indexed by id for anchor resolution.
pub struct FestivalEvaluator<'a> {
    festivals: &'a [Festival],
    by_id: HashMap<&'a str, usize>,
    policy: &'a dyn TithiPolicy,
}

impl<'a> FestivalEvaluator<'a> {
    pub fn new(festivals: &'a [Festival], policy: &'a dyn TithiPolicy) -> Self {
        let mut by_id = HashMap::with_capacity(festivals.len());
        for (i, f) in festivals.iter().enumerate() {
            // first definition wins
            by_id.entry(f.id.as_str()).or_insert(i);
        }
        Self {
            festivals,
            by_id,
            policy,
        }
    }

    pub fn festival(&self, id: &str) -> Option<&'a Festival> {
        self.by_id.get(id).map(|&i| &self.festivals[i])
    }

    /// Whether `festival` starts on `date`, reading unqualified tithi rules
    /// in `tradition`'s month system. The tradition filter is not applied.
    pub fn falls_on(
        &self,
        festival: &Festival,
        lookup: &dyn DayLookup,
        date: NaiveDate,
        tradition: &Tradition,
    ) -> bool {
        let mut chain = Vec::new();
        self.falls_on_inner(festival, lookup, date, tradition.month_system(), &mut chain)
    }

    fn falls_on_inner<'f>(
        &self,
        festival: &'f Festival,
        lookup: &dyn DayLookup,
        date: NaiveDate,
        system: MonthSystem,
        chain: &mut Vec<&'f str>,
    ) -> bool
    where
        'a: 'f,
    {
        match &festival.rule {
            FestivalRule::TithiOffset {
                anchor,
                offset_days,
            } => {
                if chain.len() >= MAX_ANCHOR_DEPTH || chain.contains(&festival.id.as_str()) {
                    debug!(
                        "festival {}: anchor chain via {anchor} cycles or exceeds depth",
                        festival.id
                    );
                    return false;
                }
                let Some(anchor_festival) = self.festival(anchor) else {
                    trace!("festival {}: anchor {anchor} not defined", festival.id);
                    return false;
                };
                let Some(anchor_date) = Duration::try_days(*offset_days)
                    .and_then(|d| date.checked_sub_signed(d))
                else {
                    return false;
                };
                chain.push(festival.id.as_str());
                let hit = self.falls_on_inner(anchor_festival, lookup, anchor_date, system, chain);
                chain.pop();
                hit
            }
            rule => lookup
                .day(date)
                .is_some_and(|day| rule_matches_day(rule, day, self.policy, system)),
        }
    }

    /// Occurrence of `festival` starting on `date` under `tradition`.
    pub fn occurrence_on(
        &self,
        festival: &Festival,
        lookup: &dyn DayLookup,
        date: NaiveDate,
        tradition: &Tradition,
    ) -> Option<FestivalOccurrence> {
        if !festival.observed_in(tradition) || !self.falls_on(festival, lookup, date, tradition) {
            return None;
        }
        trace!("festival {} on {date}", festival.id);
        Some(FestivalOccurrence {
            festival_id: festival.id.clone(),
            date,
            end_date: festival.end_date(date),
        })
    }

    /// Occurrences in `range`, ordered by date and then by list position.
    pub fn evaluate(
        &self,
        lookup: &dyn DayLookup,
        tradition: &Tradition,
        range: DateRange,
    ) -> Vec<FestivalOccurrence> {
        for f in self.festivals.iter().filter(|f| !f.rule.is_recognized()) {
            debug!("festival {}: unrecognized rule `{}`, skipped", f.id, f.rule.kind());
        }
        range
            .days()
            .flat_map(move |date| {
                self.festivals
                    .iter()
                    .filter_map(move |f| self.occurrence_on(f, lookup, date, tradition))
            })
            .collect()
    }
}

/// Occurrences of `festivals` over `range`, matching tithis at sunrise.
pub fn evaluate_festivals(
    festivals: &[Festival],
    days: &dyn DayLookup,
    tradition: &Tradition,
    range: DateRange,
) -> Vec<FestivalOccurrence> {
    evaluate_festivals_with(festivals, days, tradition, range, &SunriseTithi)
}

/// [`evaluate_festivals`] with an explicit tithi reference policy.
pub fn evaluate_festivals_with(
    festivals: &[Festival],
    days: &dyn DayLookup,
    tradition: &Tradition,
    range: DateRange,
    policy: &dyn TithiPolicy,
) -> Vec<FestivalOccurrence> {
    FestivalEvaluator::new(festivals, policy).evaluate(days, tradition, range)
}
