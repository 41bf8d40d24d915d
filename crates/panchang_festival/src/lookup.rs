//! Access to resolved days by date, used to anchor offset rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::festival_types::ResolvedDay;

pub trait DayLookup {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay>;
}

impl DayLookup for BTreeMap<NaiveDate, ResolvedDay> {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.get(&date)
    }
}

impl DayLookup for [ResolvedDay] {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.iter().find(|d| d.date == date)
    }
}

impl<T: DayLookup + ?Sized> DayLookup for &T {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        (**self).day(date)
    }
}

/// Resolved days keyed by date. Later inserts replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct DayCalendar {
    days: BTreeMap<NaiveDate, ResolvedDay>,
}

impl DayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: ResolvedDay) {
        self.days.insert(day.date, day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDay> {
        self.days.values()
    }
}

impl FromIterator<ResolvedDay> for DayCalendar {
    fn from_iter<I: IntoIterator<Item = ResolvedDay>>(iter: I) -> Self {
        let mut cal = Self::new();
        for day in iter {
            cal.insert(day);
        }
        cal
    }
}

impl DayLookup for DayCalendar {
    fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.days.get(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(d: u32) -> ResolvedDay {
        ResolvedDay {
            date: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            lunar: Vec::new(),
            solar_month: None,
            solar_day: Some(d as u8),
            solar_events: Vec::new(),
        }
    }

    #[test]
    fn calendar_orders_and_replaces() {
        let mut cal: DayCalendar = [resolved(3), resolved(1)].into_iter().collect();
        let mut again = resolved(3);
        again.solar_day = Some(99);
        cal.insert(again);
        assert_eq!(cal.len(), 2);
        assert_eq!(cal.first_date(), NaiveDate::from_ymd_opt(2025, 1, 1));
        let d3 = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(cal.day(d3).unwrap().solar_day, Some(99));
    }

    #[test]
    fn slice_lookup() {
        let days = vec![resolved(5), resolved(6)];
        let d6 = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert!(days.as_slice().day(d6).is_some());
        assert!(days.as_slice().day(d6.succ_opt().unwrap()).is_none());
    }
}
