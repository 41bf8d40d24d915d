//! Equal-division partitioning of a [`DaySpan`] into muhurtas, choghadiyas
//! and horas.

use chrono::{DateTime, Utc};
use panchang_base::{
    CHOGHADIYAS_PER_HALF, HORAS_PER_HALF, MUHURTA_COUNT, MUHURTAS_PER_HALF,
    choghadiya_at_position, hora_at_index, muhurta_by_ordinal,
};
use serde::Serialize;

use crate::period::{PeriodKind, TimePeriod, current_period, split_slot};
use crate::span::DaySpan;

/// Number of choghadiyas over a full day.
pub const CHOGHADIYA_COUNT: usize = CHOGHADIYAS_PER_HALF * 2;

/// Start and end of the half that slot `i` of `per_half * 2` falls into.
fn half_bounds(
    span: &DaySpan,
    i: usize,
    per_half: usize,
) -> (DateTime<Utc>, DateTime<Utc>, usize, bool) {
    if i < per_half {
        (span.sunrise(), span.sunset(), i, true)
    } else {
        (span.sunset(), span.next_sunrise(), i - per_half, false)
    }
}

/// 15 day muhurtas from sunrise to sunset, 15 night muhurtas to next sunrise.
pub fn partition_muhurta(span: &DaySpan) -> [TimePeriod; MUHURTA_COUNT] {
    std::array::from_fn(|i| {
        let (a, b, j, is_day) = half_bounds(span, i, MUHURTAS_PER_HALF);
        let (start, end) = split_slot(a, b, j, MUHURTAS_PER_HALF);
        TimePeriod {
            label: PeriodKind::Muhurta(muhurta_by_ordinal(i as u8 + 1)),
            start,
            end,
            is_day,
        }
    })
}

/// 8 day and 8 night choghadiyas, each half starting from the weekday's
/// table entry.
pub fn partition_choghadiya(span: &DaySpan) -> [TimePeriod; CHOGHADIYA_COUNT] {
    let vaar = span.vaar();
    std::array::from_fn(|i| {
        let (a, b, j, is_day) = half_bounds(span, i, CHOGHADIYAS_PER_HALF);
        let (start, end) = split_slot(a, b, j, CHOGHADIYAS_PER_HALF);
        TimePeriod {
            label: PeriodKind::Choghadiya(choghadiya_at_position(vaar, j, is_day)),
            start,
            end,
            is_day,
        }
    })
}

/// 24 planetary hours, 12 per half.
///
/// The first hora belongs to the day ruler; the Chaldean cycle continues
/// across sunset without restarting.
pub fn partition_hora(span: &DaySpan) -> Vec<TimePeriod> {
    let vaar = span.vaar();
    (0..HORAS_PER_HALF * 2)
        .map(|i| {
            let (a, b, j, is_day) = half_bounds(span, i, HORAS_PER_HALF);
            let (start, end) = split_slot(a, b, j, HORAS_PER_HALF);
            TimePeriod {
                label: PeriodKind::Hora(hora_at_index(vaar, i)),
                start,
                end,
                is_day,
            }
        })
        .collect()
}

/// All three partitions of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPartitions {
    pub muhurtas: [TimePeriod; MUHURTA_COUNT],
    pub choghadiyas: [TimePeriod; CHOGHADIYA_COUNT],
    pub horas: Vec<TimePeriod>,
}

impl DayPartitions {
    pub fn current_muhurta(&self, instant: DateTime<Utc>) -> Option<TimePeriod> {
        current_period(&self.muhurtas, instant)
    }

    pub fn current_choghadiya(&self, instant: DateTime<Utc>) -> Option<TimePeriod> {
        current_period(&self.choghadiyas, instant)
    }

    pub fn current_hora(&self, instant: DateTime<Utc>) -> Option<TimePeriod> {
        current_period(&self.horas, instant)
    }
}

/// Muhurtas, choghadiyas and horas for `span`.
pub fn partition_day(span: &DaySpan) -> DayPartitions {
    DayPartitions {
        muhurtas: partition_muhurta(span),
        choghadiyas: partition_choghadiya(span),
        horas: partition_hora(span),
    }
}
