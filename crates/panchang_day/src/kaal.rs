//! Rahu Kaal, Yamaganda, Gulika and Abhijit windows.

use chrono::{DateTime, Utc};
use panchang_base::{ABHIJIT_ORDINAL, KAAL_PARTS, Kaal, MUHURTAS_PER_HALF};
use serde::Serialize;

use crate::period::split_slot;
use crate::span::DaySpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KaalWindow {
    pub kaal: Kaal,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KaalWindows {
    pub rahu_kaal: KaalWindow,
    pub yamaganda: KaalWindow,
    pub gulika: KaalWindow,
}

/// Window of `kaal`: the weekday's eighth of sunrise-to-sunset.
pub fn kaal_window(span: &DaySpan, kaal: Kaal) -> KaalWindow {
    let segment = kaal.segment(span.vaar()).clamp(1, KAAL_PARTS as u8) as usize;
    let (start, end) = split_slot(span.sunrise(), span.sunset(), segment - 1, KAAL_PARTS);
    KaalWindow { kaal, start, end }
}

pub fn kaal_windows(span: &DaySpan) -> KaalWindows {
    KaalWindows {
        rahu_kaal: kaal_window(span, Kaal::RahuKaal),
        yamaganda: kaal_window(span, Kaal::Yamaganda),
        gulika: kaal_window(span, Kaal::Gulika),
    }
}

/// Abhijit muhurta (the eighth of fifteen daytime muhurtas), as `(start, end)`.
pub fn abhijit_window(span: &DaySpan) -> (DateTime<Utc>, DateTime<Utc>) {
    split_slot(
        span.sunrise(),
        span.sunset(),
        ABHIJIT_ORDINAL as usize - 1,
        MUHURTAS_PER_HALF,
    )
}
