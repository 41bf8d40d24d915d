//! Labelled time periods and equal-division helpers.

use chrono::{DateTime, Duration, Utc};
use panchang_base::{Choghadiya, Graha, Muhurta};
use serde::Serialize;

/// What a [`TimePeriod`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PeriodKind {
    Muhurta(Muhurta),
    Choghadiya(Choghadiya),
    Hora(Graha),
}

impl PeriodKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Muhurta(m) => m.name,
            Self::Choghadiya(c) => c.name(),
            Self::Hora(g) => g.name(),
        }
    }
}

/// A labelled half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    pub label: PeriodKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Whether the period belongs to the sunrise-to-sunset half.
    pub is_day: bool,
}

impl TimePeriod {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// First period containing `instant`, if any.
pub fn current_period(periods: &[TimePeriod], instant: DateTime<Utc>) -> Option<TimePeriod> {
    periods.iter().find(|p| p.contains(instant)).copied()
}

/// Boundary `i` of `[start, end)` divided into `n` equal parts.
///
/// Integer nanoseconds: boundary `n` is exactly `end`, so slot durations sum
/// to the span without drift.
pub(crate) fn split_boundary(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    i: usize,
    n: usize,
) -> DateTime<Utc> {
    if i >= n {
        return end;
    }
    let total = span_nanos(start, end);
    let offset = total * i as i128 / n as i128;
    // offset <= total, and total came from a valid Duration
    start + Duration::nanoseconds(offset as i64)
}

fn span_nanos(start: DateTime<Utc>, end: DateTime<Utc>) -> i128 {
    let d = end - start;
    match d.num_nanoseconds() {
        Some(n) => i128::from(n),
        // beyond ~292 years; fall back to microsecond resolution
        None => i128::from(d.num_microseconds().unwrap_or(i64::MAX)) * 1_000,
    }
}

/// Slot `i` of `[start, end)` divided into `n` equal parts.
pub(crate) fn split_slot(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    i: usize,
    n: usize,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        split_boundary(start, end, i, n),
        split_boundary(start, end, i + 1, n),
    )
}
