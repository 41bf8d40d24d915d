//! Error types for day-span construction.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Longest accepted day or night half, in hours.
pub const MAX_HALF_SPAN_HOURS: i64 = 48;

/// Errors from building a [`crate::DaySpan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DayError {
    /// Sunset does not come after sunrise.
    #[error("sunset {sunset} is not after sunrise {sunrise}")]
    SunsetNotAfterSunrise {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Next sunrise does not come after sunset.
    #[error("next sunrise {next_sunrise} is not after sunset {sunset}")]
    NextSunriseNotAfterSunset {
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    },
    /// Day or night half is implausibly long (polar day or bad input).
    #[error("{half} lasts {hours} h, more than {} h", MAX_HALF_SPAN_HOURS)]
    HalfTooLong { half: &'static str, hours: i64 },
    /// Weekday number outside 1 (Sunday) ..= 7 (Saturday).
    #[error("weekday {0} outside 1..=7")]
    InvalidWeekday(u8),
}
