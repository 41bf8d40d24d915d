//! Sunrise-to-sunrise day span.

use chrono::{DateTime, Duration, Utc};
use panchang_base::Vaar;
use serde::Serialize;

use crate::error::{DayError, MAX_HALF_SPAN_HOURS};

/// A Vedic day: sunrise to sunset (day half) and sunset to next sunrise
/// (night half), labelled with the weekday of the sunrise.
///
/// The constructor guarantees `sunrise < sunset < next_sunrise` and that
/// neither half exceeds [`MAX_HALF_SPAN_HOURS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySpan {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
    vaar: Vaar,
}

impl DaySpan {
    pub fn new(
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
        vaar: Vaar,
    ) -> Result<Self, DayError> {
        if sunset <= sunrise {
            return Err(DayError::SunsetNotAfterSunrise { sunrise, sunset });
        }
        if next_sunrise <= sunset {
            return Err(DayError::NextSunriseNotAfterSunset {
                sunset,
                next_sunrise,
            });
        }
        let limit = Duration::hours(MAX_HALF_SPAN_HOURS);
        for (half, d) in [("day", sunset - sunrise), ("night", next_sunrise - sunset)] {
            if d > limit {
                return Err(DayError::HalfTooLong {
                    half,
                    hours: d.num_hours(),
                });
            }
        }
        Ok(Self {
            sunrise,
            sunset,
            next_sunrise,
            vaar,
        })
    }

    /// Same as [`DaySpan::new`] with a raw weekday number (1 = Sunday .. 7 = Saturday).
    pub fn from_weekday_number(
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
        weekday: u8,
    ) -> Result<Self, DayError> {
        let vaar = Vaar::from_number(weekday).ok_or(DayError::InvalidWeekday(weekday))?;
        Self::new(sunrise, sunset, next_sunrise, vaar)
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn next_sunrise(&self) -> DateTime<Utc> {
        self.next_sunrise
    }

    pub fn vaar(&self) -> Vaar {
        self.vaar
    }

    /// Sunrise to sunset.
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// Sunset to next sunrise.
    pub fn night_length(&self) -> Duration {
        self.next_sunrise - self.sunset
    }

    /// Whether `instant` lies in `[sunrise, next_sunrise)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant < self.next_sunrise
    }
}
