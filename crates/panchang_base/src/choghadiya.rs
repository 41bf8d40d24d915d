//! Choghadiya: eight day and eight night periods with a quality rating.
//!
//! Both halves walk the same seven-entry cycle one step per period, starting
//! from a weekday-specific offset.

use serde::Serialize;

use crate::graha::Graha;
use crate::vaar::Vaar;

/// Periods in each of the day and night halves.
pub const CHOGHADIYAS_PER_HALF: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Choghadiya {
    Udvegh,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// Quality of a choghadiya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChoghadiyaQuality {
    Good,
    Neutral,
    Bad,
}

/// The rotation cycle.
pub const CHOGHADIYA_CYCLE: [Choghadiya; 7] = [
    Choghadiya::Udvegh,
    Choghadiya::Char,
    Choghadiya::Labh,
    Choghadiya::Amrit,
    Choghadiya::Kaal,
    Choghadiya::Shubh,
    Choghadiya::Rog,
];

/// Offset into [`CHOGHADIYA_CYCLE`] of the first day period, by weekday (Sunday first).
pub const CHOGHADIYA_DAY_START: [u8; 7] = [0, 3, 6, 2, 5, 1, 4];

/// Offset into [`CHOGHADIYA_CYCLE`] of the first night period, by weekday.
pub const CHOGHADIYA_NIGHT_START: [u8; 7] = [5, 1, 4, 0, 3, 6, 2];

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udvegh => "Udvegh",
            Self::Char => "Char",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn quality(self) -> ChoghadiyaQuality {
        match self {
            Self::Amrit | Self::Shubh | Self::Labh => ChoghadiyaQuality::Good,
            Self::Char => ChoghadiyaQuality::Neutral,
            Self::Udvegh | Self::Kaal | Self::Rog => ChoghadiyaQuality::Bad,
        }
    }

    pub const fn ruler(self) -> Graha {
        match self {
            Self::Udvegh => Graha::Surya,
            Self::Char => Graha::Shukra,
            Self::Labh => Graha::Buddh,
            Self::Amrit => Graha::Chandra,
            Self::Kaal => Graha::Shani,
            Self::Shubh => Graha::Guru,
            Self::Rog => Graha::Mangal,
        }
    }
}

/// Choghadiya at 0-based `position` within the day (`is_day`) or night half.
pub const fn choghadiya_at_position(vaar: Vaar, position: usize, is_day: bool) -> Choghadiya {
    let start = if is_day {
        CHOGHADIYA_DAY_START[vaar.index()]
    } else {
        CHOGHADIYA_NIGHT_START[vaar.index()]
    };
    CHOGHADIYA_CYCLE[(start as usize + position) % 7]
}
