//! Rahu Kaal, Yamaganda and Gulika Kaal.
//!
//! Daylight is divided into eight equal parts; each of these windows occupies
//! one part, chosen by weekday.

use serde::Serialize;

use crate::vaar::Vaar;

/// Parts the daylight interval is divided into.
pub const KAAL_PARTS: usize = 8;

/// Inauspicious daytime windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kaal {
    RahuKaal,
    Yamaganda,
    Gulika,
}

/// 1-based eighth of daylight holding Rahu Kaal, Sunday first.
pub const RAHU_KAAL_SEGMENT: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];

/// 1-based eighth of daylight holding Yamaganda, Sunday first.
pub const YAMAGANDA_SEGMENT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// 1-based eighth of daylight holding Gulika Kaal, Sunday first.
pub const GULIKA_SEGMENT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

impl Kaal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika Kaal",
        }
    }

    /// 1-based eighth of daylight occupied on `vaar`.
    pub const fn segment(self, vaar: Vaar) -> u8 {
        let table = match self {
            Self::RahuKaal => &RAHU_KAAL_SEGMENT,
            Self::Yamaganda => &YAMAGANDA_SEGMENT,
            Self::Gulika => &GULIKA_SEGMENT,
        };
        table[vaar.index()]
    }
}
