//! Vaar (weekday) and its ruling graha.
//!
//! Weekdays are numbered 1 = Sunday .. 7 = Saturday. Every rotation table in
//! this crate is keyed by [`Vaar`], so a lookup can never fall outside the
//! table; raw numbers are checked once by [`Vaar::from_number`].

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index (Sunday=0 .. Saturday=6), the key into rotation tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1-based weekday number (Sunday=1 .. Saturday=7).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Vaar for a weekday number 1..7, `None` otherwise.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 7 {
            Some(ALL_VAARS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Ruling graha of the day, also the lord of its first hora.
    pub const fn day_ruler(self) -> Graha {
        DAY_RULERS[self.index()]
    }
}

/// Day ruler keyed by weekday index (Sunday=0).
pub const DAY_RULERS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for v in ALL_VAARS {
            assert_eq!(Vaar::from_number(v.number()), Some(v));
        }
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(Vaar::from_number(0), None);
        assert_eq!(Vaar::from_number(8), None);
    }

    #[test]
    fn rulers() {
        assert_eq!(Vaar::Ravivaar.day_ruler(), Graha::Surya);
        assert_eq!(Vaar::Somvaar.day_ruler(), Graha::Chandra);
        assert_eq!(Vaar::Shanivaar.day_ruler(), Graha::Shani);
    }
}
