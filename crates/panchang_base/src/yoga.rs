//! Yoga (luni-solar yoga) from the sum of Sun and Moon sidereal longitudes.
//!
//! Same bucket as the nakshatra lookup, applied to `(sun + moon) mod 360`.

use serde::Serialize;

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::{normalize_360, segment_index};

/// Angular width of one yoga segment (360/27).
pub const YOGA_SEGMENT_DEG: f64 = NAKSHATRA_SPAN;

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkambha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based ordinal.
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// Whether the yoga is considered favourable for new undertakings.
    ///
    /// Nine yogas are traditionally inauspicious.
    pub const fn is_auspicious(self) -> bool {
        !matches!(
            self,
            Self::Vishkambha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }
}

/// Yoga position within the 27-fold division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based index (0..26).
    pub yoga_index: u8,
    /// Degrees elapsed within the current yoga segment.
    pub degrees_in_yoga: f64,
}

/// Determine the yoga from `(sun_sid + moon_sid) mod 360`.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sidereal_sum_deg);
    let idx = segment_index(sum, 27);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        degrees_in_yoga: (sum - idx as f64 * YOGA_SEGMENT_DEG).max(0.0),
    }
}

/// Determine the yoga from separate Sun and Moon sidereal longitudes.
pub fn yoga_from_longitudes(sun_sidereal_deg: f64, moon_sidereal_deg: f64) -> YogaPosition {
    yoga_from_sum(normalize_360(sun_sidereal_deg) + normalize_360(moon_sidereal_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
        }
    }

    #[test]
    fn sum_zero_is_vishkambha() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
    }

    #[test]
    fn sum_wraps() {
        // 200 + 170 = 370 -> 10 deg
        let p = yoga_from_longitudes(200.0, 170.0);
        assert_eq!(p.yoga, Yoga::Vishkambha);
        assert!((p.degrees_in_yoga - 10.0).abs() < 1e-9);
    }

    #[test]
    fn last_segment() {
        assert_eq!(yoga_from_sum(359.9).yoga, Yoga::Vaidhriti);
    }

    #[test]
    fn nine_inauspicious() {
        let bad = ALL_YOGAS.iter().filter(|y| !y.is_auspicious()).count();
        assert_eq!(bad, 9);
    }
}
