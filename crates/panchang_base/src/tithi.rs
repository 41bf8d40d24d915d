//! Tithi (lunar day) and paksha.
//!
//! A synodic month holds 30 tithis of 12 deg Moon-Sun elongation each,
//! numbered 1-15 in the waxing (Shukla) and again in the waning (Krishna)
//! paksha. Names repeat across pakshas except for the 15th: Purnima closes
//! Shukla, Amavasya closes Krishna. Amavasya carries the sentinel ordinal 30.

use serde::{Deserialize, Serialize};

use crate::util::{normalize_360, segment_index};

/// Angular width of one tithi (360/30).
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Named tithis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// Tithis 1-14 shared by both pakshas, in order.
const SHARED_TITHIS: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

/// Fivefold grouping of tithis used in muhurta selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TithiCategory {
    Nanda,
    Bhadra,
    Jaya,
    Rikta,
    Purna,
}

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Stable ordinal: 1-15, or 30 for Amavasya.
    pub const fn number(self) -> u8 {
        match self {
            Self::Amavasya => 30,
            other => other as u8 + 1,
        }
    }

    /// Number within the paksha (1-15). Amavasya is the 15th of Krishna.
    pub const fn number_in_paksha(self) -> u8 {
        match self {
            Self::Amavasya => 15,
            other => other as u8 + 1,
        }
    }

    /// Strict lookup by ordinal in `{1..15, 30}`.
    pub const fn from_number(n: i64) -> Option<Self> {
        match n {
            1..=14 => Some(SHARED_TITHIS[(n - 1) as usize]),
            15 => Some(Self::Purnima),
            30 => Some(Self::Amavasya),
            _ => None,
        }
    }

    /// Tithi for a number within a given paksha (clamped to 1..15).
    pub const fn in_paksha(paksha: Paksha, number: u8) -> Self {
        let n = if number < 1 {
            1
        } else if number > 15 {
            15
        } else {
            number
        };
        match (paksha, n) {
            (Paksha::Shukla, 15) => Self::Purnima,
            (Paksha::Krishna, 15) => Self::Amavasya,
            _ => SHARED_TITHIS[(n - 1) as usize],
        }
    }

    pub const fn category(self) -> TithiCategory {
        match self.number_in_paksha() % 5 {
            1 => TithiCategory::Nanda,
            2 => TithiCategory::Bhadra,
            3 => TithiCategory::Jaya,
            4 => TithiCategory::Rikta,
            _ => TithiCategory::Purna,
        }
    }
}

/// Resolve a tithi ordinal, falling back to Pratipada for anything outside
/// `{1..15, 30}`.
///
/// The fallback keeps every calendar day populated; callers that need to
/// detect bad input use [`Tithi::from_number`] instead.
pub fn tithi_from_number(n: i64) -> Tithi {
    Tithi::from_number(n).unwrap_or(Tithi::Pratipada)
}

/// Resolve a position within the month (1..30) to its paksha and tithi.
///
/// 1-15 are Shukla (15 = Purnima), 16-30 are Krishna (30 = Amavasya).
/// Positions outside 1..30 follow the [`tithi_from_number`] fallback and
/// resolve to Shukla Pratipada.
pub fn tithi_from_month_number(n: i64) -> (Paksha, Tithi) {
    match n {
        1..=15 => (Paksha::Shukla, Tithi::in_paksha(Paksha::Shukla, n as u8)),
        16..=30 => (
            Paksha::Krishna,
            Tithi::in_paksha(Paksha::Krishna, (n - 15) as u8),
        ),
        _ => (Paksha::Shukla, Tithi::Pratipada),
    }
}

/// Tithi position within the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index within the month (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation elapsed within the current tithi [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiPosition {
    /// 1-based position within the month (1..30), the form karana lookup takes.
    pub const fn month_number(&self) -> u8 {
        self.tithi_index + 1
    }

    /// Whether the first half of the tithi (first karana) is running.
    pub fn is_first_half(&self) -> bool {
        self.degrees_in_tithi < TITHI_SEGMENT_DEG / 2.0
    }
}

/// Determine the tithi from Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, 30);
    let (paksha, in_paksha) = if idx < 15 {
        (Paksha::Shukla, idx + 1)
    } else {
        (Paksha::Krishna, idx - 14)
    };
    TithiPosition {
        tithi: Tithi::in_paksha(paksha, in_paksha),
        tithi_index: idx,
        paksha,
        tithi_in_paksha: in_paksha,
        degrees_in_tithi: (elong - idx as f64 * TITHI_SEGMENT_DEG).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(Tithi::Pratipada.number(), 1);
        assert_eq!(Tithi::Chaturdashi.number(), 14);
        assert_eq!(Tithi::Purnima.number(), 15);
        assert_eq!(Tithi::Amavasya.number(), 30);
    }

    #[test]
    fn strict_lookup_round_trips_all_ordinals() {
        for n in (1..=15).chain(std::iter::once(30)) {
            let t = Tithi::from_number(n).unwrap();
            assert_eq!(t.number() as i64, n);
        }
    }

    #[test]
    fn strict_lookup_rejects_gaps() {
        for n in [0, 16, 29, 31, -1] {
            assert_eq!(Tithi::from_number(n), None);
        }
    }

    #[test]
    fn unknown_number_defaults_to_pratipada() {
        assert_eq!(tithi_from_number(0), Tithi::Pratipada);
        assert_eq!(tithi_from_number(17), Tithi::Pratipada);
        assert_eq!(tithi_from_number(30), Tithi::Amavasya);
    }

    #[test]
    fn elongation_shukla_pratipada() {
        let p = tithi_from_elongation(5.0);
        assert_eq!(p.tithi, Tithi::Pratipada);
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.month_number(), 1);
        assert!(p.is_first_half());
    }

    #[test]
    fn elongation_purnima_and_amavasya() {
        assert_eq!(tithi_from_elongation(175.0).tithi, Tithi::Purnima);
        let a = tithi_from_elongation(355.0);
        assert_eq!(a.tithi, Tithi::Amavasya);
        assert_eq!(a.paksha, Paksha::Krishna);
        assert_eq!(a.tithi_in_paksha, 15);
        assert_eq!(a.month_number(), 30);
    }

    #[test]
    fn krishna_pratipada() {
        let p = tithi_from_elongation(181.0);
        assert_eq!(p.tithi, Tithi::Pratipada);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.tithi_in_paksha, 1);
        assert_eq!(p.month_number(), 16);
    }

    #[test]
    fn second_half_detection() {
        assert!(!tithi_from_elongation(18.5).is_first_half());
    }

    #[test]
    fn categories() {
        assert_eq!(Tithi::Pratipada.category(), TithiCategory::Nanda);
        assert_eq!(Tithi::Chaturthi.category(), TithiCategory::Rikta);
        assert_eq!(Tithi::Ekadashi.category(), TithiCategory::Nanda);
        assert_eq!(Tithi::Purnima.category(), TithiCategory::Purna);
        assert_eq!(Tithi::Amavasya.category(), TithiCategory::Purna);
    }

    #[test]
    fn month_numbers() {
        assert_eq!(tithi_from_month_number(1), (Paksha::Shukla, Tithi::Pratipada));
        assert_eq!(tithi_from_month_number(15), (Paksha::Shukla, Tithi::Purnima));
        assert_eq!(tithi_from_month_number(26), (Paksha::Krishna, Tithi::Ekadashi));
        assert_eq!(tithi_from_month_number(30), (Paksha::Krishna, Tithi::Amavasya));
        assert_eq!(tithi_from_month_number(0), (Paksha::Shukla, Tithi::Pratipada));
        assert_eq!(tithi_from_month_number(31), (Paksha::Shukla, Tithi::Pratipada));
    }

    #[test]
    fn in_paksha_clamps() {
        assert_eq!(Tithi::in_paksha(Paksha::Shukla, 0), Tithi::Pratipada);
        assert_eq!(Tithi::in_paksha(Paksha::Krishna, 99), Tithi::Amavasya);
    }
}
