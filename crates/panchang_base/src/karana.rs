//! Karana (half-tithi) resolution.
//!
//! A synodic month holds 60 karana slots, two per tithi. Four slots are
//! fixed (sthira): slot 0 is Kimstughna, slots 57-59 are Shakuni,
//! Chatushpada and Nagava. The remaining 56 slots cycle through seven
//! movable (chara) karanas starting at slot 1 with Bava, hence the
//! `slot - 1` in the cycle lookup.

use serde::Serialize;

use crate::tithi::TITHI_SEGMENT_DEG;
use crate::util::{normalize_360, segment_index};

/// Angular width of one karana (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = TITHI_SEGMENT_DEG / 2.0;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Nagava,
    Kimstughna,
}

/// Movable karanas in cycle order.
pub const RECURRING_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Nagava => "Nagava",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// 1-based ordinal (Bava=1 .. Kimstughna=11).
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Fixed karanas occur once per month at fixed slots.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Nagava | Self::Kimstughna
        )
    }

    /// Vishti (Bhadra) is avoided for auspicious work.
    pub const fn is_vishti(self) -> bool {
        matches!(self, Self::Vishti)
    }
}

/// Karana for a 0-based slot within the month, clamped to 0..59.
pub const fn karana_at_slot(slot: u8) -> Karana {
    match slot {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59..=u8::MAX => Karana::Nagava,
        s => RECURRING_KARANAS[((s - 1) % 7) as usize],
    }
}

/// Karana for a tithi position within the month (1..30) and half.
///
/// `slot = (tithi_number - 1) * 2 + (0 | 1)`. Tithi numbers outside 1..30
/// are clamped.
pub fn karana_from(tithi_number: i64, is_first_half: bool) -> Karana {
    let t = tithi_number.clamp(1, 30) as u8;
    let slot = (t - 1) * 2 + if is_first_half { 0 } else { 1 };
    karana_at_slot(slot)
}

/// Karana position within the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based slot within the month (0..59).
    pub karana_index: u8,
}

/// Determine the karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let idx = segment_index(normalize_360(elongation_deg), 60);
    KaranaPosition {
        karana: karana_at_slot(idx),
        karana_index: idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_boundaries() {
        assert_eq!(karana_from(1, true), Karana::Kimstughna);
        assert_eq!(karana_from(29, false), Karana::Shakuni);
        assert_eq!(karana_from(30, true), Karana::Chatushpada);
        assert_eq!(karana_from(30, false), Karana::Nagava);
    }

    #[test]
    fn recurring_starts_after_first_slot() {
        assert_eq!(karana_from(1, false), Karana::Bava);
        assert_eq!(karana_from(2, true), Karana::Balava);
        assert_eq!(karana_from(2, false), Karana::Kaulava);
        assert_eq!(karana_from(4, true), Karana::Vishti);
        assert_eq!(karana_from(4, false), Karana::Bava);
    }

    #[test]
    fn last_movable_slot_is_vishti() {
        // slot 56 -> (56 - 1) % 7 == 6
        assert_eq!(karana_from(29, true), Karana::Vishti);
    }

    #[test]
    fn each_movable_karana_occurs_eight_times() {
        for k in RECURRING_KARANAS {
            let n = (0..60u8).filter(|&s| karana_at_slot(s) == k).count();
            assert_eq!(n, 8, "{}", k.name());
        }
    }

    #[test]
    fn each_fixed_karana_occurs_once() {
        for k in [
            Karana::Kimstughna,
            Karana::Shakuni,
            Karana::Chatushpada,
            Karana::Nagava,
        ] {
            let n = (0..60u8).filter(|&s| karana_at_slot(s) == k).count();
            assert_eq!(n, 1);
            assert!(k.is_fixed());
        }
    }

    #[test]
    fn out_of_range_tithi_clamps() {
        assert_eq!(karana_from(0, true), Karana::Kimstughna);
        assert_eq!(karana_from(-5, false), Karana::Bava);
        assert_eq!(karana_from(31, false), Karana::Nagava);
    }

    #[test]
    fn elongation_slots() {
        assert_eq!(karana_from_elongation(3.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(7.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(357.0).karana, Karana::Nagava);
        assert_eq!(karana_from_elongation(357.0).karana_index, 59);
    }
}
