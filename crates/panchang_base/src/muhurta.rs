//! The 30 muhurtas of a sunrise-to-sunrise day.
//!
//! Ordinals 1-15 fall between sunrise and sunset, 16-30 between sunset and
//! the next sunrise. Unlike choghadiya and hora the sequence does not depend
//! on the weekday.

use serde::Serialize;

/// Muhurtas per sunrise-to-sunrise day.
pub const MUHURTA_COUNT: usize = 30;

/// Muhurtas in each of the day and night halves.
pub const MUHURTAS_PER_HALF: usize = MUHURTA_COUNT / 2;

/// Ordinal of Abhijit, the midday muhurta.
pub const ABHIJIT_ORDINAL: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MuhurtaNature {
    HighlyAuspicious,
    Auspicious,
    Inauspicious,
}

/// One row of the muhurta table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Muhurta {
    /// 1-based ordinal (1..30).
    pub ordinal: u8,
    pub name: &'static str,
    pub nature: MuhurtaNature,
}

impl Muhurta {
    /// Whether the muhurta falls in daylight.
    pub const fn is_day(&self) -> bool {
        self.ordinal as usize <= MUHURTAS_PER_HALF
    }

    pub const fn is_auspicious(&self) -> bool {
        !matches!(self.nature, MuhurtaNature::Inauspicious)
    }
}

const fn m(ordinal: u8, name: &'static str, nature: MuhurtaNature) -> Muhurta {
    Muhurta {
        ordinal,
        name,
        nature,
    }
}

use MuhurtaNature::{Auspicious as A, HighlyAuspicious as H, Inauspicious as I};

/// Fixed ordinal table.
pub const MUHURTA_TABLE: [Muhurta; MUHURTA_COUNT] = [
    m(1, "Rudra", I),
    m(2, "Ahi", I),
    m(3, "Mitra", A),
    m(4, "Pitri", I),
    m(5, "Vasu", A),
    m(6, "Varaha", A),
    m(7, "Vishvedeva", A),
    m(8, "Abhijit", H),
    m(9, "Satamukhi", A),
    m(10, "Puruhuta", I),
    m(11, "Vahini", I),
    m(12, "Naktanakara", I),
    m(13, "Varuna", A),
    m(14, "Aryaman", A),
    m(15, "Bhaga", I),
    m(16, "Girisha", I),
    m(17, "Ajapada", I),
    m(18, "Ahirbudhnya", A),
    m(19, "Pushya", A),
    m(20, "Ashvini", A),
    m(21, "Yama", I),
    m(22, "Agni", A),
    m(23, "Vidhatri", A),
    m(24, "Kanda", A),
    m(25, "Aditi", A),
    m(26, "Jiva", A),
    m(27, "Vishnu", A),
    m(28, "Dyumadgadyuti", A),
    m(29, "Brahma", A),
    m(30, "Samudra", A),
];

/// Muhurta by 1-based ordinal, clamped to 1..30.
pub const fn muhurta_by_ordinal(ordinal: u8) -> Muhurta {
    let i = if ordinal < 1 {
        0
    } else if ordinal as usize > MUHURTA_COUNT {
        MUHURTA_COUNT - 1
    } else {
        ordinal as usize - 1
    };
    MUHURTA_TABLE[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_sequential() {
        for (i, row) in MUHURTA_TABLE.iter().enumerate() {
            assert_eq!(row.ordinal as usize, i + 1);
        }
    }

    #[test]
    fn abhijit_is_the_only_highly_auspicious() {
        let highs: Vec<_> = MUHURTA_TABLE
            .iter()
            .filter(|r| r.nature == MuhurtaNature::HighlyAuspicious)
            .collect();
        assert_eq!(highs.len(), 1);
        assert_eq!(highs[0].ordinal, ABHIJIT_ORDINAL);
        assert_eq!(muhurta_by_ordinal(ABHIJIT_ORDINAL).name, "Abhijit");
    }

    #[test]
    fn halves() {
        assert!(muhurta_by_ordinal(15).is_day());
        assert!(!muhurta_by_ordinal(16).is_day());
    }

    #[test]
    fn clamps() {
        assert_eq!(muhurta_by_ordinal(0).ordinal, 1);
        assert_eq!(muhurta_by_ordinal(99).ordinal, 30);
    }
}
