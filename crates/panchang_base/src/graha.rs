//! The seven classical grahas and the Chaldean order used by hora.
//!
//! Rahu and Ketu carry no hora or weekday lordship; they appear only as
//! nakshatra lords.

use serde::Serialize;

/// Vedic grahas: the seven classical planets plus the lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// The 7 classical grahas (sapta grahas), in weekday order.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Chaldean order: slowest to fastest apparent motion.
///
/// Successive horas step forward through this sequence with wraparound.
pub const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Position in [`CHALDEAN_ORDER`], `None` for the lunar nodes.
    pub const fn chaldean_index(self) -> Option<u8> {
        match self {
            Self::Shani => Some(0),
            Self::Guru => Some(1),
            Self::Mangal => Some(2),
            Self::Surya => Some(3),
            Self::Shukra => Some(4),
            Self::Buddh => Some(5),
            Self::Chandra => Some(6),
            Self::Rahu | Self::Ketu => None,
        }
    }
}
