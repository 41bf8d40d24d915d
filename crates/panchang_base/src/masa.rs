//! Masa (lunar month) and month-reckoning systems.
//!
//! Masas are named in the Amanta convention (new moon to new moon). In the
//! Purnimanta convention the month turns at full moon, so the Krishna paksha
//! carries the name of the following Amanta month.

use serde::{Deserialize, Serialize};

use crate::tithi::Paksha;

/// The 12 lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order.
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

/// How lunar months are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSystem {
    /// Month ends at new moon.
    #[default]
    Amanta,
    /// Month ends at full moon.
    Purnimanta,
}

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Masa for a 1-based month number, `None` outside 1..12.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 {
            Some(ALL_MASAS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// The following masa, Phalguna wrapping to Chaitra.
    pub const fn next(self) -> Self {
        ALL_MASAS[((self.index() + 1) % 12) as usize]
    }

    /// Name of this Amanta month as reckoned in `system` during `paksha`.
    pub const fn in_system(self, paksha: Paksha, system: MonthSystem) -> Self {
        match (system, paksha) {
            (MonthSystem::Purnimanta, Paksha::Krishna) => self.next(),
            _ => self,
        }
    }
}
