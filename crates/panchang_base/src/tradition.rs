//! Regional calendar traditions.
//!
//! Festival data names the traditions a festival belongs to as plain strings.
//! Known names map onto variants; anything else is preserved verbatim in
//! [`Tradition::Other`] so that data authored for a tradition this crate does
//! not know about still filters correctly.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::masa::MonthSystem;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tradition {
    NorthIndian,
    SouthIndian,
    Bengali,
    Gujarati,
    Marathi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Odia,
    Other(String),
}

impl Tradition {
    /// Canonical snake_case identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NorthIndian => "north_indian",
            Self::SouthIndian => "south_indian",
            Self::Bengali => "bengali",
            Self::Gujarati => "gujarati",
            Self::Marathi => "marathi",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Kannada => "kannada",
            Self::Malayalam => "malayalam",
            Self::Odia => "odia",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Month reckoning customarily used by the tradition.
    pub fn month_system(&self) -> MonthSystem {
        match self {
            Self::NorthIndian => MonthSystem::Purnimanta,
            _ => MonthSystem::Amanta,
        }
    }
}

impl From<&str> for Tradition {
    fn from(s: &str) -> Self {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "north_indian" | "north" => Self::NorthIndian,
            "south_indian" | "south" => Self::SouthIndian,
            "bengali" => Self::Bengali,
            "gujarati" => Self::Gujarati,
            "marathi" => Self::Marathi,
            "tamil" => Self::Tamil,
            "telugu" => Self::Telugu,
            "kannada" => Self::Kannada,
            "malayalam" => Self::Malayalam,
            "odia" | "oriya" => Self::Odia,
            _ => Self::Other(key),
        }
    }
}

impl From<String> for Tradition {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Tradition> for String {
    fn from(t: Tradition) -> Self {
        t.as_str().to_owned()
    }
}

impl Display for Tradition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_loosely() {
        assert_eq!(Tradition::from("North-Indian"), Tradition::NorthIndian);
        assert_eq!(Tradition::from(" tamil "), Tradition::Tamil);
        assert_eq!(Tradition::from("Oriya"), Tradition::Odia);
    }

    #[test]
    fn unknown_is_preserved() {
        let t = Tradition::from("Nepali");
        assert_eq!(t, Tradition::Other("nepali".into()));
        assert_eq!(t.as_str(), "nepali");
    }

    #[test]
    fn month_systems() {
        assert_eq!(Tradition::NorthIndian.month_system(), MonthSystem::Purnimanta);
        assert_eq!(Tradition::Marathi.month_system(), MonthSystem::Amanta);
    }

    #[test]
    fn display_round_trips() {
        for t in [Tradition::SouthIndian, Tradition::Other("x_y".into())] {
            assert_eq!(Tradition::from(t.to_string()), t);
        }
    }
}
