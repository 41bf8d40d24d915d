//! Festival rules and their lenient JSON representation.
//!
//! Rules are authored externally. Anything that does not parse into one of
//! the known shapes becomes [`FestivalRule::Unrecognized`], which never
//! matches, instead of failing the whole data set.

use std::fmt::{Display, Formatter};

use panchang_base::{ALL_RASHIS, Masa, MonthSystem, Paksha, Rashi};
use serde::{Deserialize, Serialize};

/// Named solar events supplied by the astronomy layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SolarEvent {
    /// Sun enters the given rashi.
    Sankranti(Rashi),
    VernalEquinox,
    SummerSolstice,
    AutumnalEquinox,
    WinterSolstice,
}

impl SolarEvent {
    /// Stable snake_case id, e.g. `makara_sankranti`.
    pub fn id(&self) -> String {
        match self {
            Self::Sankranti(r) => format!("{}_sankranti", r.name().to_ascii_lowercase()),
            Self::VernalEquinox => "vernal_equinox".to_string(),
            Self::SummerSolstice => "summer_solstice".to_string(),
            Self::AutumnalEquinox => "autumnal_equinox".to_string(),
            Self::WinterSolstice => "winter_solstice".to_string(),
        }
    }

    /// Parse an event id. Accepts the common short forms `makar`, `karkat`
    /// and `mesh` for sankrantis.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match id.as_str() {
            "vernal_equinox" | "spring_equinox" => return Some(Self::VernalEquinox),
            "summer_solstice" => return Some(Self::SummerSolstice),
            "autumnal_equinox" | "autumn_equinox" => return Some(Self::AutumnalEquinox),
            "winter_solstice" => return Some(Self::WinterSolstice),
            _ => {}
        }
        let sign = id.strip_suffix("_sankranti")?;
        let rashi = match sign {
            "makar" => Rashi::Makara,
            "karkat" | "karka" | "karkata" => Rashi::Karka,
            "mesh" => Rashi::Mesha,
            other => *ALL_RASHIS
                .iter()
                .find(|r| r.name().eq_ignore_ascii_case(other))?,
        };
        Some(Self::Sankranti(rashi))
    }
}

impl Display for SolarEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

impl TryFrom<String> for SolarEvent {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_id(&value).ok_or_else(|| format!("unknown solar event `{value}`"))
    }
}

impl From<SolarEvent> for String {
    fn from(value: SolarEvent) -> Self {
        value.id()
    }
}

/// When a festival falls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum FestivalRule {
    /// A tithi of a lunar month. `masa` is named in `month_system`, or in
    /// the evaluated tradition's system when unset; `tithi` is 1..=15
    /// within the paksha (15 of Krishna is Amavasya).
    TithiBased {
        masa: Masa,
        paksha: Paksha,
        tithi: u8,
        month_system: Option<MonthSystem>,
        adhik: bool,
    },
    SolarEvent {
        event: SolarEvent,
    },
    /// Signed day offset from another festival: positive is after the anchor.
    TithiOffset {
        anchor: String,
        offset_days: i64,
    },
    FixedSolarDate {
        solar_month: Rashi,
        solar_day: u8,
    },
    /// Unknown `type` or malformed fields; never matches.
    Unrecognized {
        kind: Option<String>,
    },
}

impl FestivalRule {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }

    /// The `type` tag this rule was written with.
    pub fn kind(&self) -> &str {
        match self {
            Self::TithiBased { .. } => "tithi",
            Self::SolarEvent { .. } => "solar_event",
            Self::TithiOffset { .. } => "tithi_offset",
            Self::FixedSolarDate { .. } => "fixed_solar_date",
            Self::Unrecognized { kind } => kind.as_deref().unwrap_or("<missing>"),
        }
    }
}

/// Wire form of a rule. Field names follow the camelCase festival data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
enum RuleRepr {
    #[serde(alias = "tithi_based", alias = "lunar")]
    Tithi {
        #[serde(alias = "month")]
        masa: Masa,
        paksha: Paksha,
        tithi: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        month_system: Option<MonthSystem>,
        #[serde(default, skip_serializing_if = "is_false")]
        adhik: bool,
    },
    #[serde(alias = "solar")]
    SolarEvent { event: SolarEvent },
    #[serde(alias = "offset")]
    TithiOffset {
        anchor: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        days_before: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        days_after: Option<i64>,
    },
    #[serde(alias = "solar_date")]
    FixedSolarDate { solar_month: u8, solar_day: u8 },
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Tithi within its paksha, accepting 30 for Amavasya.
pub(crate) fn normalize_tithi(paksha: Paksha, tithi: u8) -> Option<u8> {
    match (paksha, tithi) {
        (_, 1..=15) => Some(tithi),
        (Paksha::Krishna, 30) => Some(15),
        _ => None,
    }
}

impl RuleRepr {
    fn into_rule(self) -> Option<FestivalRule> {
        match self {
            Self::Tithi {
                masa,
                paksha,
                tithi,
                month_system,
                adhik,
            } => {
                let tithi = normalize_tithi(paksha, tithi)?;
                Some(FestivalRule::TithiBased {
                    masa,
                    paksha,
                    tithi,
                    month_system,
                    adhik,
                })
            }
            Self::SolarEvent { event } => Some(FestivalRule::SolarEvent { event }),
            Self::TithiOffset {
                anchor,
                days_before,
                days_after,
            } => {
                let offset_days = match (days_before, days_after) {
                    (None, Some(after)) => after,
                    (Some(before), None) => -before,
                    _ => return None,
                };
                (!anchor.is_empty()).then_some(FestivalRule::TithiOffset {
                    anchor,
                    offset_days,
                })
            }
            Self::FixedSolarDate {
                solar_month,
                solar_day,
            } => {
                let solar_month = Rashi::from_month_number(solar_month)?;
                (1..=32)
                    .contains(&solar_day)
                    .then_some(FestivalRule::FixedSolarDate {
                        solar_month,
                        solar_day,
                    })
            }
        }
    }
}

impl From<serde_json::Value> for FestivalRule {
    fn from(value: serde_json::Value) -> Self {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        serde_json::from_value::<RuleRepr>(value)
            .ok()
            .and_then(RuleRepr::into_rule)
            .unwrap_or(Self::Unrecognized { kind })
    }
}

impl RuleRepr {
    /// Wire form of a recognized rule; `None` for [`FestivalRule::Unrecognized`].
    fn from_rule(rule: &FestivalRule) -> Option<Self> {
        let repr = match rule {
            FestivalRule::TithiBased {
                masa,
                paksha,
                tithi,
                month_system,
                adhik,
            } => Self::Tithi {
                masa: *masa,
                paksha: *paksha,
                tithi: *tithi,
                month_system: *month_system,
                adhik: *adhik,
            },
            FestivalRule::SolarEvent { event } => Self::SolarEvent { event: *event },
            FestivalRule::TithiOffset {
                anchor,
                offset_days,
            } => {
                let (days_before, days_after) = if *offset_days < 0 {
                    (Some(-offset_days), None)
                } else {
                    (None, Some(*offset_days))
                };
                Self::TithiOffset {
                    anchor: anchor.clone(),
                    days_before,
                    days_after,
                }
            }
            FestivalRule::FixedSolarDate {
                solar_month,
                solar_day,
            } => Self::FixedSolarDate {
                solar_month: solar_month.month_number(),
                solar_day: *solar_day,
            },
            FestivalRule::Unrecognized { .. } => return None,
        };
        Some(repr)
    }
}

impl Serialize for FestivalRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match (RuleRepr::from_rule(self), self) {
            (Some(repr), _) => repr.serialize(serializer),
            (None, Self::Unrecognized { kind }) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", kind)?;
                map.end()
            }
            (None, _) => serializer.serialize_none(),
        }
    }
}
