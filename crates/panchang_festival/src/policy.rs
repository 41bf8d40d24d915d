//! Which lunar states of a day a tithi rule is matched against.
//!
//! A civil day can contain zero, one or two tithi starts. The choice of
//! reference instant is a convention, so it is a parameter of evaluation.

use serde::{Deserialize, Serialize};

use crate::festival_types::{LunarDayState, ResolvedDay};

pub trait TithiPolicy: Send + Sync {
    /// Lunar states of `day` a tithi rule may match.
    fn candidates<'a>(&self, day: &'a ResolvedDay) -> &'a [LunarDayState];
}

/// Only the tithi prevailing at sunrise (udaya tithi).
#[derive(Debug, Clone, Copy, Default)]
pub struct SunriseTithi;

impl TithiPolicy for SunriseTithi {
    fn candidates<'a>(&self, day: &'a ResolvedDay) -> &'a [LunarDayState] {
        &day.lunar[..day.lunar.len().min(1)]
    }
}

/// Any tithi current at some point between sunrise and next sunrise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTithiInDay;

impl TithiPolicy for AnyTithiInDay {
    fn candidates<'a>(&self, day: &'a ResolvedDay) -> &'a [LunarDayState] {
        &day.lunar
    }
}

/// Configurable choice between the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    #[default]
    Sunrise,
    #[serde(alias = "any")]
    AnyInDay,
}

impl TithiPolicy for ReferencePolicy {
    fn candidates<'a>(&self, day: &'a ResolvedDay) -> &'a [LunarDayState] {
        match self {
            Self::Sunrise => SunriseTithi.candidates(day),
            Self::AnyInDay => AnyTithiInDay.candidates(day),
        }
    }
}
