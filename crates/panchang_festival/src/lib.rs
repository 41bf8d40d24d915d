//! Festival rule evaluation.
//!
//! Festivals are defined by tithi, solar event, fixed solar date or an
//! offset from another festival. The evaluator matches them against
//! [`ResolvedDay`]s supplied by the caller, filtered by tradition, and
//! returns occurrences in a deterministic order.

pub mod error;
pub mod evaluate;
pub mod festival_types;
pub mod loader;
pub mod lookup;
pub mod policy;
pub mod rule;

pub use error::FestivalError;
pub use evaluate::{
    FestivalEvaluator, MAX_ANCHOR_DEPTH, evaluate_festivals, evaluate_festivals_with,
    rule_matches_day,
};
pub use festival_types::{
    DateRange, Festival, FestivalCategory, FestivalOccurrence, LunarDayState, ResolvedDay,
};
pub use loader::{load_festivals_from_path, load_festivals_from_str};
pub use lookup::{DayCalendar, DayLookup};
pub use policy::{AnyTithiInDay, ReferencePolicy, SunriseTithi, TithiPolicy};
pub use rule::{FestivalRule, SolarEvent};
