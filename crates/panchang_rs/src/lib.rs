//! Convenience facade over the panchang crates.
//!
//! Combines element resolution, day partitioning and festival evaluation
//! into one [`PanchangDaySnapshot`] per date. Astronomical inputs (sidereal
//! longitudes, sunrise and sunset instants, solar events) are supplied by
//! the caller as [`DayInput`]s.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use panchang_rs::*;
//!
//! let config = load_or_default(None)?;
//! let festivals = config.load_festivals()?;
//! let inputs = load_day_inputs_from_path("days.json")?;
//! for snap in assemble_range(&inputs, &festivals, &config) {
//!     println!("{} {}", snap.date, snap.elements.tithi.name());
//! }
//! ```

pub mod assemble;
pub mod error;
pub mod input;

pub use assemble::{PanchangDaySnapshot, assemble_day, assemble_range};
pub use error::PanchangError;
pub use input::{DayInput, load_day_inputs_from_path, load_day_inputs_from_str, resolved_day};

// Re-export the component crates' primary API so callers need only this crate.
pub use panchang_base::{
    AstronomicalSample, Choghadiya, Graha, Karana, Masa, MonthSystem, Muhurta, MuhurtaNature,
    Nakshatra, NakshatraInfo, Paksha, PanchangElements, Rashi, Tithi, Tradition, Vaar, Yoga,
    karana_from, nakshatra_from_longitude, resolve_elements, resolve_from_sample,
    tithi_from_elongation, tithi_from_number, yoga_from_longitudes, yoga_from_sum,
};
pub use panchang_config::{ConfigError, PanchangConfig, load_config, load_or_default};
pub use panchang_day::{
    DayError, DayPartitions, DaySpan, KaalWindow, KaalWindows, PeriodKind, TimePeriod,
    abhijit_window, current_period, kaal_windows, partition_choghadiya, partition_day,
    partition_hora, partition_muhurta,
};
pub use panchang_festival::{
    AnyTithiInDay, DateRange, DayCalendar, DayLookup, Festival, FestivalError,
    FestivalOccurrence, FestivalRule, LunarDayState, ReferencePolicy, ResolvedDay, SolarEvent,
    SunriseTithi, TithiPolicy, evaluate_festivals, evaluate_festivals_with,
    load_festivals_from_path, load_festivals_from_str,
};
