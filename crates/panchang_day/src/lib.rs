//! Day partitioning anchored on sunrise, sunset and next sunrise.
//!
//! A [`DaySpan`] is split into equal slots: 30 muhurtas, 16 choghadiyas and
//! 24 horas, plus the weekday's Rahu Kaal, Yamaganda and Gulika windows.
//! Slot boundaries are computed in integer nanoseconds so each partition
//! tiles its span exactly.

pub mod error;
pub mod kaal;
pub mod partition;
pub mod period;
pub mod span;

pub use error::{DayError, MAX_HALF_SPAN_HOURS};
pub use kaal::{KaalWindow, KaalWindows, abhijit_window, kaal_window, kaal_windows};
pub use partition::{
    CHOGHADIYA_COUNT, DayPartitions, partition_choghadiya, partition_day, partition_hora,
    partition_muhurta,
};
pub use period::{PeriodKind, TimePeriod, current_period};
pub use span::DaySpan;
