//! Panchang element resolution and weekday rotation tables.
//!
//! This crate provides:
//! - Tithi, nakshatra, yoga and karana lookup from sidereal longitudes or
//!   tithi ordinals
//! - Masa, rashi (solar month) and regional tradition vocabularies
//! - Static hora, choghadiya, muhurta and kaal rotation tables keyed by weekday
//!
//! Every lookup is a total function over its input: out-of-range numbers are
//! clamped or defaulted to the first table entry. Tables are `const` data.

pub mod choghadiya;
pub mod elements;
pub mod graha;
pub mod hora;
pub mod kaal;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod tradition;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use choghadiya::{
    CHOGHADIYA_CYCLE, CHOGHADIYA_DAY_START, CHOGHADIYA_NIGHT_START, CHOGHADIYAS_PER_HALF,
    Choghadiya, ChoghadiyaQuality, choghadiya_at_position,
};
pub use elements::{AstronomicalSample, PanchangElements, resolve_elements, resolve_from_sample};
pub use graha::{CHALDEAN_ORDER, Graha, SAPTA_GRAHAS};
pub use hora::{HORA_COUNT, HORAS_PER_HALF, hora_at_index};
pub use kaal::{GULIKA_SEGMENT, KAAL_PARTS, Kaal, RAHU_KAAL_SEGMENT, YAMAGANDA_SEGMENT};
pub use karana::{
    KARANA_SEGMENT_DEG, Karana, KaranaPosition, RECURRING_KARANAS, karana_at_slot, karana_from,
    karana_from_elongation,
};
pub use masa::{ALL_MASAS, Masa, MonthSystem};
pub use muhurta::{
    ABHIJIT_ORDINAL, MUHURTA_COUNT, MUHURTA_TABLE, MUHURTAS_PER_HALF, Muhurta, MuhurtaNature,
    muhurta_by_ordinal,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi};
pub use tithi::{
    Paksha, TITHI_SEGMENT_DEG, Tithi, TithiCategory, TithiPosition, tithi_from_elongation,
    tithi_from_month_number, tithi_from_number,
};
pub use tradition::Tradition;
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, DAY_RULERS, Vaar};
pub use yoga::{
    ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_longitudes, yoga_from_sum,
};
