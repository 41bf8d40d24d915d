//! Combined element resolution from one astronomical sample.

use serde::{Deserialize, Serialize};

use crate::karana::{Karana, karana_from};
use crate::nakshatra::{Nakshatra, NakshatraInfo, nakshatra_from_longitude};
use crate::tithi::{Paksha, Tithi, TithiPosition, tithi_from_elongation, tithi_from_month_number};
use crate::util::normalize_360;
use crate::yoga::{Yoga, yoga_from_longitudes};

/// Sun and Moon sidereal longitudes for one reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalSample {
    /// Sun sidereal longitude in degrees, nominally [0, 360).
    pub sun_sidereal_longitude_deg: f64,
    /// Moon sidereal longitude in degrees, nominally [0, 360).
    pub moon_sidereal_longitude_deg: f64,
}

impl AstronomicalSample {
    pub fn new(sun_sidereal_longitude_deg: f64, moon_sidereal_longitude_deg: f64) -> Self {
        Self {
            sun_sidereal_longitude_deg,
            moon_sidereal_longitude_deg,
        }
    }

    /// Moon-Sun elongation in [0, 360). Ayanamsha cancels in the difference.
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.moon_sidereal_longitude_deg - self.sun_sidereal_longitude_deg)
    }

    /// `(sun + moon) mod 360`, the yoga argument.
    pub fn sidereal_sum_deg(&self) -> f64 {
        normalize_360(self.sun_sidereal_longitude_deg + self.moon_sidereal_longitude_deg)
    }

    /// Tithi position implied by the elongation.
    pub fn tithi_position(&self) -> TithiPosition {
        tithi_from_elongation(self.elongation_deg())
    }

    /// Moon's nakshatra with pada.
    pub fn moon_nakshatra(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.moon_sidereal_longitude_deg)
    }
}

/// The four angular panchang elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangElements {
    pub tithi: Tithi,
    pub paksha: Paksha,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
}

/// Resolve tithi, nakshatra, yoga and karana.
///
/// `tithi_number` is the position within the month (1..30) and
/// `is_first_half` selects the karana half; both come from the caller's
/// tithi reckoning. A number outside 1..30 is read as 1 for both tithi and
/// karana. Nakshatra and yoga come from the sample.
pub fn resolve_elements(
    sample: &AstronomicalSample,
    tithi_number: i64,
    is_first_half: bool,
) -> PanchangElements {
    let tithi_number = if (1..=30).contains(&tithi_number) {
        tithi_number
    } else {
        1
    };
    let (paksha, tithi) = tithi_from_month_number(tithi_number);
    PanchangElements {
        tithi,
        paksha,
        nakshatra: sample.moon_nakshatra().nakshatra,
        yoga: yoga_from_longitudes(
            sample.sun_sidereal_longitude_deg,
            sample.moon_sidereal_longitude_deg,
        )
        .yoga,
        karana: karana_from(tithi_number, is_first_half),
    }
}

/// Resolve all four elements from the sample alone, deriving the tithi and
/// karana half from the Moon-Sun elongation.
pub fn resolve_from_sample(sample: &AstronomicalSample) -> PanchangElements {
    let pos = sample.tithi_position();
    resolve_elements(sample, pos.month_number() as i64, pos.is_first_half())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_explicit_tithi() {
        let s = AstronomicalSample::new(10.0, 14.0);
        let e = resolve_elements(&s, 1, true);
        assert_eq!(e.tithi, Tithi::Pratipada);
        assert_eq!(e.karana, Karana::Kimstughna);
        assert_eq!(e.nakshatra, Nakshatra::Bharani);
        // 24 deg -> second yoga
        assert_eq!(e.yoga, Yoga::Priti);
    }

    #[test]
    fn resolve_krishna_from_sample() {
        // elongation 190 -> Krishna Pratipada, 10 deg in, second half
        let s = AstronomicalSample::new(100.0, 290.0);
        let e = resolve_from_sample(&s);
        assert_eq!(e.paksha, Paksha::Krishna);
        assert_eq!(e.tithi, Tithi::Pratipada);
        // slot 31 -> (31 - 1) % 7 = 2
        assert_eq!(e.karana, Karana::Kaulava);
    }

    #[test]
    fn elongation_wraps() {
        let s = AstronomicalSample::new(350.0, 5.0);
        assert!((s.elongation_deg() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_tithi_still_resolves() {
        let s = AstronomicalSample::new(0.0, 0.0);
        let e = resolve_elements(&s, 45, true);
        assert_eq!((e.paksha, e.tithi), (Paksha::Shukla, Tithi::Pratipada));
        assert_eq!(e.karana, Karana::Kimstughna);

        let e = resolve_elements(&s, -3, false);
        assert_eq!((e.paksha, e.tithi), (Paksha::Shukla, Tithi::Pratipada));
        assert_eq!(e.karana, Karana::Bava);
        assert_eq!(e, resolve_elements(&s, 1, false));
    }
}
