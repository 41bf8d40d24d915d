//! Hora (planetary hour) rotation.
//!
//! The first hora after sunrise belongs to the day ruler. Each following
//! hora steps one place forward in the Chaldean order, across sunset and
//! without resetting, so that after 24 horas the sequence lands on the next
//! day's ruler.

use crate::graha::{CHALDEAN_ORDER, Graha};
use crate::vaar::Vaar;

/// Number of horas in a sunrise-to-sunrise day.
pub const HORA_COUNT: usize = 24;

/// Horas in each of the day and night halves.
pub const HORAS_PER_HALF: usize = HORA_COUNT / 2;

/// Lord of the hora at 0-based position `index` counted from sunrise.
pub const fn hora_at_index(vaar: Vaar, index: usize) -> Graha {
    let start = match vaar.day_ruler().chaldean_index() {
        Some(i) => i as usize,
        // day rulers are always sapta grahas
        None => 0,
    };
    CHALDEAN_ORDER[(start + index) % 7]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn first_hora_is_day_ruler() {
        for v in ALL_VAARS {
            assert_eq!(hora_at_index(v, 0), v.day_ruler());
        }
    }

    #[test]
    fn sunday_sequence() {
        let seq: Vec<Graha> = (0..8).map(|i| hora_at_index(Vaar::Ravivaar, i)).collect();
        assert_eq!(
            seq,
            vec![
                Graha::Surya,
                Graha::Shukra,
                Graha::Buddh,
                Graha::Chandra,
                Graha::Shani,
                Graha::Guru,
                Graha::Mangal,
                Graha::Surya,
            ]
        );
    }

    #[test]
    fn twenty_fifth_hora_is_next_day_ruler() {
        for (i, v) in ALL_VAARS.iter().enumerate() {
            let next = ALL_VAARS[(i + 1) % 7];
            assert_eq!(hora_at_index(*v, HORA_COUNT), next.day_ruler());
        }
    }
}
