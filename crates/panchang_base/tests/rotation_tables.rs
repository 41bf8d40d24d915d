//! Weekday rotation table alignment.

use panchang_base::{
    ALL_VAARS, CHALDEAN_ORDER, CHOGHADIYA_CYCLE, CHOGHADIYA_DAY_START, Choghadiya, Graha, Kaal,
    MUHURTA_TABLE, Vaar, choghadiya_at_position, hora_at_index,
};

#[test]
fn hora_day_ruler_alignment() {
    for n in 1..=7u8 {
        let v = Vaar::from_number(n).unwrap();
        assert_eq!(hora_at_index(v, 0), v.day_ruler(), "weekday {n}");
    }
}

#[test]
fn hora_steps_through_chaldean_order() {
    for v in ALL_VAARS {
        for i in 0..24 {
            let a = hora_at_index(v, i).chaldean_index().unwrap();
            let b = hora_at_index(v, i + 1).chaldean_index().unwrap();
            assert_eq!((a + 1) % 7, b);
        }
    }
    assert_eq!(CHALDEAN_ORDER[0], Graha::Shani);
}

#[test]
fn choghadiya_day_start_alignment() {
    for v in ALL_VAARS {
        assert_eq!(
            choghadiya_at_position(v, 0, true),
            CHOGHADIYA_CYCLE[CHOGHADIYA_DAY_START[v.index()] as usize]
        );
    }
}

#[test]
fn choghadiya_saturday_day_sequence() {
    let seq: Vec<Choghadiya> = (0..8)
        .map(|i| choghadiya_at_position(Vaar::Shanivaar, i, true))
        .collect();
    assert_eq!(
        seq,
        vec![
            Choghadiya::Kaal,
            Choghadiya::Shubh,
            Choghadiya::Rog,
            Choghadiya::Udvegh,
            Choghadiya::Char,
            Choghadiya::Labh,
            Choghadiya::Amrit,
            Choghadiya::Kaal,
        ]
    );
}

#[test]
fn muhurta_table_has_thirty_rows() {
    assert_eq!(MUHURTA_TABLE.len(), 30);
    assert_eq!(MUHURTA_TABLE.iter().filter(|m| m.is_day()).count(), 15);
}

#[test]
fn rahu_kaal_friday() {
    assert_eq!(Kaal::RahuKaal.segment(Vaar::Shukravaar), 4);
}
