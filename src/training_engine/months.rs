use crate::training_engine::models::Month;

/// Number of months in a Hijri year.
pub const MONTH_COUNT: usize = 12;

/// The twelve Hijri months in calendar order. Ids are dense 1..=12.
pub static MONTHS: [Month; MONTH_COUNT] = [
    Month { id: 1, name: "Muharram", arabic: "محرّم" },
    Month { id: 2, name: "Shafar", arabic: "صفر" },
    Month { id: 3, name: "Rabi'ul Awal", arabic: "ربيع الأوّل" },
    Month { id: 4, name: "Rabi'ul Akhir", arabic: "ربيع الآخر" },
    Month { id: 5, name: "Jumadil Ula", arabic: "جمادى الأولى" },
    Month { id: 6, name: "Jumadil Akhir", arabic: "جمادى الآخرة" },
    Month { id: 7, name: "Rajab", arabic: "رجب" },
    Month { id: 8, name: "Sya'ban", arabic: "شعبان" },
    Month { id: 9, name: "Ramadhan", arabic: "رمضان" },
    Month { id: 10, name: "Syawwal", arabic: "شوّال" },
    Month { id: 11, name: "Dzulqa'dah", arabic: "ذو القعدة" },
    Month { id: 12, name: "Dzulhijjah", arabic: "ذو الحجّة" },
];

/// All twelve months, in order.
pub fn all_months() -> &'static [Month; MONTH_COUNT] {
    &MONTHS
}

/// Look up a month by its 1-based id.
pub fn month(id: u8) -> Option<&'static Month> {
    match id {
        1..=12 => Some(&MONTHS[usize::from(id) - 1]),
        _ => None,
    }
}

/// Month at a 0-based table index, wrapping past the end.
pub fn at_index(index: usize) -> &'static Month {
    &MONTHS[index % MONTH_COUNT]
}

/// Zero-based table index for an id. Out-of-range ids are a caller bug.
pub fn index_of(id: u8) -> usize {
    debug_assert!((1..=12).contains(&id), "month id {id} out of range");
    usize::from(id).saturating_sub(1) % MONTH_COUNT
}

/// The month after `id`; Dzulhijjah wraps to Muharram.
pub fn successor(id: u8) -> &'static Month {
    at_index(index_of(id) + 1)
}

/// The month before `id`; Muharram wraps to Dzulhijjah.
pub fn predecessor(id: u8) -> &'static Month {
    at_index(index_of(id) + MONTH_COUNT - 1)
}

/// Months other than the ones listed in `exclude`, in table order.
pub fn months_except(exclude: &[u8]) -> Vec<Month> {
    MONTHS.iter().filter(|m| !exclude.contains(&m.id)).copied().collect()
}
