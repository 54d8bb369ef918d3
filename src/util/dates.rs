//! Month naming for pickers and subtitles.

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name; `month` is 1-based. Out-of-range values clamp.
pub fn month_name(month: u32) -> &'static str {
    let idx = month.clamp(1, 12) as usize - 1;
    MONTHS[idx]
}

/// Current (month, year) in local browser time; a fixed fallback outside the
/// browser so SSR output is deterministic.
pub fn current_month_year() -> (u32, i32) {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        let year = i32::try_from(date.get_full_year()).unwrap_or(2026);
        (date.get_month() + 1, year)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (1, 2026)
    }
}
