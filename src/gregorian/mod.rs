//! Proleptic Gregorian calendar rules, in the same shape as [`crate::jalali`]
//! and [`crate::hijri`].

use crate::date::{YearType, ordinal_day_number};

pub mod fmt;

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 9999;

/// Returns `true` if `year` has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    YearType::from_gregorian(year).is_leap()
}

/// Number of days in `year`, 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    YearType::from_gregorian(year).days()
}

/// Number of days in `month` of `year`, `None` if `month` is not in
/// `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    YearType::from_gregorian(year).days_in_month(month)
}

/// 1-based ordinal day of `month`/`day` within `year`.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    ordinal_day_number(month, day, YearType::from_gregorian(year))
}

/// Checks that `(year, month, day)` is a date of the supported range.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && days_in_month(year, month).is_some_and(|max| (1..=max).contains(&day))
}
