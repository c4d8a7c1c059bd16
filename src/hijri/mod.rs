//! Tabular Hijri (Islamic civil) calendar.
//!
//! A 30-year cycle of 10631 days, in which years 2, 5, 7, 10, 13, 16, 18,
//! 21, 24, 26 and 29 have 355 days and all others 354. Months alternate
//! between 30 and 29 days, starting with a 30-day Muharram; Dhu al-Hijjah
//! gets a 30th day in leap years. The epoch is 1 Muharram 1 = JDN 1948440
//! (July 19, 622, proleptic Gregorian).
//!
//! Conversion goes through the Julian day number, see [`Date`].

use crate::date::{Date, gregorian_jdn};

pub mod fmt;

/// First supported Hijri year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Hijri year (Gregorian 9999).
pub const MAX_YEAR: i32 = 9666;

/// JDN of 1 Muharram 1.
const EPOCH: i32 = 1948440;
/// Days in a 30-year cycle.
const CYCLE_DAYS: i32 = 10631;
/// Hijri years in a cycle.
const CYCLE_YEARS: i64 = 30;
/// Positions of leap years within a cycle, `1..=30`.
const LEAP_POSITIONS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

fn cycle_position(year: i32) -> i32 {
    (year - 1).rem_euclid(30) + 1
}

/// Returns `true` if `year` has 355 days.
///
/// # Example
///
/// ```
/// use taqvim::hijri;
///
/// assert!(hijri::is_leap_year(1445));
/// assert!(!hijri::is_leap_year(1446));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    LEAP_POSITIONS.contains(&cycle_position(year))
}

/// Number of days in `year`, 354 or 355.
pub fn days_in_year(year: i32) -> u32 {
    354 + is_leap_year(year) as u32
}

/// Number of days in `month` of `year`.
///
/// Returns `None` if `month` is not in `1..=12`.
///
/// # Example
///
/// ```
/// use taqvim::hijri;
///
/// assert_eq!(Some(30), hijri::days_in_month(1446, 1));
/// assert_eq!(Some(29), hijri::days_in_month(1446, 12));
/// assert_eq!(Some(30), hijri::days_in_month(1445, 12));
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        12 => Some(29 + is_leap_year(year) as u32),
        1..=11 => Some(30 - (month + 1) % 2),
        _ => None,
    }
}

/// 1-based ordinal day of `month`/`day` within its year.
pub fn day_of_year(month: u32, day: u32) -> u32 {
    // Months before `month` alternate 30/29, i.e. 29.5 days on average.
    let before = month.saturating_sub(1);
    before * 29 + before.div_ceil(2) + day
}

/// Checks that `(year, month, day)` is a date of the supported range.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && days_in_month(year, month).is_some_and(|max| (1..=max).contains(&day))
}

/// Converts a Hijri date into a [`Date`].
///
/// `month` and `day` are assumed to be valid, see [`is_valid_date`]. The
/// resulting JDN must fit `i32`, which holds for every year within about
/// 6 million years of the epoch.
///
/// # Example
///
/// ```
/// use taqvim::hijri;
///
/// assert_eq!("2024-07-08", hijri::to_date(1446, 1, 1).iso_gregorian());
/// ```
pub fn to_date(year: i32, month: u32, day: u32) -> Date {
    let cycles = (year - 1).div_euclid(30);
    let position = cycle_position(year);
    let years_before: i32 = (1..position).map(|y| days_in_year(y) as i32).sum();
    let days = cycles * CYCLE_DAYS + years_before + day_of_year(month, day) as i32 - 1;
    Date::from_jdn(EPOCH + days)
}

/// Represents a [`Date`] in Hijri calendar, as `(year, month, day)`.
///
/// # Example
///
/// ```
/// use taqvim::Date;
/// use taqvim::hijri;
///
/// let date = Date::from_gregorian(2024, 7, 8).unwrap();
/// assert_eq!((1446, 1, 1), hijri::from_date(date));
/// ```
pub fn from_date(date: Date) -> (i32, u32, u32) {
    from_day_count(i64::from(date.jdn()) - i64::from(EPOCH))
}

/// Converts a proleptic Gregorian date into Hijri `(year, month, day)`.
///
/// The input must be a valid Gregorian date whose JDN fits `i32`, i.e.
/// [`Date::from_gregorian`] returns `Some` for it. This is checked in debug
/// builds only; other input yields an unspecified date.
///
/// # Example
///
/// ```
/// use taqvim::hijri;
///
/// assert_eq!((1446, 9, 21), hijri::from_gregorian(2025, 3, 21));
/// ```
pub fn from_gregorian(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    debug_assert!(
        Date::from_gregorian(gy, gm, gd).is_some(),
        "invalid Gregorian date {gy}-{gm}-{gd}"
    );
    from_day_count(gregorian_jdn(gy, gm, gd) - i64::from(EPOCH))
}

/// Expands days since 1 Muharram 1 into `(year, month, day)`.
fn from_day_count(days: i64) -> (i32, u32, u32) {
    let cycle_days = i64::from(CYCLE_DAYS);
    let mut rest = days.rem_euclid(cycle_days);
    let mut year = days.div_euclid(cycle_days) * CYCLE_YEARS + 1;
    loop {
        let len = i64::from(days_in_year(year as i32));
        if rest < len {
            break;
        }
        rest -= len;
        year += 1;
    }

    let year = year as i32;
    let mut day = rest as u32 + 1;
    let mut month = 1;
    while let Some(len) = days_in_month(year, month) {
        if day <= len {
            break;
        }
        day -= len;
        month += 1;
    }
    (year, month, day)
}

/// Converts a Hijri date into proleptic Gregorian `(year, month, day)`.
///
/// The input is assumed to be valid, see [`is_valid_date`].
pub fn to_gregorian(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    to_date(year, month, day).gregorian()
}
