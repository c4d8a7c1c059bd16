//! Jalali (Solar Hijri) calendar, arithmetic version.
//!
//! Years follow a 33-year cycle with 8 leap years. Both directions of the
//! conversion reduce the date to a day count from a common epoch first,
//! then expand that count against the cycle lengths of the other calendar.
//! Only integer division (floored) and table lookups are involved, so dates
//! before the epoch come out with a year `<= 0` instead of wrapping; such
//! dates are rejected by [`is_valid_date`].

use crate::date::{Date, YearType, ordinal_day_number};

pub mod fmt;

/// First supported Jalali year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Jalali year (Gregorian 9998/9999).
pub const MAX_YEAR: i32 = 9377;

/// Days in a 33-year cycle (8 leap years).
const CYCLE_33_DAYS: i64 = 12053;
/// Days in a 4-year span with one leap year.
const SPAN_4_DAYS: i64 = 1461;
/// Days in the six 31-day months at the start of a year.
const FIRST_HALF_DAYS: i64 = 186;

/// Returns `true` if `year` has 366 days.
///
/// # Example
///
/// ```
/// use taqvim::jalali;
///
/// assert!(jalali::is_leap_year(1403));
/// assert!(!jalali::is_leap_year(1404));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (25 * year as i64 + 11).rem_euclid(33) < 8
}

/// Number of days in `year`, 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    365 + is_leap_year(year) as u32
}

/// Number of days in `month` of `year`.
///
/// Farvardin to Shahrivar have 31 days, Mehr to Bahman 30, and Esfand 29
/// (30 in leap years). Returns `None` if `month` is not in `1..=12`.
///
/// # Example
///
/// ```
/// use taqvim::jalali;
///
/// assert_eq!(Some(31), jalali::days_in_month(1404, 6));
/// assert_eq!(Some(30), jalali::days_in_month(1404, 7));
/// assert_eq!(Some(29), jalali::days_in_month(1404, 12));
/// assert_eq!(Some(30), jalali::days_in_month(1403, 12));
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    Some(match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => 29 + is_leap_year(year) as u32,
        _ => return None,
    })
}

/// 1-based ordinal day of `month`/`day` within its year.
pub fn day_of_year(month: u32, day: u32) -> u32 {
    if month <= 6 {
        (month.saturating_sub(1)) * 31 + day
    } else {
        FIRST_HALF_DAYS as u32 + (month - 7) * 30 + day
    }
}

/// Checks that `(year, month, day)` is a date of the supported range.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && days_in_month(year, month).is_some_and(|max| (1..=max).contains(&day))
}

/// Converts a proleptic Gregorian date into Jalali `(year, month, day)`.
///
/// The input must be a valid Gregorian date, see [`Date::from_gregorian`].
/// This is checked in debug builds only.
///
/// # Example
///
/// ```
/// use taqvim::jalali;
///
/// assert_eq!((1404, 1, 1), jalali::from_gregorian(2025, 3, 21));
/// assert_eq!((1403, 12, 30), jalali::from_gregorian(2025, 3, 20));
/// ```
pub fn from_gregorian(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    debug_assert!(
        Date::from_gregorian(gy, gm, gd).is_some(),
        "invalid Gregorian date {gy}-{gm}-{gd}"
    );
    let y = gy as i64;
    let ordinal = ordinal_day_number(gm, gd, YearType::from_gregorian(gy)) as i64;
    let mut days = 355666
        + 365 * y
        + (y + 3).div_euclid(4)
        - (y + 99).div_euclid(100)
        + (y + 399).div_euclid(400)
        + ordinal;

    let mut jy = -1595 + 33 * days.div_euclid(CYCLE_33_DAYS);
    days = days.rem_euclid(CYCLE_33_DAYS);
    jy += 4 * (days / SPAN_4_DAYS);
    days %= SPAN_4_DAYS;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        (
            7 + (days - FIRST_HALF_DAYS) / 30,
            1 + (days - FIRST_HALF_DAYS) % 30,
        )
    };
    (jy as i32, jm as u32, jd as u32)
}

/// Converts a Jalali date into proleptic Gregorian `(year, month, day)`.
///
/// The input is assumed to be valid, see [`is_valid_date`].
///
/// # Example
///
/// ```
/// use taqvim::jalali;
///
/// assert_eq!((2025, 3, 21), jalali::to_gregorian(1404, 1, 1));
/// assert_eq!((1979, 2, 11), jalali::to_gregorian(1357, 11, 22));
/// ```
pub fn to_gregorian(jy: i32, jm: u32, jd: u32) -> (i32, u32, u32) {
    let jy = jy as i64 + 1595;
    let mut days = -355668
        + 365 * jy
        + jy.div_euclid(33) * 8
        + (jy.rem_euclid(33) + 3) / 4
        + day_of_year(jm, jd) as i64;

    let mut gy = 400 * days.div_euclid(146097);
    days = days.rem_euclid(146097);
    if days > 36524 {
        days -= 1;
        gy += 100 * (days / 36524);
        days %= 36524;
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * (days / SPAN_4_DAYS);
    days %= SPAN_4_DAYS;
    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let gy = gy as i32;
    let year_type = YearType::from_gregorian(gy);
    let mut gd = days as u32 + 1;
    let mut gm = 1;
    while let Some(len) = year_type.days_in_month(gm) {
        if gd <= len {
            break;
        }
        gd -= len;
        gm += 1;
    }
    (gy, gm, gd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date((y, m, d): (i32, u32, u32)) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn known_dates() {
        let dataset = [
            ((1404, 1, 1), (2025, 3, 21)),
            ((1403, 12, 30), (2025, 3, 20)),
            ((1403, 1, 1), (2024, 3, 20)),
            ((1357, 11, 22), (1979, 2, 11)),
            ((1348, 10, 11), (1970, 1, 1)),
            ((1378, 10, 11), (2000, 1, 1)),
        ];
        for (jalali, gregorian) in dataset {
            assert_eq!(
                gregorian, to_gregorian(jalali.0, jalali.1, jalali.2),
                "{jalali:?}"
            );
            assert_eq!(
                jalali,
                from_gregorian(gregorian.0, gregorian.1, gregorian.2)
            );
        }
    }

    #[test]
    fn leap_years() {
        let leaps: Vec<_> = (1399..=1432).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(
            vec![1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432],
            leaps
        );
    }

    #[test]
    fn leap_rule_matches_day_count() {
        // The residue rule must agree with the year lengths produced by the
        // conversion itself.
        for year in 1..=3400 {
            let start = date(to_gregorian(year, 1, 1));
            let next = date(to_gregorian(year + 1, 1, 1));
            assert_eq!(days_in_year(year) as i32, next - start, "year {year}");
        }
    }

    #[test]
    fn month_lengths() {
        for year in [1402, 1403] {
            let total: u32 = (1..=12).filter_map(|m| days_in_month(year, m)).sum();
            assert_eq!(days_in_year(year), total);
        }
        assert_eq!(None, days_in_month(1403, 0));
        assert_eq!(None, days_in_month(1403, 13));
    }

    #[test]
    fn validity() {
        assert!(is_valid_date(1403, 12, 30));
        assert!(!is_valid_date(1404, 12, 30));
        assert!(!is_valid_date(1404, 7, 31));
        assert!(!is_valid_date(1404, 1, 0));
        assert!(!is_valid_date(0, 1, 1));
        assert!(!is_valid_date(MAX_YEAR + 1, 1, 1));
    }

    #[test]
    fn ordinal() {
        assert_eq!(1, day_of_year(1, 1));
        assert_eq!(186, day_of_year(6, 31));
        assert_eq!(187, day_of_year(7, 1));
        assert_eq!(366, day_of_year(12, 30));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid Gregorian date")]
    fn invalid_gregorian_input() {
        from_gregorian(2025, 0, 1);
    }

    #[test]
    fn before_epoch_is_not_wrapped() {
        let epoch = date(to_gregorian(1, 1, 1));
        assert_eq!((1, 1, 1), from_gregorian_date(epoch));
        assert_eq!((0, 12, 29), from_gregorian_date(epoch + -1));
        assert!(from_gregorian(100, 1, 1).0 < 0);
        assert!(!is_valid_date(0, 12, 29));
    }

    fn from_gregorian_date(date: Date) -> (i32, u32, u32) {
        let (y, m, d) = date.gregorian();
        from_gregorian(y, m, d)
    }
}
