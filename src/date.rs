//! Calendar-independant date.

use std::ops::{Add, Sub};

/// Days in a 400-year Gregorian cycle.
const GREGORIAN_CYCLE_DAYS: i64 = 146097;

/// Earliest year for which the truncating JDN formulas below are exact.
const FORMULA_MIN_YEAR: i64 = -4700;

/// A calendar-independant date, counted as a Julian day number (JDN).
///
/// Every JDN of the `i32` range is supported, which spans proleptic
/// Gregorian years from about -5 884 000 to 5 874 000, including dates
/// before January 1, 4713 BC (negative JDN).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` is not valid for `year`, or if the
    /// JDN of the date does not fit in `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(i32::MAX, 1, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Option<Self> {
        let max_day = YearType::from_gregorian(year).days_in_month(month)?;
        if day == 0 || day > max_day {
            return None;
        }
        i32::try_from(gregorian_jdn(year, month, day))
            .ok()
            .map(Self::from_jdn)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let jdn = i64::from(self.jdn);
        let cycles = if jdn < 0 {
            -jdn / GREGORIAN_CYCLE_DAYS + 1
        } else {
            0
        };
        let jdn = jdn + GREGORIAN_CYCLE_DAYS * cycles;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        ((year - 400 * cycles) as i32, month as u32, day as u32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn.rem_euclid(7) as u32 + 1
    }
    /// Returns the day of week counted from Sunday, i.e. `0..=6` for Sunday
    /// through Saturday. Locale tables index weekday names this way.
    pub fn day_of_week_from_sunday(&self) -> u32 {
        self.day_of_week() % 7
    }
    /// Returns the 1-based ordinal day of the date within its Gregorian
    /// year.
    pub fn ordinal_gregorian(&self) -> u32 {
        let (y, m, d) = self.gregorian();
        ordinal_day_number(m, d, YearType::from_gregorian(y))
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        Self::from_leap(year % 4 == 0 && year % 100 != 0 || year % 400 == 0)
    }
    /// `Leap` for `true`, `Common` for `false`.
    pub fn from_leap(leap: bool) -> Self {
        if leap { Self::Leap } else { Self::Common }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in a year of this type, 365 or 366.
    pub fn days(&self) -> u32 {
        365 + self.is_leap() as u32
    }
    /// Number of days of a Gregorian month in a year of this type.
    ///
    /// Returns `None` if `month` is not in `1..=12`.
    pub fn days_in_month(&self, month: u32) -> Option<u32> {
        Some(match month {
            2 => 28 + self.is_leap() as u32,
            4 | 6 | 9 | 11 => 30,
            1..=12 => 31,
            _ => return None,
        })
    }
}

/// JDN of a proleptic Gregorian date, month and day unchecked.
pub(crate) fn gregorian_jdn(year: i32, month: u32, day: u32) -> i64 {
    // Shift far-past years by whole 400-year cycles so the integer
    // divisions below never see a negative operand.
    let year = i64::from(year);
    let cycles = if year < FORMULA_MIN_YEAR {
        (FORMULA_MIN_YEAR - year) / 400 + 1
    } else {
        0
    };
    let (y, m, d) = (year + 400 * cycles, i64::from(month), i64::from(day));
    let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
        + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075;
    jdn - GREGORIAN_CYCLE_DAYS * cycles
}

pub(crate) fn ordinal_day_number(month: u32, day: u32, year_type: YearType) -> u32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(2024, 7, 8).unwrap();
        assert_eq!(2460500, date.jdn());
    }

    #[test]
    fn from_gregorian_rejects_invalid() {
        assert_eq!(None, Date::from_gregorian(2023, 2, 29));
        assert_eq!(None, Date::from_gregorian(2023, 13, 1));
        assert_eq!(None, Date::from_gregorian(2023, 4, 0));
        assert!(Date::from_gregorian(2024, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn before_julian_period() {
        for (y, m, d) in [(-4713, 11, 24), (-4714, 1, 1), (-10000, 3, 1), (-262_000, 12, 31)] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!((y, m, d), date.gregorian(), "{y}-{m:02}-{d:02}");
        }
        // JDN 0 is November 24, 4714 BC (proleptic Gregorian).
        assert_eq!((-4713, 11, 24), Date::from_jdn(0).gregorian());
        assert_eq!((-4713, 11, 23), Date::from_jdn(-1).gregorian());
    }

    #[test]
    fn far_years() {
        let date = Date::from_gregorian(1_500_000, 1, 1).unwrap();
        assert_eq!((1_500_000, 1, 1), date.gregorian());
        assert_eq!(None, Date::from_gregorian(i32::MAX, 1, 1));
        assert_eq!(None, Date::from_gregorian(i32::MIN, 1, 1));
        assert_eq!(None, Date::from_gregorian(6_000_000, 1, 1));
    }

    #[test]
    fn jdn_range_bounds() {
        for jdn in [i32::MIN, -600_000_000, 600_000_000, i32::MAX] {
            let date = Date::from_jdn(jdn);
            let (y, m, d) = date.gregorian();
            assert_eq!(Some(date), Date::from_gregorian(y, m, d), "{jdn}");
        }
    }

    #[test]
    fn consecutive_days() {
        let start = Date::from_gregorian(1899, 12, 25).unwrap();
        let mut last = start.gregorian();
        for i in 1..800 {
            let next = (start + i).gregorian();
            assert!(next > last, "{next:?} after {last:?}");
            last = next;
        }
        assert_eq!(799, (start + 799) - start);
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        assert_eq!(4, date.day_of_week_from_sunday());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
        let date = Date::from_gregorian(2024, 7, 7).unwrap();
        assert_eq!(0, date.day_of_week_from_sunday());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }

    #[test]
    fn ordinal() {
        let date = Date::from_gregorian(2024, 12, 31).unwrap();
        assert_eq!(366, date.ordinal_gregorian());
    }
}
