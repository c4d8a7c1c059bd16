//! Calendar identity and validated calendar dates.

use std::fmt;

use crate::date::Date;
use crate::error::CalendarError;
use crate::locale::Locale;
use crate::{gregorian, hijri, jalali};

/// The calendar a date is read and written in.
///
/// Every rule query dispatches to the module of that calendar; Gregorian
/// conversions are the identity.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Calendar {
    /// Solar Hijri, see [`jalali`].
    #[default]
    Jalali,
    /// Tabular Islamic, see [`hijri`].
    Hijri,
    /// Proleptic Gregorian.
    Gregorian,
}

impl Calendar {
    /// Converts a Gregorian date into this calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Calendar;
    ///
    /// assert_eq!((1404, 1, 1), Calendar::Jalali.convert_gregorian(2025, 3, 21));
    /// assert_eq!((1446, 1, 1), Calendar::Hijri.convert_gregorian(2024, 7, 8));
    /// assert_eq!((2024, 7, 8), Calendar::Gregorian.convert_gregorian(2024, 7, 8));
    /// ```
    pub fn convert_gregorian(self, year: i32, month: u32, day: u32) -> (i32, u32, u32) {
        match self {
            Calendar::Jalali => jalali::from_gregorian(year, month, day),
            Calendar::Hijri => hijri::from_gregorian(year, month, day),
            Calendar::Gregorian => (year, month, day),
        }
    }

    /// Converts a date of this calendar into Gregorian.
    pub fn to_gregorian(self, year: i32, month: u32, day: u32) -> (i32, u32, u32) {
        match self {
            Calendar::Jalali => jalali::to_gregorian(year, month, day),
            Calendar::Hijri => hijri::to_gregorian(year, month, day),
            Calendar::Gregorian => (year, month, day),
        }
    }

    /// Returns `true` if `year` is a leap year of this calendar.
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Jalali => jalali::is_leap_year(year),
            Calendar::Hijri => hijri::is_leap_year(year),
            Calendar::Gregorian => gregorian::is_leap_year(year),
        }
    }

    /// Number of days in `year`.
    pub fn days_in_year(self, year: i32) -> u32 {
        match self {
            Calendar::Jalali => jalali::days_in_year(year),
            Calendar::Hijri => hijri::days_in_year(year),
            Calendar::Gregorian => gregorian::days_in_year(year),
        }
    }

    /// Number of days in `month` of `year`, `None` for a month outside
    /// `1..=12`.
    pub fn days_in_month(self, year: i32, month: u32) -> Option<u32> {
        match self {
            Calendar::Jalali => jalali::days_in_month(year, month),
            Calendar::Hijri => hijri::days_in_month(year, month),
            Calendar::Gregorian => gregorian::days_in_month(year, month),
        }
    }

    /// 1-based ordinal day of a date within its year.
    pub fn day_of_year(self, year: i32, month: u32, day: u32) -> u32 {
        match self {
            Calendar::Jalali => jalali::day_of_year(month, day),
            Calendar::Hijri => hijri::day_of_year(month, day),
            Calendar::Gregorian => gregorian::day_of_year(year, month, day),
        }
    }

    /// Supported years, inclusive.
    pub fn year_range(self) -> (i32, i32) {
        match self {
            Calendar::Jalali => (jalali::MIN_YEAR, jalali::MAX_YEAR),
            Calendar::Hijri => (hijri::MIN_YEAR, hijri::MAX_YEAR),
            Calendar::Gregorian => (gregorian::MIN_YEAR, gregorian::MAX_YEAR),
        }
    }

    /// Checks that `(year, month, day)` is a supported date of this calendar.
    pub fn is_valid_date(self, year: i32, month: u32, day: u32) -> bool {
        self.validate(year, month, day).is_ok()
    }

    /// Like [`Calendar::is_valid_date`], but tells what is wrong.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, CalendarError};
    ///
    /// assert!(Calendar::Jalali.validate(1403, 12, 30).is_ok());
    /// assert!(matches!(
    ///     Calendar::Jalali.validate(1404, 12, 30),
    ///     Err(CalendarError::InvalidDay { max_day: 29, .. })
    /// ));
    /// ```
    pub fn validate(self, year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
        let (min, max) = self.year_range();
        if !(min..=max).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                calendar: self,
                year,
                min,
                max,
            });
        }
        let max_day = self
            .days_in_month(year, month)
            .ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                calendar: self,
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(())
    }

    /// Weekday index of a date in this calendar's week, `0..=6`.
    ///
    /// Jalali and Hijri weeks begin on Saturday, so index `0` is Saturday
    /// and `6` is Friday. Gregorian weeks are counted from Sunday.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Calendar;
    ///
    /// // Friday in the Gregorian numbering
    /// assert_eq!(6, Calendar::Jalali.weekday_index(5));
    /// assert_eq!(5, Calendar::Gregorian.weekday_index(5));
    /// ```
    pub fn weekday_index(self, from_sunday: u32) -> u32 {
        match self {
            Calendar::Jalali | Calendar::Hijri => (from_sunday + 1) % 7,
            Calendar::Gregorian => from_sunday % 7,
        }
    }

    /// Localized names of this calendar.
    pub fn locale(self) -> &'static Locale {
        match self {
            Calendar::Jalali => &jalali::fmt::LOCALE,
            Calendar::Hijri => &hijri::fmt::LOCALE,
            Calendar::Gregorian => &gregorian::fmt::LOCALE,
        }
    }

    /// Lowercase name of the calendar.
    pub fn name(self) -> &'static str {
        match self {
            Calendar::Jalali => "jalali",
            Calendar::Hijri => "hijri",
            Calendar::Gregorian => "gregorian",
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(year, month, day)` that is known to be valid in its calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    year: i32,
    month: u32,
    day: u32,
}

impl Components {
    /// Validates a date of `calendar`.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Components};
    ///
    /// let ymd = Components::new(Calendar::Hijri, 1445, 12, 30).unwrap();
    /// assert_eq!((2024, 7, 7), ymd.to_gregorian(Calendar::Hijri));
    /// assert!(Components::new(Calendar::Hijri, 1446, 12, 30).is_err());
    /// ```
    pub fn new(calendar: Calendar, year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        calendar.validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Reads a Gregorian date in `calendar`.
    ///
    /// Only conversion results are accepted here, so the date is valid by
    /// construction as long as it lies in the supported range.
    pub(crate) fn from_gregorian(calendar: Calendar, (y, m, d): (i32, u32, u32)) -> Self {
        let (year, month, day) = calendar.convert_gregorian(y, m, d);
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Returns the month (`1..=12`).
    pub fn month(&self) -> u32 {
        self.month
    }
    /// Returns the day within the month.
    pub fn day(&self) -> u32 {
        self.day
    }
    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Converts the date, assumed to be in `calendar`, into Gregorian.
    pub fn to_gregorian(&self, calendar: Calendar) -> (i32, u32, u32) {
        calendar.to_gregorian(self.year, self.month, self.day)
    }

    /// Converts the date, assumed to be in `calendar`, into a [`Date`].
    pub fn to_date(&self, calendar: Calendar) -> Option<Date> {
        let (y, m, d) = self.to_gregorian(calendar);
        Date::from_gregorian(y, m, d)
    }
}
