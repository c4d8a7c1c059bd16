//! Calendar-aware view of an instant.
//!
//! A [`Moment`] wraps a `chrono` date-time and reads and writes its date in
//! the active [`Calendar`]. The wrapped value only ever holds Gregorian
//! data; switching calendars changes how the date is presented, never the
//! instant itself.

use std::cmp::Ordering;
use std::fmt;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike,
    Utc, Weekday,
};
use tracing::{debug, trace, warn};

use crate::calendar::{Calendar, Components};
use crate::date::Date;
use crate::error::CalendarError;
use crate::locale::DigitStyle;
use crate::options::Options;

mod format;
mod humanize;
mod parse;

/// JDN of 31 December 1 BC, i.e. day 0 of chrono's `num_days_from_ce`.
const JDN_BEFORE_CE: i32 = 1721425;

/// Last representable instant of a day.
const DAY_END: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// An instant together with the calendar its date is expressed in.
///
/// Comparisons (`==`, `<`, ...) look at the instant only.
///
/// # Example
///
/// ```
/// use taqvim::{Calendar, Moment};
///
/// let mut moment = Moment::from_ymd_hms(Calendar::Jalali, 1403, 12, 30, 10, 0, 0).unwrap();
/// assert_eq!((2025, 3, 20), moment.clone().with_calendar(Calendar::Gregorian).ymd());
///
/// moment.add_months(1);
/// assert_eq!((1404, 1, 30), moment.ymd());
/// assert_eq!("1404-01-30 10:00:00", moment.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct Moment {
    instant: DateTime<FixedOffset>,
    calendar: Calendar,
    options: Options,
}

impl Moment {
    /// Wraps an instant, presenting it in the Jalali calendar.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.fixed_offset(),
            calendar: Calendar::default(),
            options: Options::default(),
        }
    }

    /// The current time in UTC, presented in `calendar`.
    pub fn now(calendar: Calendar) -> Self {
        Self::new(Utc::now()).with_calendar(calendar)
    }

    /// Builds a moment at midnight UTC from a date of `calendar`.
    pub fn from_ymd(
        calendar: Calendar,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, CalendarError> {
        Self::from_ymd_hms(calendar, year, month, day, 0, 0, 0)
    }

    /// Builds a moment in UTC from a date and time of day of `calendar`.
    ///
    /// The date is converted to Gregorian once, here.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, CalendarError, Moment};
    ///
    /// let moment = Moment::from_ymd_hms(Calendar::Hijri, 1446, 1, 1, 8, 30, 0).unwrap();
    /// assert_eq!("2024-07-08T08:30:00+00:00", moment.instant().to_rfc3339());
    ///
    /// assert!(matches!(
    ///     Moment::from_ymd_hms(Calendar::Jalali, 1404, 12, 30, 0, 0, 0),
    ///     Err(CalendarError::InvalidDay { .. })
    /// ));
    /// ```
    pub fn from_ymd_hms(
        calendar: Calendar,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        let date = gregorian_date(calendar, year, month, day)?;
        let time = time_of_day(hour, minute, second)?;
        let instant = date.and_time(time).and_utc();
        Ok(Self::new(instant).with_calendar(calendar))
    }

    /// Switches to `calendar`, keeping the instant.
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.set_calendar(calendar);
        self
    }

    /// Replaces the rendering options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets the digit script of formatted output.
    pub fn with_digits(mut self, digits: DigitStyle) -> Self {
        self.options = self.options.with_digits(digits);
        self
    }

    /// The wrapped instant.
    pub fn instant(&self) -> &DateTime<FixedOffset> {
        &self.instant
    }

    /// Unwraps the instant.
    pub fn into_instant(self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The active calendar.
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// The rendering options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Switches the active calendar. The instant is untouched.
    pub fn set_calendar(&mut self, calendar: Calendar) -> &mut Self {
        trace!(from = %self.calendar, to = %calendar, "switching calendar");
        self.calendar = calendar;
        self
    }

    /// Switches to the Jalali calendar.
    pub fn use_jalali(&mut self) -> &mut Self {
        self.set_calendar(Calendar::Jalali)
    }

    /// Switches to the Hijri calendar.
    pub fn use_hijri(&mut self) -> &mut Self {
        self.set_calendar(Calendar::Hijri)
    }

    /// Switches to the Gregorian calendar.
    pub fn use_gregorian(&mut self) -> &mut Self {
        self.set_calendar(Calendar::Gregorian)
    }

    /// Moves the wall clock to another UTC offset, keeping the instant.
    ///
    /// The local date, and therefore the calendar date, may change.
    pub fn set_timezone(&mut self, offset: FixedOffset) -> &mut Self {
        self.instant = self.instant.with_timezone(&offset);
        self
    }

    /// The UTC offset of the wall clock.
    pub fn timezone(&self) -> FixedOffset {
        *self.instant.offset()
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    /// The local date as a calendar-independent [`Date`].
    pub fn date(&self) -> Date {
        let days = self.instant.date_naive().num_days_from_ce();
        Date::from_jdn(days + JDN_BEFORE_CE)
    }

    /// The local date in the active calendar.
    pub fn components(&self) -> Components {
        let date = self.instant.date_naive();
        let ymd = (date.year(), date.month(), date.day());
        Components::from_gregorian(self.calendar, ymd)
    }

    /// The local date in the active calendar, as `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u32, u32) {
        self.components().ymd()
    }

    /// Year in the active calendar.
    pub fn year(&self) -> i32 {
        self.components().year()
    }

    /// Month in the active calendar, `1..=12`.
    pub fn month(&self) -> u32 {
        self.components().month()
    }

    /// Day of month in the active calendar.
    pub fn day(&self) -> u32 {
        self.components().day()
    }

    /// Hour of the wall clock, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Minute of the wall clock.
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Second of the wall clock.
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Weekday index in the active calendar's week, see
    /// [`Calendar::weekday_index`].
    pub fn weekday(&self) -> u32 {
        let from_sunday = self.date().day_of_week_from_sunday();
        self.calendar.weekday_index(from_sunday)
    }

    /// 1-based day of the year in the active calendar.
    pub fn day_of_year(&self) -> u32 {
        let (y, m, d) = self.ymd();
        self.calendar.day_of_year(y, m, d)
    }

    /// Week of the year in the active calendar, `1` for the week holding
    /// the first day of the year. Weeks begin on [`Options::week_start`].
    pub fn week_of_year(&self) -> u32 {
        let week_start = self.options.week_start().num_days_from_sunday();
        let today = self.date().day_of_week_from_sunday();
        let elapsed = self.day_of_year() - 1;
        let first_day = (today as i64 - elapsed as i64).rem_euclid(7) as u32;
        let offset = (first_day + 7 - week_start) % 7;
        (elapsed + offset) / 7 + 1
    }

    /// Number of days in the current month of the active calendar.
    pub fn days_in_month(&self) -> u32 {
        let (y, m, _) = self.ymd();
        self.month_len(y, m)
    }

    /// Number of days in the current year of the active calendar.
    pub fn days_in_year(&self) -> u32 {
        self.calendar.days_in_year(self.year())
    }

    /// Whether the current year of the active calendar is a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.calendar.is_leap_year(self.year())
    }

    /// `[year, month, day, hour, minute, second]`, the date in the active
    /// calendar.
    pub fn to_array(&self) -> [i32; 6] {
        let (y, m, d) = self.ymd();
        [
            y,
            m as i32,
            d as i32,
            self.hour() as i32,
            self.minute() as i32,
            self.second() as i32,
        ]
    }

    /// Writes a date of the active calendar, keeping the time of day.
    ///
    /// Nothing is clamped: an invalid date is an error and leaves the
    /// moment unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let mut moment = Moment::from_ymd(Calendar::Jalali, 1404, 1, 1).unwrap();
    /// moment.set_date(1403, 12, 30).unwrap();
    /// assert_eq!("2025-03-20", moment.date().iso_gregorian());
    ///
    /// assert!(moment.set_date(1404, 12, 30).is_err());
    /// assert_eq!((1403, 12, 30), moment.ymd());
    /// ```
    pub fn set_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<&mut Self, CalendarError> {
        let date = gregorian_date(self.calendar, year, month, day)?;
        trace!(
            calendar = %self.calendar,
            year,
            month,
            day,
            gregorian = %date,
            "setting date"
        );
        let time = self.instant.time();
        self.replace_local(date, time);
        Ok(self)
    }

    /// Sets the year, keeping month and day.
    pub fn set_year(&mut self, year: i32) -> Result<&mut Self, CalendarError> {
        let (_, m, d) = self.ymd();
        self.set_date(year, m, d)
    }

    /// Sets the month, keeping year and day.
    pub fn set_month(&mut self, month: u32) -> Result<&mut Self, CalendarError> {
        let (y, _, d) = self.ymd();
        self.set_date(y, month, d)
    }

    /// Sets the day of month, keeping year and month.
    pub fn set_day(&mut self, day: u32) -> Result<&mut Self, CalendarError> {
        let (y, m, _) = self.ymd();
        self.set_date(y, m, day)
    }

    /// Sets the time of day, keeping the date.
    pub fn set_time(
        &mut self,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<&mut Self, CalendarError> {
        let time = time_of_day(hour, minute, second)?;
        let date = self.instant.date_naive();
        self.replace_local(date, time);
        Ok(self)
    }

    /// Adds calendar months, clamping the day to the target month.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let mut moment = Moment::from_ymd(Calendar::Jalali, 1403, 6, 31).unwrap();
    /// moment.add_months(1);
    /// assert_eq!((1403, 7, 30), moment.ymd());
    /// moment.add_months(-7);
    /// assert_eq!((1402, 12, 29), moment.ymd());
    /// ```
    pub fn add_months(&mut self, months: i32) -> &mut Self {
        let (y, m, d) = self.ymd();
        let index = y as i64 * 12 + (m as i64 - 1) + months as i64;
        let year = index.div_euclid(12) as i32;
        let month = index.rem_euclid(12) as u32 + 1;
        self.write_shifted(year, month, d)
    }

    /// Subtracts calendar months, see [`Moment::add_months`].
    pub fn sub_months(&mut self, months: i32) -> &mut Self {
        self.add_months(months.saturating_neg())
    }

    /// Adds calendar years, clamping the day to the target month.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let mut moment = Moment::from_ymd(Calendar::Jalali, 1403, 12, 30).unwrap();
    /// moment.add_years(1);
    /// assert_eq!((1404, 12, 29), moment.ymd());
    /// ```
    pub fn add_years(&mut self, years: i32) -> &mut Self {
        let (y, m, d) = self.ymd();
        self.write_shifted(y.saturating_add(years), m, d)
    }

    /// Subtracts calendar years, see [`Moment::add_years`].
    pub fn sub_years(&mut self, years: i32) -> &mut Self {
        self.add_years(years.saturating_neg())
    }

    /// Adds days (negative to go back), keeping the time of day.
    pub fn add_days(&mut self, days: i64) -> &mut Self {
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.instant.checked_add_days(step)
        } else {
            self.instant.checked_sub_days(step)
        };
        self.replace_instant(moved)
    }

    /// Subtracts days.
    pub fn sub_days(&mut self, days: i64) -> &mut Self {
        self.add_days(days.saturating_neg())
    }

    /// Adds weeks.
    pub fn add_weeks(&mut self, weeks: i64) -> &mut Self {
        self.add_days(weeks.saturating_mul(7))
    }

    /// Subtracts weeks.
    pub fn sub_weeks(&mut self, weeks: i64) -> &mut Self {
        self.add_days(weeks.saturating_mul(-7))
    }

    /// Adds hours.
    pub fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.add_seconds(hours.saturating_mul(3600))
    }

    /// Adds minutes.
    pub fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.add_seconds(minutes.saturating_mul(60))
    }

    /// Adds seconds.
    pub fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        let moved = TimeDelta::try_seconds(seconds)
            .and_then(|delta| self.instant.checked_add_signed(delta));
        self.replace_instant(moved)
    }

    /// Moves to the first instant of the day.
    pub fn start_of_day(&mut self) -> &mut Self {
        let date = self.instant.date_naive();
        self.replace_local(date, NaiveTime::MIN)
    }

    /// Moves to the last instant of the day.
    pub fn end_of_day(&mut self) -> &mut Self {
        let date = self.instant.date_naive();
        self.replace_local(date, DAY_END)
    }

    /// Moves to the first instant of the month in the active calendar.
    pub fn start_of_month(&mut self) -> &mut Self {
        let (y, m, _) = self.ymd();
        self.write_clamped(y, m, 1).start_of_day()
    }

    /// Moves to the last instant of the month in the active calendar.
    pub fn end_of_month(&mut self) -> &mut Self {
        let (y, m, _) = self.ymd();
        let last = self.month_len(y, m);
        self.write_clamped(y, m, last).end_of_day()
    }

    /// Moves to the first instant of the year in the active calendar.
    pub fn start_of_year(&mut self) -> &mut Self {
        let y = self.year();
        self.write_clamped(y, 1, 1).start_of_day()
    }

    /// Moves to the last instant of the year in the active calendar.
    pub fn end_of_year(&mut self) -> &mut Self {
        let y = self.year();
        let last = self.month_len(y, 12);
        self.write_clamped(y, 12, last).end_of_day()
    }

    /// Moves to the first instant of the week, weeks beginning on
    /// [`Options::week_start`].
    pub fn start_of_week(&mut self) -> &mut Self {
        self.start_of_week_from(self.options.week_start())
    }

    /// Moves to the last instant of the week, weeks beginning on
    /// [`Options::week_start`].
    pub fn end_of_week(&mut self) -> &mut Self {
        self.end_of_week_from(self.options.week_start())
    }

    /// Moves back to the first instant of the latest `first` weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Weekday;
    /// use taqvim::{Calendar, Moment};
    ///
    /// // Wednesday 1404-01-06
    /// let mut moment = Moment::from_ymd_hms(Calendar::Jalali, 1404, 1, 6, 12, 0, 0).unwrap();
    /// moment.start_of_week_from(Weekday::Sat);
    /// assert_eq!((1404, 1, 2), moment.ymd());
    /// assert_eq!(0, moment.weekday());
    /// ```
    pub fn start_of_week_from(&mut self, first: Weekday) -> &mut Self {
        let first = self.calendar.weekday_index(first.num_days_from_sunday());
        let back = (self.weekday() + 7 - first) % 7;
        self.add_days(-(back as i64)).start_of_day()
    }

    /// Moves forward to the last instant of the week that begins on
    /// `first`.
    pub fn end_of_week_from(&mut self, first: Weekday) -> &mut Self {
        let last = first.pred().num_days_from_sunday();
        let last = self.calendar.weekday_index(last);
        let forward = (last + 7 - self.weekday()) % 7;
        self.add_days(forward as i64).end_of_day()
    }

    /// Same calendar day as `other`, both read in this moment's calendar
    /// and time zone.
    pub fn is_same_day(&self, other: &Moment) -> bool {
        self.ymd() == self.read_other(other).ymd()
    }

    /// Same calendar month as `other`; the year must match too when
    /// `check_year` is set.
    pub fn is_same_month(&self, other: &Moment, check_year: bool) -> bool {
        let (y, m, _) = self.ymd();
        let theirs = self.read_other(other);
        m == theirs.month() && (!check_year || y == theirs.year())
    }

    /// Same calendar year as `other`.
    pub fn is_same_year(&self, other: &Moment) -> bool {
        self.year() == self.read_other(other).year()
    }

    /// Reads `other`'s instant with this moment's calendar and offset.
    fn read_other(&self, other: &Moment) -> Components {
        let local = other.instant.with_timezone(self.instant.offset());
        let date = local.date_naive();
        let ymd = (date.year(), date.month(), date.day());
        Components::from_gregorian(self.calendar, ymd)
    }

    /// Target of month or year arithmetic. Years outside the supported
    /// range leave the moment unchanged.
    fn write_shifted(&mut self, year: i32, month: u32, day: u32) -> &mut Self {
        let (min, max) = self.calendar.year_range();
        if !(min..=max).contains(&year) {
            warn!(
                calendar = %self.calendar,
                year,
                month,
                "year out of supported range, unchanged"
            );
            return self;
        }
        self.write_clamped(year, month, day)
    }

    /// Writes a date of the active calendar, reducing `day` to the length
    /// of the month.
    fn write_clamped(&mut self, year: i32, month: u32, day: u32) -> &mut Self {
        let clamped = day.min(self.month_len(year, month));
        if clamped != day {
            debug!(
                calendar = %self.calendar,
                year,
                month,
                day,
                clamped,
                "clamping day to month length"
            );
        }
        let (gy, gm, gd) = self.calendar.to_gregorian(year, month, clamped);
        let time = self.instant.time();
        match NaiveDate::from_ymd_opt(gy, gm, gd) {
            Some(date) => self.replace_local(date, time),
            None => {
                warn!(
                    calendar = %self.calendar,
                    year,
                    month,
                    "date out of representable range, unchanged"
                );
                self
            }
        }
    }

    /// Length of a month known to be in `1..=12`.
    fn month_len(&self, year: i32, month: u32) -> u32 {
        self.calendar.days_in_month(year, month).unwrap_or_default()
    }

    fn replace_local(&mut self, date: NaiveDate, time: NaiveTime) -> &mut Self {
        let local = date
            .and_time(time)
            .and_local_timezone(*self.instant.offset());
        self.replace_instant(local.single())
    }

    fn replace_instant(&mut self, instant: Option<DateTime<FixedOffset>>) -> &mut Self {
        match instant {
            Some(instant) => self.instant = instant,
            None => warn!(instant = %self.instant, "instant out of representable range, unchanged"),
        }
        self
    }
}

/// Validates a date of `calendar` and converts it to a Gregorian date.
fn gregorian_date(
    calendar: Calendar,
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDate, CalendarError> {
    let ymd = Components::new(calendar, year, month, day)?;
    let (gy, gm, gd) = ymd.to_gregorian(calendar);
    let (min, max) = calendar.year_range();
    NaiveDate::from_ymd_opt(gy, gm, gd).ok_or(CalendarError::YearOutOfRange {
        calendar,
        year,
        min,
        max,
    })
}

fn time_of_day(hour: u32, minute: u32, second: u32) -> Result<NaiveTime, CalendarError> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or(CalendarError::InvalidTime {
        hour,
        minute,
        second,
    })
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Moment {}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(self.options.template()))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::new(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jalali(y: i32, m: u32, d: u32) -> Moment {
        Moment::from_ymd_hms(Calendar::Jalali, y, m, d, 13, 45, 10).unwrap()
    }

    fn tehran() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600 + 1800).unwrap()
    }

    #[test]
    fn wraps_gregorian_instant() {
        let instant = tehran().with_ymd_and_hms(2025, 3, 21, 0, 30, 0).unwrap();
        let moment = Moment::new(instant);
        assert_eq!(Calendar::Jalali, moment.calendar());
        assert_eq!((1404, 1, 1), moment.ymd());
        assert_eq!(instant, *moment.instant());
        // Still 2025-03-20 in UTC.
        let utc = Moment::new(instant.with_timezone(&Utc));
        assert_eq!((1403, 12, 30), utc.ymd());
    }

    #[test]
    fn switching_calendar_keeps_instant() {
        let mut moment = jalali(1404, 1, 1);
        let before = (moment.ymd(), moment.timestamp());
        moment.use_hijri();
        assert_eq!((1446, 9, 21), moment.ymd());
        moment.use_gregorian();
        assert_eq!((2025, 3, 21), moment.ymd());
        moment.use_jalali();
        assert_eq!(before, (moment.ymd(), moment.timestamp()));
    }

    #[test]
    fn set_date_keeps_time() {
        let mut moment = jalali(1404, 1, 1);
        moment.set_date(1403, 12, 30).unwrap();
        assert_eq!((1403, 12, 30), moment.ymd());
        assert_eq!(
            (13, 45, 10),
            (moment.hour(), moment.minute(), moment.second())
        );
    }

    #[test]
    fn failed_set_leaves_moment_unchanged() {
        let mut moment = jalali(1404, 1, 1);
        let before = moment.clone();
        assert_eq!(
            Err(CalendarError::InvalidMonth { month: 13 }),
            moment.set_month(13).map(|_| ())
        );
        assert!(moment.set_day(32).is_err());
        assert!(moment.set_year(0).is_err());
        assert!(moment.set_time(24, 0, 0).is_err());
        assert_eq!(before, moment);
        assert_eq!(before.to_array(), moment.to_array());
    }

    #[test]
    fn setters() {
        let mut moment = Moment::from_ymd(Calendar::Hijri, 1445, 12, 30).unwrap();
        moment
            .set_month(11)
            .unwrap()
            .set_day(29)
            .unwrap()
            .set_year(1440)
            .unwrap();
        assert_eq!((1440, 11, 29), moment.ymd());
        moment.set_time(23, 5, 9).unwrap();
        assert_eq!([1440, 11, 29, 23, 5, 9], moment.to_array());
    }

    #[test]
    fn month_arithmetic_clamps() {
        let mut moment = jalali(1404, 6, 31);
        moment.add_months(1);
        assert_eq!((1404, 7, 30), moment.ymd());
        moment.add_months(5);
        assert_eq!((1404, 12, 29), moment.ymd());
        moment.add_months(1);
        assert_eq!((1405, 1, 29), moment.ymd());
        moment.sub_months(12);
        assert_eq!((1404, 1, 29), moment.ymd());
        moment.sub_months(1);
        assert_eq!((1403, 12, 29), moment.ymd());
        assert_eq!(
            (13, 45, 10),
            (moment.hour(), moment.minute(), moment.second())
        );
    }

    #[test]
    fn month_arithmetic_in_hijri() {
        let mut moment = Moment::from_ymd(Calendar::Hijri, 1446, 1, 30).unwrap();
        moment.add_months(1);
        assert_eq!((1446, 2, 29), moment.ymd());
        moment.add_months(-2);
        assert_eq!((1445, 12, 29), moment.ymd());
    }

    #[test]
    fn year_arithmetic_clamps() {
        let mut moment = jalali(1403, 12, 30);
        moment.add_years(1);
        assert_eq!((1404, 12, 29), moment.ymd());
        moment.sub_years(4);
        assert_eq!((1400, 12, 29), moment.ymd());

        let mut moment = Moment::from_ymd(Calendar::Hijri, 1445, 12, 30).unwrap();
        moment.add_years(1);
        assert_eq!((1446, 12, 29), moment.ymd());
    }

    #[test]
    fn day_arithmetic() {
        let mut moment = jalali(1403, 12, 29);
        moment.add_days(1);
        assert_eq!((1403, 12, 30), moment.ymd());
        moment.add_days(1);
        assert_eq!((1404, 1, 1), moment.ymd());
        moment.sub_days(2).add_weeks(2).sub_weeks(1);
        assert_eq!((1404, 1, 6), moment.ymd());
        moment.add_hours(11).add_minutes(-45).add_seconds(-10);
        assert_eq!([1404, 1, 7, 0, 0, 0], moment.to_array());
    }

    #[test]
    fn month_and_year_boundaries() {
        let mut moment = jalali(1403, 7, 15);
        moment.end_of_month();
        assert_eq!((1403, 7, 30), moment.ymd());
        assert_eq!(DAY_END, moment.instant().time());
        moment.start_of_month();
        assert_eq!((1403, 7, 1), moment.ymd());
        assert_eq!(NaiveTime::MIN, moment.instant().time());
        moment.end_of_year();
        assert_eq!((1403, 12, 30), moment.ymd());
        moment.start_of_year();
        assert_eq!((1403, 1, 1), moment.ymd());

        let mut moment = Moment::from_ymd(Calendar::Hijri, 1446, 5, 10).unwrap();
        moment.end_of_year();
        assert_eq!((1446, 12, 29), moment.ymd());
    }

    #[test]
    fn week_boundaries() {
        // 2025-03-26 is a Wednesday, 1404-01-06.
        let mut moment = jalali(1404, 1, 6);
        assert_eq!(4, moment.weekday());
        moment.end_of_week();
        assert_eq!((1404, 1, 8), moment.ymd());
        assert_eq!(6, moment.weekday());
        assert_eq!(DAY_END, moment.instant().time());
        moment.start_of_week();
        assert_eq!((1404, 1, 2), moment.ymd());
        assert_eq!(0, moment.weekday());

        let mut moment = jalali(1404, 1, 6).with_calendar(Calendar::Gregorian);
        moment.start_of_week_from(Weekday::Mon);
        assert_eq!((2025, 3, 24), moment.ymd());
        moment.end_of_week_from(Weekday::Mon);
        assert_eq!((2025, 3, 30), moment.ymd());
    }

    #[test]
    fn start_of_week_on_first_day_stays() {
        // 1404-01-02 is a Saturday.
        let mut moment = jalali(1404, 1, 2);
        moment.start_of_week();
        assert_eq!((1404, 1, 2), moment.ymd());
    }

    #[test]
    fn weekday_remap() {
        // 2025-03-21 is a Friday.
        let moment = jalali(1404, 1, 1);
        assert_eq!(6, moment.weekday());
        assert_eq!(6, moment.clone().with_calendar(Calendar::Hijri).weekday());
        assert_eq!(5, moment.with_calendar(Calendar::Gregorian).weekday());
    }

    #[test]
    fn year_queries() {
        let moment = jalali(1403, 12, 30);
        assert!(moment.is_leap_year());
        assert_eq!(366, moment.days_in_year());
        assert_eq!(30, moment.days_in_month());
        assert_eq!(366, moment.day_of_year());
        let moment = jalali(1404, 1, 1);
        assert_eq!(1, moment.day_of_year());
        assert_eq!(1, moment.week_of_year());
        // Friday 1404-01-01 closes week 1, Saturday 1404-01-02 opens week 2.
        assert_eq!(2, jalali(1404, 1, 2).week_of_year());
        assert_eq!(2, jalali(1404, 1, 8).week_of_year());
        assert_eq!(3, jalali(1404, 1, 9).week_of_year());
    }

    #[test]
    fn same_period() {
        let a = jalali(1404, 2, 10);
        let b = jalali(1404, 2, 31);
        let c = jalali(1403, 2, 10);
        assert!(a.is_same_month(&b, true));
        assert!(!a.is_same_day(&b));
        assert!(a.is_same_month(&c, false));
        assert!(!a.is_same_month(&c, true));
        assert!(!a.is_same_year(&c));
        // `other` is re-read in this moment's calendar.
        let hijri = b.clone().with_calendar(Calendar::Hijri);
        assert!(a.is_same_month(&hijri, true));
        assert!(
            hijri.is_same_day(&b.clone().with_calendar(Calendar::Gregorian))
        );
    }

    #[test]
    fn ordering_uses_instant() {
        let a = jalali(1404, 1, 1);
        let b = a.clone().with_calendar(Calendar::Hijri);
        assert_eq!(a, b);
        let mut later = a.clone();
        later.add_seconds(1);
        assert!(a < later);
    }

    #[test]
    fn timezone() {
        let mut moment = Moment::from_ymd_hms(Calendar::Jalali, 1403, 12, 30, 22, 0, 0).unwrap();
        let timestamp = moment.timestamp();
        moment.set_timezone(tehran());
        assert_eq!(timestamp, moment.timestamp());
        assert_eq!(tehran(), moment.timezone());
        assert_eq!((1404, 1, 1), moment.ymd());
        assert_eq!(1, moment.hour());
    }

    #[test]
    fn date_matches_jdn() {
        let moment = Moment::from_ymd(Calendar::Gregorian, 2000, 1, 1).unwrap();
        assert_eq!(2451545, moment.date().jdn());
        let moment = Moment::from_ymd(Calendar::Gregorian, 1, 1, 1).unwrap();
        assert_eq!(1721426, moment.date().jdn());
    }

    #[test]
    fn copies_are_independent() {
        let original = jalali(1404, 1, 1).with_digits(DigitStyle::Persian);
        let mut copy = original.clone();
        copy.add_days(1).use_hijri();
        assert_eq!((1404, 1, 1), original.ymd());
        assert_eq!(Calendar::Hijri, copy.calendar());
        assert_eq!(DigitStyle::Persian, copy.options().digits());
    }

    #[test]
    fn shifts_past_supported_years_are_ignored() {
        for calendar in [Calendar::Jalali, Calendar::Hijri, Calendar::Gregorian] {
            let mut moment = Moment::from_ymd(calendar, 1400, 6, 15).unwrap();
            let before = moment.to_array();
            moment.add_years(10_000_000);
            moment.add_years(i32::MAX);
            moment.sub_years(i32::MAX);
            moment.add_years(-1400);
            moment.add_months(i32::MAX);
            moment.add_months(i32::MIN);
            moment.sub_months(i32::MIN);
            assert_eq!(before, moment.to_array(), "{calendar}");

            let (_, max) = calendar.year_range();
            moment.add_years(max - 1400);
            assert_eq!(max, moment.year(), "{calendar}");
        }
    }
}
