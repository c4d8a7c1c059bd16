//! Relative time text and differences between moments.

use super::Moment;
use crate::locale::Unit;

impl Moment {
    /// Describes this moment relative to `reference` in the active
    /// calendar's language, e.g. "3 days ago".
    ///
    /// The largest [`Unit`] that fits the distance is used, months and years
    /// being flat 30 and 365 days. A moment equal to `reference` reads as
    /// being in the future.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let reference = Moment::from_ymd(Calendar::Jalali, 1404, 1, 10).unwrap();
    /// let moment = Moment::from_ymd(Calendar::Jalali, 1404, 1, 7).unwrap();
    /// assert_eq!("3 روز پیش", moment.relative_to(&reference));
    ///
    /// let moment = moment.with_calendar(Calendar::Gregorian);
    /// assert_eq!("in 3 days", reference.with_calendar(Calendar::Gregorian).relative_to(&moment));
    /// ```
    pub fn relative_to(&self, reference: &Moment) -> String {
        let delta = reference.timestamp().saturating_sub(self.timestamp());
        let (unit, value) = Unit::fit(delta);
        let text = self.calendar.locale().relative_time(unit, value, delta > 0);
        self.options.digits().apply(&text)
    }

    /// Describes this moment relative to the current time.
    pub fn relative_to_now(&self) -> String {
        self.relative_to(&Moment::now(self.calendar))
    }

    /// Seconds from this moment to `other`, negative when `other` is
    /// earlier.
    pub fn diff_in_seconds(&self, other: &Moment) -> i64 {
        other.timestamp().saturating_sub(self.timestamp())
    }

    /// Whole minutes from this moment to `other`.
    pub fn diff_in_minutes(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Minute)
    }

    /// Whole hours from this moment to `other`.
    pub fn diff_in_hours(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Hour)
    }

    /// Whole days of 24 hours from this moment to `other`.
    pub fn diff_in_days(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Day)
    }

    /// Whole weeks from this moment to `other`.
    pub fn diff_in_weeks(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Week)
    }

    /// Approximate months from this moment to `other`, a month being 30
    /// days whatever the calendar.
    pub fn diff_in_months(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Month)
    }

    /// Approximate years from this moment to `other`, a year being 365
    /// days whatever the calendar.
    pub fn diff_in_years(&self, other: &Moment) -> i64 {
        self.diff_in(other, Unit::Year)
    }

    // Truncates toward zero.
    fn diff_in(&self, other: &Moment, unit: Unit) -> i64 {
        self.diff_in_seconds(other) / unit.seconds()
    }
}
