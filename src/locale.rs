//! Localized text for dates: month and weekday names, meridiem words,
//! relative time phrases and digit glyphs.
//!
//! Each calendar has one static [`Locale`], see [`crate::Calendar::locale`].
//! Lookups never fail; an out-of-range key yields an empty string.

use crate::{hijri, jalali};

/// Localized names and phrases of one calendar.
#[derive(Debug)]
pub struct Locale {
    /// Full month names, month 1 first.
    pub months: [&'static str; 12],
    /// Abbreviated month names, month 1 first.
    pub months_short: [&'static str; 12],
    /// Full weekday names, indexed from Sunday (`0`) to Saturday (`6`).
    pub weekdays: [&'static str; 7],
    /// Abbreviated weekday names, indexed like [`Locale::weekdays`].
    pub weekdays_short: [&'static str; 7],
    /// `[am, pm]` in full form.
    pub meridiem: [&'static str; 2],
    /// `[am, pm]` in short form.
    pub meridiem_short: [&'static str; 2],
    /// `(singular, plural)` word of each [`Unit`], in [`Unit::ALL`] order.
    pub units: [(&'static str, &'static str); 7],
    /// Phrase for a moment in the past, `{}` stands for "<value> <unit>".
    pub past: &'static str,
    /// Phrase for a moment in the future, `{}` stands for "<value> <unit>".
    pub future: &'static str,
    /// Suffix turning a day number into an ordinal.
    pub ordinal: fn(u32) -> &'static str,
}

impl Locale {
    /// Full name of `month` (`1..=12`).
    pub fn month_name(&self, month: u32) -> &'static str {
        lookup(&self.months, month.wrapping_sub(1))
    }
    /// Abbreviated name of `month` (`1..=12`).
    pub fn month_name_short(&self, month: u32) -> &'static str {
        lookup(&self.months_short, month.wrapping_sub(1))
    }
    /// Full weekday name, `weekday` counted from Sunday (`0`).
    pub fn weekday_name(&self, weekday: u32) -> &'static str {
        lookup(&self.weekdays, weekday)
    }
    /// Abbreviated weekday name, `weekday` counted from Sunday (`0`).
    pub fn weekday_name_short(&self, weekday: u32) -> &'static str {
        lookup(&self.weekdays_short, weekday)
    }
    /// Meridiem word for the morning or afternoon.
    pub fn meridiem(&self, is_pm: bool, short: bool) -> &'static str {
        let words = if short {
            &self.meridiem_short
        } else {
            &self.meridiem
        };
        words[is_pm as usize]
    }
    /// Ordinal suffix of `day`.
    pub fn ordinal_suffix(&self, day: u32) -> &'static str {
        (self.ordinal)(day)
    }

    /// Builds a relative time sentence, e.g. "3 days ago".
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::Calendar;
    /// use taqvim::locale::Unit;
    ///
    /// let locale = Calendar::Gregorian.locale();
    /// assert_eq!("3 days ago", locale.relative_time(Unit::Day, 3, true));
    /// assert_eq!("in 1 hour", locale.relative_time(Unit::Hour, 1, false));
    /// ```
    pub fn relative_time(&self, unit: Unit, value: i64, is_past: bool) -> String {
        let (singular, plural) = self.units[unit as usize];
        let word = if value == 1 { singular } else { plural };
        let pattern = if is_past { self.past } else { self.future };
        pattern.replacen("{}", &format!("{value} {word}"), 1)
    }
}

fn lookup(table: &[&'static str], idx: u32) -> &'static str {
    table.get(idx as usize).copied().unwrap_or("")
}

/// Unit of a relative time phrase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 7] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Length of the unit in seconds. Months and years are flat 30 and 365
    /// days.
    pub fn seconds(&self) -> i64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 3600,
            Unit::Day => 86400,
            Unit::Week => 604800,
            Unit::Month => 2592000,
            Unit::Year => 31536000,
        }
    }

    /// Largest unit not longer than `magnitude` seconds, with the count of
    /// whole units.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::locale::Unit;
    ///
    /// assert_eq!((Unit::Second, 59), Unit::fit(59));
    /// assert_eq!((Unit::Minute, 1), Unit::fit(60));
    /// assert_eq!((Unit::Week, 4), Unit::fit(29 * 86400));
    /// ```
    pub fn fit(magnitude: i64) -> (Unit, i64) {
        let magnitude = magnitude.abs();
        let unit = Self::ALL
            .into_iter()
            .rev()
            .find(|unit| magnitude >= unit.seconds())
            .unwrap_or(Unit::Second);
        (unit, magnitude / unit.seconds())
    }
}

/// Script used for digits in formatted output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitStyle {
    /// `0123456789`, output is left untouched.
    #[default]
    Latin,
    /// Extended Arabic-Indic digits, `۰۱۲۳۴۵۶۷۸۹`.
    Persian,
    /// Arabic-Indic digits, `٠١٢٣٤٥٦٧٨٩`.
    Arabic,
}

impl DigitStyle {
    /// Digit glyphs of this style, `0` first.
    pub fn glyphs(&self) -> &'static [char; 10] {
        const LATIN: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
        match self {
            DigitStyle::Latin => &LATIN,
            DigitStyle::Persian => &jalali::fmt::DIGITS,
            DigitStyle::Arabic => &hijri::fmt::DIGITS,
        }
    }

    /// Replaces every Latin digit of `text` with this style's glyph.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::DigitStyle;
    ///
    /// assert_eq!("۱۴۰۴/۰۱/۰۱", DigitStyle::Persian.apply("1404/01/01"));
    /// assert_eq!("1404/01/01", DigitStyle::Latin.apply("1404/01/01"));
    /// ```
    pub fn apply(&self, text: &str) -> String {
        if *self == DigitStyle::Latin {
            return text.to_owned();
        }
        let glyphs = self.glyphs();
        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => glyphs[d as usize],
                _ => c,
            })
            .collect()
    }

    /// Replaces Persian and Arabic digits of `text` with Latin ones.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::DigitStyle;
    ///
    /// assert_eq!("1446-01-01", DigitStyle::to_latin("١٤٤٦-۰۱-01"));
    /// ```
    pub fn to_latin(text: &str) -> String {
        text.chars()
            .map(|c| {
                [DigitStyle::Persian, DigitStyle::Arabic]
                    .iter()
                    .find_map(|style| style.glyphs().iter().position(|&g| g == c))
                    .and_then(|d| char::from_digit(d as u32, 10))
                    .unwrap_or(c)
            })
            .collect()
    }
}
