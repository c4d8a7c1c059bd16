//! Error types.

use crate::calendar::Calendar;

/// A calendar date or time of day that cannot be written.
///
/// Returned when components are set or a moment is built from components;
/// arithmetic clamps instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number.
        month: u32,
    },

    /// Returned when a day number is not a day of the given month.
    #[error("invalid day: {day} for {calendar} {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Calendar the date was given in.
        calendar: Calendar,
        /// Year of the date.
        year: i32,
        /// Month of the date.
        month: u32,
        /// The invalid day number.
        day: u32,
        /// Number of days in that month.
        max_day: u32,
    },

    /// Returned when a year is outside the supported range of a calendar.
    #[error("year {year} out of supported {calendar} range {min}..={max}")]
    YearOutOfRange {
        /// Calendar the year was given in.
        calendar: Calendar,
        /// The unsupported year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when an hour, minute or second is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// The hour given.
        hour: u32,
        /// The minute given.
        minute: u32,
        /// The second given.
        second: u32,
    },
}

/// An input string that does not match its template.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Returned when a literal character of the template is not found.
    #[error("expected {expected:?} at byte {position}, found {found:?}")]
    Literal {
        /// Character required by the template.
        expected: char,
        /// Character found in the input, `None` at end of input.
        found: Option<char>,
        /// Byte offset in the input.
        position: usize,
    },

    /// Returned when a numeric token has no digits in the input.
    #[error("expected a number for token {token:?} at byte {position}")]
    MissingNumber {
        /// Template token being parsed.
        token: char,
        /// Byte offset in the input.
        position: usize,
    },

    /// Returned when the template contains a token that cannot be parsed.
    #[error("token {token:?} is not supported when parsing")]
    UnsupportedToken {
        /// The unsupported token.
        token: char,
    },

    /// Returned when input remains after the whole template was matched.
    #[error("unexpected trailing input at byte {position}")]
    TrailingInput {
        /// Byte offset of the first unparsed character.
        position: usize,
    },

    /// Returned when a Gregorian date/time string is not recognized.
    #[error("invalid date/time string: {0}")]
    Iso(#[from] chrono::ParseError),

    /// Returned when the parsed components do not form a valid date.
    #[error(transparent)]
    Invalid(#[from] CalendarError),
}
