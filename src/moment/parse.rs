//! Reading moments back from text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use super::Moment;
use crate::calendar::Calendar;
use crate::error::ParseError;
use crate::locale::DigitStyle;

/// Formatting tokens that carry no parseable number.
const UNSUPPORTED: &str = "yFMlDwNzWtLSaAhgvuOPTZU";

#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
}

impl Moment {
    /// Reads `input` laid out as `template`, a date of `calendar` in UTC.
    ///
    /// Numeric tokens are `Y` (up to 4 digits), `m` `n` `d` `j` `H` `G` `i`
    /// `s` (up to 2 digits). `\` escapes the next character; any other
    /// character must appear in the input as is. Persian and Arabic digits
    /// are read like Latin ones.
    ///
    /// Missing fields default to the current year, the first month and day,
    /// and midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let moment = Moment::parse(Calendar::Jalali, "Y/m/d H:i", "۱۴۰۳/۱۲/۳۰ 23:59").unwrap();
    /// assert_eq!([1403, 12, 30, 23, 59, 0], moment.to_array());
    ///
    /// assert!(Moment::parse(Calendar::Jalali, "Y/m/d", "1404/12/30").is_err());
    /// ```
    pub fn parse(calendar: Calendar, template: &str, input: &str) -> Result<Moment, ParseError> {
        trace!(%calendar, template, input, "parsing");
        let input = DigitStyle::to_latin(input);
        let mut fields = Fields::default();
        let mut pos = 0;

        let mut tokens = template.chars();
        while let Some(token) = tokens.next() {
            let expected = match token {
                'Y' => {
                    fields.year = Some(number(&input, &mut pos, token, 4)? as i32);
                    continue;
                }
                'm' | 'n' => {
                    fields.month = Some(number(&input, &mut pos, token, 2)?);
                    continue;
                }
                'd' | 'j' => {
                    fields.day = Some(number(&input, &mut pos, token, 2)?);
                    continue;
                }
                'H' | 'G' => {
                    fields.hour = Some(number(&input, &mut pos, token, 2)?);
                    continue;
                }
                'i' => {
                    fields.minute = Some(number(&input, &mut pos, token, 2)?);
                    continue;
                }
                's' => {
                    fields.second = Some(number(&input, &mut pos, token, 2)?);
                    continue;
                }
                '\\' => match tokens.next() {
                    Some(escaped) => escaped,
                    None => break,
                },
                _ if UNSUPPORTED.contains(token) => {
                    return Err(ParseError::UnsupportedToken { token });
                }
                _ => token,
            };
            match input[pos..].chars().next() {
                Some(found) if found == expected => pos += found.len_utf8(),
                found => {
                    return Err(ParseError::Literal {
                        expected,
                        found,
                        position: pos,
                    });
                }
            }
        }
        if pos < input.len() {
            return Err(ParseError::TrailingInput { position: pos });
        }

        let year = match fields.year {
            Some(year) => year,
            None => Moment::now(calendar).year(),
        };
        let moment = Moment::from_ymd_hms(
            calendar,
            year,
            fields.month.unwrap_or(1),
            fields.day.unwrap_or(1),
            fields.hour.unwrap_or(0),
            fields.minute.unwrap_or(0),
            fields.second.unwrap_or(0),
        )?;
        Ok(moment)
    }

    /// Reads a Gregorian date/time string and presents it in `calendar`.
    ///
    /// Accepted layouts are RFC 3339 (offset kept), `YYYY-MM-DD HH:MM:SS`
    /// and `YYYY-MM-DD`, the last two in UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, Moment};
    ///
    /// let moment = Moment::parse_iso(Calendar::Hijri, "2024-07-08").unwrap();
    /// assert_eq!((1446, 1, 1), moment.ymd());
    ///
    /// let moment = Moment::parse_iso(Calendar::Jalali, "2025-03-21T08:00:00+03:30").unwrap();
    /// assert_eq!((1404, 1, 1), moment.ymd());
    /// assert_eq!(12600, moment.timezone().local_minus_utc());
    /// ```
    pub fn parse_iso(calendar: Calendar, input: &str) -> Result<Moment, ParseError> {
        let input = DigitStyle::to_latin(input.trim());
        let instant = match DateTime::parse_from_rfc3339(&input) {
            Ok(instant) => instant,
            Err(_) => match NaiveDateTime::parse_from_str(&input, "%Y-%m-%d %H:%M:%S") {
                Ok(naive) => naive.and_utc().fixed_offset(),
                Err(_) => NaiveDate::parse_from_str(&input, "%Y-%m-%d")?
                    .and_time(NaiveTime::MIN)
                    .and_utc()
                    .fixed_offset(),
            },
        };
        Ok(Moment::new(instant).with_calendar(calendar))
    }
}

/// Reads at most `width` ASCII digits at `pos`.
fn number(input: &str, pos: &mut usize, token: char, width: usize) -> Result<u32, ParseError> {
    let digits = input[*pos..]
        .bytes()
        .take(width)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(ParseError::MissingNumber {
            token,
            position: *pos,
        });
    }
    let value = input[*pos..*pos + digits]
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'));
    *pos += digits;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::error::CalendarError;
    use crate::{Calendar, Moment, ParseError};

    #[test]
    fn numeric_tokens() {
        let moment = Moment::parse(Calendar::Jalali, "Y-m-d H:i:s", "1404-01-01 15:04:05").unwrap();
        assert_eq!([1404, 1, 1, 15, 4, 5], moment.to_array());
        assert_eq!(0, moment.timezone().local_minus_utc());

        let moment = Moment::parse(Calendar::Hijri, "j/n/Y", "21/9/1446").unwrap();
        assert_eq!((1446, 9, 21), moment.ymd());
        assert_eq!(
            (2025, 3, 21),
            moment.with_calendar(Calendar::Gregorian).ymd()
        );
    }

    #[test]
    fn native_digits() {
        let moment = Moment::parse(Calendar::Hijri, "Y/m/d", "١٤٤٦/٠١/٠١").unwrap();
        assert_eq!((1446, 1, 1), moment.ymd());
    }

    #[test]
    fn escapes_and_defaults() {
        let moment = Moment::parse(Calendar::Jalali, r"\Y Y", "Y 1404").unwrap();
        assert_eq!([1404, 1, 1, 0, 0, 0], moment.to_array());
        let moment = Moment::parse(Calendar::Gregorian, "m/d", "02/29");
        // Only valid when the current year is leap.
        let leap = Moment::now(Calendar::Gregorian).is_leap_year();
        assert_eq!(leap, moment.is_ok());
    }

    #[test]
    fn errors() {
        let dataset = [
            (
                "Y/m/d",
                "1404-01-01",
                ParseError::Literal {
                    expected: '/',
                    found: Some('-'),
                    position: 4,
                },
            ),
            (
                "Y/m/d",
                "1404/01",
                ParseError::Literal {
                    expected: '/',
                    found: None,
                    position: 7,
                },
            ),
            (
                "Y/m/d",
                "1404//01",
                ParseError::MissingNumber {
                    token: 'm',
                    position: 5,
                },
            ),
            (
                "F Y",
                "فروردین 1404",
                ParseError::UnsupportedToken { token: 'F' },
            ),
            (
                "Y/m/d",
                "1404/01/01x",
                ParseError::TrailingInput { position: 10 },
            ),
            ("Y", "14041", ParseError::TrailingInput { position: 4 }),
            (
                "Y/m/d",
                "1404/12/30",
                ParseError::Invalid(CalendarError::InvalidDay {
                    calendar: Calendar::Jalali,
                    year: 1404,
                    month: 12,
                    day: 30,
                    max_day: 29,
                }),
            ),
        ];
        for (template, input, std) in dataset {
            assert_eq!(
                Err(std), Moment::parse(Calendar::Jalali, template, input),
                "{input}"
            );
        }
    }

    #[test]
    fn iso() {
        let moment = Moment::parse_iso(Calendar::Jalali, "2025-03-20 23:00:00").unwrap();
        assert_eq!([1403, 12, 30, 23, 0, 0], moment.to_array());
        let moment = Moment::parse_iso(Calendar::Jalali, " 2025-03-21T15:04:05+03:30 ").unwrap();
        assert_eq!([1404, 1, 1, 15, 4, 5], moment.to_array());
        assert!(matches!(
            Moment::parse_iso(Calendar::Jalali, "not a date"),
            Err(ParseError::Iso(_))
        ));
    }
}
