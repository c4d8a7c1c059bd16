//! Template formatting.

use chrono::Timelike;

use super::Moment;

/// `strftime` equivalent of a time-of-day or offset token.
fn time_spec(token: char) -> Option<&'static str> {
    Some(match token {
        'H' => "%H",
        'G' => "%-H",
        'h' => "%I",
        'g' => "%-I",
        'i' => "%M",
        's' => "%S",
        'v' => "%3f",
        'u' => "%6f",
        'O' => "%z",
        'P' => "%:z",
        'T' => "%Z",
        'U' => "%s",
        _ => return None,
    })
}

impl Moment {
    /// Renders the moment with `template`.
    ///
    /// | Token | Output |
    /// |-------|--------|
    /// | `Y` `y` | year, two-digit year |
    /// | `m` `n` | month, zero-padded or not |
    /// | `d` `j` | day of month, zero-padded or not |
    /// | `F` `M` | month name, full or short |
    /// | `l` `D` | weekday name, full or short |
    /// | `w` `N` | weekday index `0..=6`, or `1..=7` |
    /// | `z` | day of year, counted from `0` |
    /// | `W` | week of year |
    /// | `t` | days in the month |
    /// | `L` | `1` in a leap year, `0` otherwise |
    /// | `S` | ordinal suffix of the day |
    /// | `a` `A` | meridiem, short or full |
    /// | `H` `G` `h` `g` `i` `s` `v` `u` | time of day |
    /// | `O` `P` `T` `Z` `U` | offset, offset name, offset seconds, timestamp |
    ///
    /// Date tokens use the active calendar; time tokens are calendar-independent
    /// and rendered by `chrono`. `\` makes the next character literal, and any
    /// other character is copied as is.
    ///
    /// Digits of the result are finally rewritten in the configured
    /// [`DigitStyle`](crate::DigitStyle), whichever token produced them.
    ///
    /// # Example
    ///
    /// ```
    /// use taqvim::{Calendar, DigitStyle, Moment};
    ///
    /// let moment = Moment::from_ymd_hms(Calendar::Jalali, 1404, 1, 1, 14, 5, 0).unwrap();
    /// assert_eq!("جمعه 1 فروردین 1404", moment.format("l j F Y"));
    /// assert_eq!("Y=1404, 14:05", moment.format(r"\Y=Y, H:i"));
    ///
    /// let moment = moment.with_digits(DigitStyle::Persian);
    /// assert_eq!("۱۴۰۴/۰۱/۰۱", moment.format("Y/m/d"));
    /// ```
    pub fn format(&self, template: &str) -> String {
        let (year, month, day) = self.ymd();
        let locale = self.calendar.locale();
        let from_sunday = self.date().day_of_week_from_sunday();
        let is_pm = self.instant.hour() >= 12;

        let mut out = String::with_capacity(template.len() * 2);
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.extend(chars.next()),
                'Y' => out.push_str(&year.to_string()),
                'y' => out.push_str(&format!("{:02}", year.rem_euclid(100))),
                'm' => out.push_str(&format!("{month:02}")),
                'n' => out.push_str(&month.to_string()),
                'd' => out.push_str(&format!("{day:02}")),
                'j' => out.push_str(&day.to_string()),
                'F' => out.push_str(locale.month_name(month)),
                'M' => out.push_str(locale.month_name_short(month)),
                'l' => out.push_str(locale.weekday_name(from_sunday)),
                'D' => out.push_str(locale.weekday_name_short(from_sunday)),
                'w' => out.push_str(&self.weekday().to_string()),
                'N' => out.push_str(&(self.weekday() + 1).to_string()),
                'z' => out.push_str(&(self.day_of_year() - 1).to_string()),
                'W' => out.push_str(&format!("{:02}", self.week_of_year())),
                't' => out.push_str(&self.days_in_month().to_string()),
                'L' => out.push(if self.is_leap_year() { '1' } else { '0' }),
                'S' => out.push_str(locale.ordinal_suffix(day)),
                'a' => out.push_str(locale.meridiem(is_pm, true)),
                'A' => out.push_str(locale.meridiem(is_pm, false)),
                'Z' => out.push_str(&self.instant.offset().local_minus_utc().to_string()),
                _ => match time_spec(c) {
                    Some(spec) => out.push_str(&self.instant.format(spec).to_string()),
                    None => out.push(c),
                },
            }
        }
        self.options.digits().apply(&out)
    }
}
