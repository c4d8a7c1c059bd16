//! Persian names used when formatting Jalali dates.

use crate::locale::Locale;

/// Extended Arabic-Indic digits as written in Persian, `۰` first.
pub const DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Persian locale of the Jalali calendar.
///
/// # Example
///
/// ```
/// use taqvim::jalali;
///
/// assert_eq!("فروردین", jalali::fmt::LOCALE.month_name(1));
/// assert_eq!("جمعه", jalali::fmt::LOCALE.weekday_name(5));
/// ```
pub static LOCALE: Locale = Locale {
    months: [
        "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور", "مهر", "آبان", "آذر", "دی",
        "بهمن", "اسفند",
    ],
    months_short: [
        "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
    ],
    weekdays: [
        "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنجشنبه", "جمعه", "شنبه",
    ],
    weekdays_short: ["ی", "د", "س", "چ", "پ", "ج", "ش"],
    meridiem: ["قبل از ظهر", "بعد از ظهر"],
    meridiem_short: ["ق.ظ", "ب.ظ"],
    // Persian nouns stay singular after a numeral.
    units: [
        ("ثانیه", "ثانیه"),
        ("دقیقه", "دقیقه"),
        ("ساعت", "ساعت"),
        ("روز", "روز"),
        ("هفته", "هفته"),
        ("ماه", "ماه"),
        ("سال", "سال"),
    ],
    past: "{} پیش",
    future: "{} بعد",
    ordinal: |_| "ام",
};
