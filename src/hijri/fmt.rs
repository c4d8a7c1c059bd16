//! Arabic names used when formatting Hijri dates.

use crate::locale::Locale;

/// Arabic-Indic digits, `٠` first.
pub const DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Arabic locale of the Hijri calendar.
///
/// # Example
///
/// ```
/// use taqvim::hijri;
///
/// assert_eq!("رمضان", hijri::fmt::LOCALE.month_name(9));
/// assert_eq!("الجمعة", hijri::fmt::LOCALE.weekday_name(5));
/// ```
pub static LOCALE: Locale = Locale {
    months: [
        "محرم",
        "صفر",
        "ربيع الأول",
        "ربيع الآخر",
        "جمادى الأولى",
        "جمادى الآخرة",
        "رجب",
        "شعبان",
        "رمضان",
        "شوال",
        "ذو القعدة",
        "ذو الحجة",
    ],
    months_short: [
        "محرم", "صفر", "ربيع 1", "ربيع 2", "جمادى 1", "جمادى 2", "رجب", "شعبان", "رمضان", "شوال",
        "القعدة", "الحجة",
    ],
    weekdays: [
        "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
    ],
    weekdays_short: ["أحد", "اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"],
    meridiem: ["صباحاً", "مساءً"],
    meridiem_short: ["ص", "م"],
    units: [
        ("ثانية", "ثوان"),
        ("دقيقة", "دقائق"),
        ("ساعة", "ساعات"),
        ("يوم", "أيام"),
        ("أسبوع", "أسابيع"),
        ("شهر", "أشهر"),
        ("سنة", "سنوات"),
    ],
    past: "منذ {}",
    future: "بعد {}",
    ordinal: |_| "",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Unit;

    #[test]
    fn names() {
        assert_eq!("محرم", LOCALE.month_name(1));
        assert_eq!("ذو الحجة", LOCALE.month_name(12));
        assert_eq!("سبت", LOCALE.weekday_name_short(6));
        assert_eq!("م", LOCALE.meridiem(true, true));
        assert_eq!("", LOCALE.ordinal_suffix(1));
    }

    #[test]
    fn relative_time() {
        assert_eq!("منذ 2 ساعات", LOCALE.relative_time(Unit::Hour, 2, true));
        assert_eq!("بعد 1 شهر", LOCALE.relative_time(Unit::Month, 1, false));
    }
}
