//! Utilities for presenting and manipulating instants in the Jalali (Solar
//! Hijri), tabular Hijri and Gregorian calendars.
//!
//! The conversion algorithms are arithmetic only (33-year and 30-year leap
//! cycles), and live in [`jalali`] and [`hijri`]. [`Moment`] wraps a
//! [`chrono`] date-time and reads, writes, shifts and formats its date in
//! the active [`Calendar`], without ever altering the wrapped Gregorian
//! value behind the caller's back.
//!
//! # Examples
//!
//! Plain conversions:
//!
//! ```
//! use taqvim::{hijri, jalali};
//!
//! assert_eq!((1404, 1, 1), jalali::from_gregorian(2025, 3, 21));
//! assert_eq!((2024, 7, 8), hijri::to_gregorian(1446, 1, 1));
//! assert!(jalali::is_leap_year(1403));
//! ```
//!
//! Calendar-aware moments:
//!
//! ```
//! use taqvim::{Calendar, DigitStyle, Moment};
//!
//! let mut moment = Moment::from_ymd_hms(Calendar::Jalali, 1403, 6, 31, 9, 30, 0).unwrap();
//! moment.add_months(1);
//! assert_eq!((1403, 7, 30), moment.ymd());
//! assert_eq!("30 مهر 1403", moment.format("j F Y"));
//!
//! moment.use_hijri();
//! let moment = moment.with_digits(DigitStyle::Arabic);
//! assert_eq!("١٤٤٦/٠٤/١٧", moment.format("Y/m/d"));
//! ```
//!
//! Every moment carries its own [`Options`]; there is no global state.
//! Validation failures are reported as [`CalendarError`] and leave the
//! moment untouched, while month and year arithmetic clamps the day to the
//! target month instead. Events are emitted through [`tracing`].

pub mod calendar;
pub mod date;
pub mod error;
pub mod gregorian;
pub mod hijri;
pub mod jalali;
pub mod locale;
pub mod moment;
pub mod options;

pub use calendar::{Calendar, Components};
pub use date::{Date, YearType};
pub use error::{CalendarError, ParseError};
pub use locale::{DigitStyle, Locale, Unit};
pub use moment::Moment;
pub use options::Options;
