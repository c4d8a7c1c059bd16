//! Rendering configuration carried by each [`crate::Moment`].

use chrono::Weekday;

use crate::locale::DigitStyle;

/// Template used by `Display` unless configured otherwise.
pub const DEFAULT_TEMPLATE: &str = "Y-m-d H:i:s";

/// How a moment is rendered and where its weeks begin.
///
/// There is no global default to mutate: every moment owns a copy, and
/// copying a moment copies its options.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use taqvim::{DigitStyle, Options};
///
/// let options = Options::new()
///     .with_digits(DigitStyle::Persian)
///     .with_template("Y/m/d")
///     .with_week_start(Weekday::Mon);
///
/// assert_eq!(DigitStyle::Persian, options.digits());
/// assert_eq!("Y/m/d", options.template());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Script of digits in formatted output.
    digits: DigitStyle,
    /// Template used by `Display`.
    template: String,
    /// First day of the week for week boundaries.
    week_start: Weekday,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Creates the default configuration.
    ///
    /// Defaults: Latin digits, template [`DEFAULT_TEMPLATE`], weeks starting
    /// on Saturday.
    pub fn new() -> Self {
        Self {
            digits: DigitStyle::Latin,
            template: DEFAULT_TEMPLATE.to_owned(),
            week_start: Weekday::Sat,
        }
    }

    /// Sets the digit script.
    pub fn with_digits(mut self, digits: DigitStyle) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the `Display` template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Returns the digit script.
    pub fn digits(&self) -> DigitStyle {
        self.digits
    }

    /// Returns the `Display` template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the first day of the week.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }
}
