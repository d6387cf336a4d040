use crate::domain::model::CalendarDifference;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ZERO_SENTINEL: &str = "no difference";

/// Rendering preferences for [`CalendarDifference::format_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Render hours through milliseconds as unit phrases instead of
    /// `hh:mm:ss:fff`.
    pub long_form: bool,
    pub zero_sentinel: String,
    /// Digit grouping for counts, `None` to disable.
    pub thousands_separator: Option<char>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            long_form: false,
            zero_sentinel: ZERO_SENTINEL.to_string(),
            thousands_separator: Some(','),
        }
    }
}

impl FormatOptions {
    pub fn long() -> Self {
        Self {
            long_form: true,
            ..Self::default()
        }
    }
}

impl CalendarDifference {
    /// Compact form: `"5 years, 10 months, 28 days 01:02:03:004"`.
    /// Long form: every non-zero unit as its own phrase.
    pub fn format(&self, long_form: bool) -> String {
        let options = if long_form {
            FormatOptions::long()
        } else {
            FormatOptions::default()
        };
        self.format_with(&options)
    }

    pub fn format_with(&self, options: &FormatOptions) -> String {
        let separator = options.thousands_separator;
        let mut phrases = Vec::new();
        push_unit(&mut phrases, self.years(), "year", separator);
        push_unit(&mut phrases, self.months(), "month", separator);
        push_unit(&mut phrases, self.days(), "day", separator);

        if options.long_form {
            push_unit(&mut phrases, self.hours(), "hour", separator);
            push_unit(&mut phrases, self.minutes(), "minute", separator);
            push_unit(&mut phrases, self.seconds(), "second", separator);
            push_unit(&mut phrases, self.milliseconds(), "millisecond", separator);
        }

        let mut rendered = phrases.join(", ");
        if !options.long_form && self.has_time() {
            if !rendered.is_empty() {
                rendered.push(' ');
            }
            rendered.push_str(&format!(
                "{:02}:{:02}:{:02}:{:03}",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.milliseconds()
            ));
        }

        if rendered.is_empty() {
            options.zero_sentinel.clone()
        } else {
            rendered
        }
    }
}

/// Compact by default, long with the alternate flag (`{:#}`).
impl fmt::Display for CalendarDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(f.alternate()))
    }
}

fn push_unit(phrases: &mut Vec<String>, count: u32, label: &str, separator: Option<char>) {
    if count == 0 {
        return;
    }
    let plural = if count > 1 { "s" } else { "" };
    phrases.push(format!("{} {}{}", group_digits(count, separator), label, plural));
}

fn group_digits(value: u32, separator: Option<char>) -> String {
    let digits = value.to_string();
    let Some(separator) = separator else {
        return digits;
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_sentinel() {
        let zero = CalendarDifference::default();
        assert_eq!(zero.format(false), "no difference");
        assert_eq!(zero.format(true), "no difference");
        assert_eq!(zero.to_string(), "no difference");
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(CalendarDifference::from_date(1, 1, 1).format(false), "1 year, 1 month, 1 day");
        assert_eq!(
            CalendarDifference::from_date(2, 3, 4).format(false),
            "2 years, 3 months, 4 days"
        );
    }

    #[test]
    fn test_zero_units_are_omitted() {
        assert_eq!(CalendarDifference::from_date(5, 0, 28).format(false), "5 years, 28 days");
        assert_eq!(
            CalendarDifference::new(0, 0, 0, 0, 1, 0, 0).format(true),
            "1 minute"
        );
    }

    #[test]
    fn test_compact_time_component() {
        let d = CalendarDifference::new(0, 0, 0, 23, 59, 59, 999);
        assert_eq!(d.format(false), "23:59:59:999");

        let d = CalendarDifference::new(1, 0, 2, 3, 4, 5, 6);
        assert_eq!(d.format(false), "1 year, 2 days 03:04:05:006");
    }

    #[test]
    fn test_long_time_component() {
        let d = CalendarDifference::new(0, 0, 0, 23, 59, 59, 999);
        assert_eq!(
            d.format(true),
            "23 hours, 59 minutes, 59 seconds, 999 milliseconds"
        );

        let d = CalendarDifference::new(1, 0, 2, 3, 4, 5, 6);
        assert_eq!(
            d.format(true),
            "1 year, 2 days, 3 hours, 4 minutes, 5 seconds, 6 milliseconds"
        );
    }

    #[test]
    fn test_display_alternate_is_long() {
        let d = CalendarDifference::new(0, 0, 1, 1, 0, 0, 0);
        assert_eq!(format!("{}", d), "1 day 01:00:00:000");
        assert_eq!(format!("{:#}", d), "1 day, 1 hour");
    }

    #[test]
    fn test_thousands_separator() {
        let d = CalendarDifference::from_date(1234, 0, 0);
        assert_eq!(d.format(false), "1,234 years");

        let options = FormatOptions {
            thousands_separator: None,
            ..FormatOptions::default()
        };
        assert_eq!(d.format_with(&options), "1234 years");

        assert_eq!(group_digits(1_000_000, Some('.')), "1.000.000");
        assert_eq!(group_digits(999, Some(',')), "999");
    }

    #[test]
    fn test_custom_sentinel() {
        let options = FormatOptions {
            zero_sentinel: "same instant".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(CalendarDifference::default().format_with(&options), "same instant");
    }
}
