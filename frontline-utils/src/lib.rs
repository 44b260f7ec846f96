//! Shared utility functions for Frontline crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// ISO calendar-day format used by every exported dataset.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)?)
    }

    /// The "YYYY-MM" month key of an ISO date string.
    ///
    /// Strings shorter than seven bytes are returned whole, so a malformed
    /// date still lands in some bucket instead of panicking.
    pub fn month_key(date: &str) -> &str {
        date.get(..7).unwrap_or(date)
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}

}
