//! Polling interval value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::IntervalParseError;

/// Default polling interval (500 milliseconds)
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Shortest interval accepted from user input
pub const MIN_INTERVAL_MS: u64 = 10;

/// Value object representing the clipboard sampling period.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollInterval {
    milliseconds: u64,
}

impl PollInterval {
    /// Create an interval from milliseconds (zero is bumped to one)
    pub const fn from_millis(ms: u64) -> Self {
        Self {
            milliseconds: if ms == 0 { 1 } else { ms },
        }
    }

    /// Create an interval from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs * 1000)
    }

    /// Get interval in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for PollInterval {
    type Err = IntervalParseError;

    /// Parse an interval string.
    /// Supported formats: "500ms", "1s", "2m", "1s500ms", "1m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IntervalParseError {
            input: s.to_string(),
        };
        let input = s.trim().to_lowercase();
        let mut chars = input.chars().peekable();
        let mut total_ms: u64 = 0;
        let mut found_any = false;

        while chars.peek().is_some() {
            let mut number = String::new();
            while let Some(ch) = chars.peek().copied().filter(char::is_ascii_digit) {
                number.push(ch);
                chars.next();
            }
            let mut unit = String::new();
            while let Some(ch) = chars.peek().copied().filter(char::is_ascii_alphabetic) {
                unit.push(ch);
                chars.next();
            }
            if number.is_empty() || unit.is_empty() {
                return Err(err());
            }

            let value: u64 = number.parse().map_err(|_| err())?;
            let factor = match unit.as_str() {
                "ms" => 1,
                "s" => 1000,
                "m" => 60_000,
                _ => return Err(err()),
            };
            total_ms = value
                .checked_mul(factor)
                .and_then(|ms| total_ms.checked_add(ms))
                .ok_or_else(err)?;
            found_any = true;
        }

        if !found_any || total_ms < MIN_INTERVAL_MS {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.milliseconds / 60_000;
        let seconds = (self.milliseconds % 60_000) / 1000;
        let millis = self.milliseconds % 1000;

        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        if millis > 0 {
            write!(f, "{}ms", millis)?;
        }
        Ok(())
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self::from_millis(DEFAULT_INTERVAL_MS)
    }
}
