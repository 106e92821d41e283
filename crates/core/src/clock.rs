//! `HH:MM` formatting and parsing for seconds-since-midnight values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Shift applied by the legacy server-rendered calendar when it printed
/// times. Its output reads six hours late; kept only to reproduce that
/// output where it is still compared against.
pub const LEGACY_OFFSET_SECONDS: i64 = 6 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    #[error("expected HH:MM or HH:MM:SS, got {0:?}")]
    Malformed(String),
    #[error("{0:?} is not a time of day")]
    OutOfRange(String),
}

/// How seconds-since-midnight values are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockFormat {
    /// Added before formatting; the result wraps around midnight.
    pub offset_seconds: i64,
}

impl ClockFormat {
    /// Formatting that matches the legacy server output bit for bit.
    pub fn legacy() -> Self {
        Self {
            offset_seconds: LEGACY_OFFSET_SECONDS,
        }
    }

    /// Format as zero-padded 24-hour `HH:MM`. Seconds are truncated.
    pub fn format(&self, seconds: u32) -> String {
        let t = (i64::from(seconds) + self.offset_seconds).rem_euclid(SECONDS_PER_DAY);
        format!("{:02}:{:02}", t / 3600, (t % 3600) / 60)
    }

    /// `HH:MM-HH:MM`.
    pub fn format_range(&self, start: u32, end: u32) -> String {
        format!("{}-{}", self.format(start), self.format(end))
    }
}

/// Format with no offset.
pub fn format_time(seconds: u32) -> String {
    ClockFormat::default().format(seconds)
}

/// Parse `H:MM`, `HH:MM` or `HH:MM:SS` into seconds since midnight.
/// `24:00` is accepted as the end of the day.
pub fn parse_clock(text: &str) -> Result<u32, ClockParseError> {
    let malformed = || ClockParseError::Malformed(text.to_string());
    let mut parts = text.trim().split(':');

    let mut field = |max_len: usize| -> Result<Option<u32>, ClockParseError> {
        match parts.next() {
            None => Ok(None),
            Some(p) if p.is_empty() || p.len() > max_len || !p.bytes().all(|c| c.is_ascii_digit()) => {
                Err(malformed())
            }
            Some(p) => p.parse().map(Some).map_err(|_| malformed()),
        }
    };

    let hours = field(2)?.ok_or_else(malformed)?;
    let minutes = field(2)?.ok_or_else(malformed)?;
    let seconds = field(2)?.unwrap_or(0);
    if field(2)?.is_some() {
        return Err(malformed());
    }

    let total = hours * 3600 + minutes * 60 + seconds;
    if minutes > 59 || seconds > 59 || total > SECONDS_PER_DAY as u32 {
        return Err(ClockParseError::OutOfRange(text.to_string()));
    }
    Ok(total)
}
