//! Time utilities: parsing and formatting HH:MM task times.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse a zero-padded 24h "HH:MM" string.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Split a task time into (hour, minute), rejecting anything outside
/// 00..=23 / 00..=59.
pub fn hour_minute(t: &str) -> Option<(u32, u32)> {
    let (h, m) = t.trim().split_once(':')?;
    // u32::from_str accepts a leading '+'
    if !is_digits(h) || !is_digits(m) {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some((h, m))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_time(t: &NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Validate user input and normalise it to "HH:MM".
pub fn normalize_time(input: &str) -> AppResult<String> {
    hour_minute(input)
        .map(|(h, m)| format!("{:02}:{:02}", h, m))
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

