//! Date utilities: parsing YYYY-MM-DD, month lengths, weekday indexes.

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Number of days in `month` of `year`, `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Weekday index with Sunday = 0 .. Saturday = 6, independent of locale.
pub fn sunday_index(d: &NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}

/// Short English weekday name ("Sun", "Mon", ...).
pub fn weekday_short(d: &NaiveDate) -> &'static str {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"][sunday_index(d) as usize]
}
