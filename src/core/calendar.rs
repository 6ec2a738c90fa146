//! Calendar window generation for the day / week / month views.
//!
//! Weeks always start on Sunday. A padded month window is prefixed with
//! the tail of the previous month so that the first cell is a Sunday; no
//! trailing days are appended, so the last grid row may be short.

use crate::utils::date::{days_in_month, format_date, sunday_index, weekday_short};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Day => f.write_str("day"),
            Granularity::Week => f.write_str("week"),
            Granularity::Month => f.write_str("month"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Negative counts go backwards, zero and positive go forwards.
    pub fn from_sign(n: i64) -> Self {
        if n < 0 { Direction::Prev } else { Direction::Next }
    }
}

/// How a month window is laid out. Day and week windows are identical in
/// both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthLayout {
    /// Leading days of the previous month up to the preceding Sunday.
    #[default]
    Padded,
    /// Only the 1st through the last day of the month.
    Plain,
}

/// Dates to display for `reference` at `granularity`, with a padded month.
///
/// Returns an empty vector when the window would leave chrono's date range.
pub fn dates_for(reference: NaiveDate, granularity: Granularity) -> Vec<NaiveDate> {
    dates_with_layout(reference, granularity, MonthLayout::Padded)
}

pub fn dates_with_layout(
    reference: NaiveDate,
    granularity: Granularity,
    layout: MonthLayout,
) -> Vec<NaiveDate> {
    let dates = match granularity {
        Granularity::Day => Some(vec![reference]),
        Granularity::Week => week_dates(reference),
        Granularity::Month => month_dates(reference, layout),
    };

    dates.unwrap_or_else(|| {
        log::warn!(
            "calendar window out of range: reference={} view={}",
            reference,
            granularity
        );
        Vec::new()
    })
}

/// Navigation step for the previous / next button.
///
/// Day moves one day, week seven days, month jumps to the 1st of the
/// adjacent month (day-of-month is not preserved).
pub fn step(
    reference: NaiveDate,
    granularity: Granularity,
    direction: Direction,
) -> Option<NaiveDate> {
    match granularity {
        Granularity::Day => shift_days(reference, 1, direction),
        Granularity::Week => shift_days(reference, 7, direction),
        Granularity::Month => {
            let first = reference.with_day(1)?;
            match direction {
                Direction::Next => first.checked_add_months(Months::new(1)),
                Direction::Prev => first.checked_sub_months(Months::new(1)),
            }
        }
    }
}

/// Apply `step` `|n|` times, backwards for negative `n`.
pub fn step_n(reference: NaiveDate, granularity: Granularity, n: i64) -> Option<NaiveDate> {
    let direction = Direction::from_sign(n);
    (0..n.unsigned_abs()).try_fold(reference, |d, _| step(d, granularity, direction))
}

/// Sunday on or before `reference`.
pub fn week_start(reference: NaiveDate) -> Option<NaiveDate> {
    reference.checked_sub_days(Days::new(u64::from(sunday_index(&reference))))
}

fn shift_days(reference: NaiveDate, n: u64, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Next => reference.checked_add_days(Days::new(n)),
        Direction::Prev => reference.checked_sub_days(Days::new(n)),
    }
}

fn consecutive(start: NaiveDate, count: u64) -> Option<Vec<NaiveDate>> {
    (0..count)
        .map(|i| start.checked_add_days(Days::new(i)))
        .collect()
}

fn week_dates(reference: NaiveDate) -> Option<Vec<NaiveDate>> {
    consecutive(week_start(reference)?, 7)
}

fn month_dates(reference: NaiveDate, layout: MonthLayout) -> Option<Vec<NaiveDate>> {
    let first = reference.with_day(1)?;
    let len = days_in_month(first.year(), first.month())?;
    let padding = match layout {
        MonthLayout::Padded => sunday_index(&first),
        MonthLayout::Plain => 0,
    };
    let start = first.checked_sub_days(Days::new(u64::from(padding)))?;
    consecutive(start, u64::from(padding + len))
}

/// A rendered window: the anchor date, its zoom level and the dates to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    pub reference: NaiveDate,
    pub granularity: Granularity,
    pub layout: MonthLayout,
    pub dates: Vec<NaiveDate>,
}

impl CalendarWindow {
    pub fn new(reference: NaiveDate, granularity: Granularity) -> Self {
        Self::with_layout(reference, granularity, MonthLayout::Padded)
    }

    pub fn with_layout(reference: NaiveDate, granularity: Granularity, layout: MonthLayout) -> Self {
        Self {
            reference,
            granularity,
            layout,
            dates: dates_with_layout(reference, granularity, layout),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Window `n` pages away (negative: backwards), keeping zoom level and
    /// layout. `None` when paging leaves the representable range.
    pub fn shifted(&self, n: i64) -> Option<Self> {
        step_n(self.reference, self.granularity, n)
            .map(|d| Self::with_layout(d, self.granularity, self.layout))
    }

    /// True for month-view cells borrowed from the previous month.
    pub fn is_padding(&self, date: &NaiveDate) -> bool {
        self.granularity == Granularity::Month
            && (date.year(), date.month()) != (self.reference.year(), self.reference.month())
    }

    /// Sunday-first rows of seven for grid rendering. A window that does not
    /// start on a Sunday (plain month, single day) gets leading blanks; the
    /// final row may be shorter.
    pub fn weeks(&self) -> Vec<Vec<Option<NaiveDate>>> {
        let lead = self.dates.first().map_or(0, |d| sunday_index(d) as usize);
        let cells: Vec<Option<NaiveDate>> = std::iter::repeat_n(None, lead)
            .chain(self.dates.iter().copied().map(Some))
            .collect();
        cells.chunks(7).map(<[_]>::to_vec).collect()
    }

    pub fn title(&self) -> String {
        match self.granularity {
            Granularity::Month => self.reference.format("%Y-%m").to_string(),
            Granularity::Week => match (self.dates.first(), self.dates.last()) {
                (Some(a), Some(b)) => format!("{} .. {}", format_date(a), format_date(b)),
                _ => format_date(&self.reference),
            },
            Granularity::Day => format!(
                "{} ({})",
                format_date(&self.reference),
                weekday_short(&self.reference)
            ),
        }
    }
}
