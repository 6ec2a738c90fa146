//! Resident schedule: dated plans per resident, looked up per calendar day.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::{ResidentSchedule, ScheduleDraft};
use crate::utils::date::{format_date, parse_date};
use crate::utils::id::short_id;
use crate::utils::time::normalize_time;
use chrono::NaiveDate;

fn normalize_opt(t: Option<String>) -> AppResult<Option<String>> {
    t.as_deref().map(normalize_time).transpose()
}

/// Insert an entry, keeping the list ordered by date then start time.
pub fn add(
    schedules: &[ResidentSchedule],
    draft: ScheduleDraft,
) -> AppResult<(Vec<ResidentSchedule>, ResidentSchedule)> {
    let date = parse_date(&draft.date).ok_or_else(|| AppError::InvalidDate(draft.date.clone()))?;
    let start_time = normalize_opt(draft.start_time)?;
    let end_time = normalize_opt(draft.end_time)?;

    if let (Some(s), Some(e)) = (&start_time, &end_time) {
        if e < s {
            return Err(AppError::InvalidField {
                field: "end time",
                value: format!("{e} is before {s}"),
            });
        }
    }

    let entry = ResidentSchedule {
        id: short_id(),
        resident_id: draft.resident_id,
        date: format_date(&date),
        title: draft.title,
        kind: draft.kind,
        start_time,
        end_time,
        notes: draft.notes,
    };

    let mut out = schedules.to_vec();
    out.push(entry.clone());
    // None sorts before any time: all-day entries first.
    out.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));

    Ok((out, entry))
}

pub fn remove(schedules: &[ResidentSchedule], id: &str) -> AppResult<Vec<ResidentSchedule>> {
    if !schedules.iter().any(|s| s.id == id) {
        return Err(AppError::ScheduleNotFound(id.to_string()));
    }
    Ok(schedules.iter().filter(|s| s.id != id).cloned().collect())
}

/// Drop every entry of a resident (the resident was removed).
pub fn remove_for_resident(schedules: &[ResidentSchedule], resident_id: &str) -> Vec<ResidentSchedule> {
    schedules
        .iter()
        .filter(|s| s.resident_id != resident_id)
        .cloned()
        .collect()
}

/// Entries of `resident_id` on `date`.
pub fn for_date<'a>(
    schedules: &'a [ResidentSchedule],
    resident_id: &str,
    date: &NaiveDate,
) -> Vec<&'a ResidentSchedule> {
    let key = format_date(date);
    schedules
        .iter()
        .filter(|s| s.resident_id == resident_id && s.date == key)
        .collect()
}
