//! Incident reports (near misses and accidents) with read receipts.

use crate::errors::{AppError, AppResult};
use crate::models::report::{IncidentReport, ReportDraft, ReportType};
use crate::models::staff::Staff;
use crate::utils::id::short_id;
use chrono::NaiveDateTime;

/// File a report. The author has read it; newest reports come first.
pub fn add(
    reports: &[IncidentReport],
    draft: ReportDraft,
    author: &Staff,
    now: NaiveDateTime,
) -> AppResult<(Vec<IncidentReport>, IncidentReport)> {
    if draft.what.trim().is_empty() {
        return Err(AppError::InvalidField {
            field: "what",
            value: "empty".to_string(),
        });
    }

    let report = IncidentReport {
        id: short_id(),
        kind: draft.kind,
        created_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        author_id: author.id.clone(),
        author_name: author.name.clone(),
        read_by_staff_ids: vec![author.id.clone()],
        when: draft.when,
        place: draft.place,
        who: draft.who,
        what: draft.what,
        why: draft.why,
        how: draft.how,
    };

    let mut out = Vec::with_capacity(reports.len() + 1);
    out.push(report.clone());
    out.extend_from_slice(reports);
    Ok((out, report))
}

pub fn require<'a>(reports: &'a [IncidentReport], id: &str) -> AppResult<&'a IncidentReport> {
    reports
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::ReportNotFound(id.to_string()))
}

/// Record that `staff_id` has read the report. Reading twice is a no-op.
pub fn mark_read(
    reports: &[IncidentReport],
    id: &str,
    staff_id: &str,
) -> AppResult<Vec<IncidentReport>> {
    require(reports, id)?;
    Ok(reports
        .iter()
        .cloned()
        .map(|mut r| {
            if r.id == id && !r.is_read_by(staff_id) {
                r.read_by_staff_ids.push(staff_id.to_string());
            }
            r
        })
        .collect())
}

/// Reports of one type (or all), newest first.
pub fn by_type(reports: &[IncidentReport], kind: Option<ReportType>) -> Vec<&IncidentReport> {
    let mut out: Vec<&IncidentReport> = reports
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

pub fn unread_count(reports: &[IncidentReport], staff_id: &str) -> usize {
    reports.iter().filter(|r| !r.is_read_by(staff_id)).count()
}
