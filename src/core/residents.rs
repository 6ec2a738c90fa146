//! Resident records and their vitals history.

use crate::errors::{AppError, AppResult};
use crate::models::resident::{HealthReading, HealthRecord, Resident, ResidentPatch};
use crate::utils::id::short_id;
use chrono::NaiveDateTime;

pub fn add(residents: &[Resident], resident: Resident) -> AppResult<Vec<Resident>> {
    if residents.iter().any(|r| r.id == resident.id) {
        return Err(AppError::DuplicateResident(resident.id));
    }
    let mut out = residents.to_vec();
    out.push(resident);
    Ok(out)
}

pub fn require<'a>(residents: &'a [Resident], id: &str) -> AppResult<&'a Resident> {
    residents
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::ResidentNotFound(id.to_string()))
}

fn with_resident<F>(residents: &[Resident], id: &str, change: F) -> AppResult<Vec<Resident>>
where
    F: FnOnce(&mut Resident),
{
    let mut out = residents.to_vec();
    let r = out
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::ResidentNotFound(id.to_string()))?;
    change(r);
    Ok(out)
}

/// Overwrite the profile fields set in `patch`.
pub fn update(residents: &[Resident], id: &str, patch: ResidentPatch) -> AppResult<Vec<Resident>> {
    with_resident(residents, id, |r| {
        if let Some(v) = patch.name {
            r.name = v;
        }
        if let Some(v) = patch.room_number {
            r.room_number = v;
        }
        if let Some(v) = patch.age {
            r.age = v;
        }
        if patch.birth_date.is_some() {
            r.birth_date = patch.birth_date;
        }
        if patch.blood_type.is_some() {
            r.blood_type = patch.blood_type;
        }
        if patch.diagnosis.is_some() {
            r.diagnosis = patch.diagnosis;
        }
        if let Some(v) = patch.disability_level {
            r.disability_level = v;
        }
        if let Some(v) = patch.assessment {
            r.assessment = v;
        }
        if let Some(v) = patch.care_plan {
            r.care_plan = v;
        }
    })
}

pub fn remove(residents: &[Resident], id: &str) -> AppResult<Vec<Resident>> {
    require(residents, id)?;
    Ok(residents.iter().filter(|r| r.id != id).cloned().collect())
}

/// Append a vitals record stamped with `at`. A measured weight also becomes
/// the resident's current weight.
pub fn record_vitals(
    residents: &[Resident],
    id: &str,
    reading: HealthReading,
    at: NaiveDateTime,
) -> AppResult<(Vec<Resident>, HealthRecord)> {
    if reading.is_empty() {
        return Err(AppError::InvalidField {
            field: "vitals",
            value: "no measurement given".to_string(),
        });
    }

    let record = HealthRecord {
        id: short_id(),
        date: at.format("%Y-%m-%d").to_string(),
        time: at.format("%H:%M").to_string(),
        reading,
    };

    let out = with_resident(residents, id, |r| {
        if let Some(w) = record.reading.weight {
            r.current_weight = Some(w);
        }
        r.health_records.push(record.clone());
    })?;

    Ok((out, record))
}

/// Vitals of a resident, oldest first.
pub fn health_history(resident: &Resident) -> Vec<&HealthRecord> {
    let mut records: Vec<&HealthRecord> = resident.health_records.iter().collect();
    records.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
    records
}
