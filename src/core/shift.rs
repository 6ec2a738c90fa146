//! Shift roster edits: one shift record per date, two slots each.

use crate::models::shift::{Shift, ShiftSlot};
use crate::utils::date::format_date;
use chrono::NaiveDate;

pub fn shift_for<'a>(shifts: &'a [Shift], date: &NaiveDate) -> Option<&'a Shift> {
    let key = format_date(date);
    shifts.iter().find(|s| s.date == key)
}

/// Put `staff_id` on `slot` of `date`. An existing shift keeps its other
/// slot; otherwise a new shift with only this slot is created.
pub fn assign(shifts: &[Shift], date: &NaiveDate, slot: ShiftSlot, staff_id: &str) -> Vec<Shift> {
    let key = format_date(date);
    let mut out = shifts.to_vec();

    match out.iter_mut().find(|s| s.date == key) {
        Some(existing) => *existing.slot_mut(slot) = Some(staff_id.to_string()),
        None => {
            let mut shift = Shift {
                id: format!("shift-{key}"),
                date: key,
                day_staff_id: None,
                night_staff_id: None,
            };
            *shift.slot_mut(slot) = Some(staff_id.to_string());
            out.push(shift);
            out.sort_by(|a, b| a.date.cmp(&b.date));
        }
    }

    out
}

/// Empty `slot` of `date`. A shift left with no staff is dropped.
pub fn clear(shifts: &[Shift], date: &NaiveDate, slot: ShiftSlot) -> Vec<Shift> {
    let key = format_date(date);
    shifts
        .iter()
        .cloned()
        .filter_map(|mut s| {
            if s.date == key {
                *s.slot_mut(slot) = None;
            }
            (!s.is_empty()).then_some(s)
        })
        .collect()
}
