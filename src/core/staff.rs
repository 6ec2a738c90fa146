use crate::errors::{AppError, AppResult};
use crate::models::staff::Staff;

/// Append a staff member; ids are unique.
pub fn add(staff: &[Staff], member: Staff) -> AppResult<Vec<Staff>> {
    if staff.iter().any(|s| s.id == member.id) {
        return Err(AppError::DuplicateStaff(member.id));
    }
    let mut out = staff.to_vec();
    out.push(member);
    Ok(out)
}

pub fn require<'a>(staff: &'a [Staff], id: &str) -> AppResult<&'a Staff> {
    staff
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::StaffNotFound(id.to_string()))
}
