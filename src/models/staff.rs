use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Manager,
    Staff,
    Nurse,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Manager => "manager",
            StaffRole::Staff => "staff",
            StaffRole::Nurse => "nurse",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "manager" => Ok(StaffRole::Manager),
            "staff" => Ok(StaffRole::Staff),
            "nurse" => Ok(StaffRole::Nurse),
            _ => Err(AppError::InvalidRole(code.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
}

impl Staff {
    pub fn new(id: &str, name: &str, role: StaffRole) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
        }
    }

    /// Roster used when nothing has been stored yet.
    pub fn default_roster() -> Vec<Staff> {
        vec![
            Staff::new("s1", "Sasaki (manager)", StaffRole::Manager),
            Staff::new("s2", "Yamada", StaffRole::Staff),
            Staff::new("s3", "Suzuki", StaffRole::Staff),
            Staff::new("s4", "Takahashi", StaffRole::Staff),
            Staff::new("s5", "Sato (nurse)", StaffRole::Nurse),
        ]
    }
}
