use crate::errors::{AppError, AppResult};
use crate::utils::time::hour_minute;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    Meal,
    Medication,
    Hygiene,
    Activity,
    Admin,
    #[default]
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::Meal,
        TaskCategory::Medication,
        TaskCategory::Hygiene,
        TaskCategory::Activity,
        TaskCategory::Admin,
        TaskCategory::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TaskCategory::Meal => "MEAL",
            TaskCategory::Medication => "MEDICATION",
            TaskCategory::Hygiene => "HYGIENE",
            TaskCategory::Activity => "ACTIVITY",
            TaskCategory::Admin => "ADMIN",
            TaskCategory::Other => "OTHER",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> AppResult<Self> {
        let upper = code.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| AppError::InvalidCategory(code.to_string()))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_uppercase().as_str() {
            "LOW" => Ok(TaskPriority::Low),
            "MEDIUM" => Ok(TaskPriority::Medium),
            "HIGH" => Ok(TaskPriority::High),
            "URGENT" => Ok(TaskPriority::Urgent),
            _ => Err(AppError::InvalidPriority(code.to_string())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A scheduled care task. Serialized with the camelCase field names used by
/// the stored `careSyncTasks` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub time: String, // "HH:MM", 24h, zero-padded
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: TaskCategory,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>, // local "YYYY-MM-DDTHH:MM:SS", no offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<String>,
}

impl Task {
    /// Minimal constructor, mostly for callers that only care about the
    /// fields the overdue check reads.
    pub fn new(id: &str, time: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            time: time.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: TaskCategory::default(),
            priority: TaskPriority::default(),
            is_completed: false,
            assigned_to: None,
            completed_at: None,
            resident_id: None,
        }
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// `(hour, minute)` of the scheduled time, `None` if the stored string is
    /// malformed.
    pub fn scheduled(&self) -> Option<(u32, u32)> {
        hour_minute(&self.time)
    }
}

/// User-supplied fields of a new task; id and completion are assigned on
/// insertion.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub time: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
    pub resident_id: Option<String>,
}
