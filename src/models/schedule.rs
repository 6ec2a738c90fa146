use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleKind {
    #[default]
    DayCare,
    Visit,
    Home,
    Other,
}

impl ScheduleKind {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleKind::DayCare => "DAY_CARE",
            ScheduleKind::Visit => "VISIT",
            ScheduleKind::Home => "HOME",
            ScheduleKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A dated plan for one resident: day care, a hospital visit, a stay at
/// home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentSchedule {
    pub id: String,
    pub resident_id: String,
    pub date: String, // "YYYY-MM-DD"
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ResidentSchedule {
    /// "09:00-16:00", "10:30-" or "" depending on the times set.
    pub fn time_range(&self) -> String {
        match (&self.start_time, &self.end_time) {
            (None, None) => String::new(),
            (s, e) => format!(
                "{}-{}",
                s.as_deref().unwrap_or(""),
                e.as_deref().unwrap_or("")
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleDraft {
    pub resident_id: String,
    pub date: String,
    pub title: String,
    pub kind: ScheduleKind,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}
