use serde::{Deserialize, Serialize};
use std::fmt;

/// Staffing of one calendar day: a day slot (09:00-17:00) and a night slot
/// (17:00-09:00).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub date: String, // "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_staff_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_staff_id: Option<String>,
}

impl Shift {
    pub fn staff_for(&self, slot: ShiftSlot) -> Option<&str> {
        match slot {
            ShiftSlot::Day => self.day_staff_id.as_deref(),
            ShiftSlot::Night => self.night_staff_id.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, slot: ShiftSlot) -> &mut Option<String> {
        match slot {
            ShiftSlot::Day => &mut self.day_staff_id,
            ShiftSlot::Night => &mut self.night_staff_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day_staff_id.is_none() && self.night_staff_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShiftSlot {
    Day,
    Night,
}

impl ShiftSlot {
    pub fn hours(&self) -> &'static str {
        match self {
            ShiftSlot::Day => "09:00-17:00",
            ShiftSlot::Night => "17:00-09:00",
        }
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftSlot::Day => f.write_str("day"),
            ShiftSlot::Night => f.write_str("night"),
        }
    }
}
