use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    /// Near miss: nothing happened, but it almost did.
    Hiyari,
    Accident,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Hiyari => "Near miss",
            ReportType::Accident => "Accident",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Hiyari => f.write_str("HIYARI"),
            ReportType::Accident => f.write_str("ACCIDENT"),
        }
    }
}

/// Incident report in 5W1H form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub created_at: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub read_by_staff_ids: Vec<String>,
    pub when: String,
    #[serde(rename = "where")]
    pub place: String,
    pub who: String,
    pub what: String,
    pub why: String,
    pub how: String,
}

impl IncidentReport {
    pub fn is_read_by(&self, staff_id: &str) -> bool {
        self.read_by_staff_ids.iter().any(|s| s == staff_id)
    }
}

#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub kind: ReportType,
    pub when: String,
    pub place: String,
    pub who: String,
    pub what: String,
    pub why: String,
    pub how: String,
}
