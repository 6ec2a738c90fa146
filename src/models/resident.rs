use serde::{Deserialize, Serialize};

/// One vitals measurement. Every value is optional; staff record whatever
/// was taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>, // kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>, // °C
    #[serde(default, rename = "systolicBP", skip_serializing_if = "Option::is_none")]
    pub systolic_bp: Option<u32>,
    #[serde(default, rename = "diastolicBP", skip_serializing_if = "Option::is_none")]
    pub diastolic_bp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthReading {
    pub fn is_empty(&self) -> bool {
        *self == HealthReading::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    pub date: String, // "YYYY-MM-DD"
    pub time: String, // "HH:MM"
    #[serde(flatten)]
    pub reading: HealthReading,
}

/// A person living in the facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub room_number: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    #[serde(default)]
    pub disability_level: String,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub care_plan: String,
    #[serde(default)]
    pub health_records: Vec<HealthRecord>,
}

impl Resident {
    pub fn new(id: &str, name: &str, room_number: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            room_number: room_number.to_string(),
            age: 0,
            birth_date: None,
            blood_type: None,
            diagnosis: None,
            current_weight: None,
            disability_level: String::new(),
            assessment: String::new(),
            care_plan: String::new(),
            health_records: Vec::new(),
        }
    }

    /// Display label, e.g. "Tanaka (101)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.room_number)
    }
}

/// Profile fields to change; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ResidentPatch {
    pub name: Option<String>,
    pub room_number: Option<String>,
    pub age: Option<u32>,
    pub birth_date: Option<String>,
    pub blood_type: Option<String>,
    pub diagnosis: Option<String>,
    pub disability_level: Option<String>,
    pub assessment: Option<String>,
    pub care_plan: Option<String>,
}
