use serde::{Deserialize, Serialize};

/// Personal note / todo of one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub is_completed: bool,
    pub staff_id: String,
    pub created_at: String,
}
