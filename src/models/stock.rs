use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StockCategory {
    #[default]
    Daily,
    Medical,
    Food,
    Other,
}

impl fmt::Display for StockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockCategory::Daily => f.write_str("daily"),
            StockCategory::Medical => f.write_str("medical"),
            StockCategory::Food => f.write_str("food"),
            StockCategory::Other => f.write_str("other"),
        }
    }
}

/// Facility supplies vs. items bought for one resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockOwner {
    Company,
    Resident,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: StockCategory,
    pub quantity: u32,
    pub unit: String,
    /// Reorder point: at or below it the item is low.
    pub threshold: u32,
    pub owner_type: StockOwner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<String>,
    #[serde(default)]
    pub is_order_requested: bool,
}

impl StockItem {
    pub fn is_low(&self) -> bool {
        self.quantity <= self.threshold
    }

    /// Low and nobody has asked for a reorder yet.
    pub fn needs_order(&self) -> bool {
        self.is_low() && !self.is_order_requested
    }
}
