//! Stock keeping: quantities, reorder points and reorder requests.

use crate::errors::{AppError, AppResult};
use crate::models::stock::{StockCategory, StockItem, StockOwner};

pub fn add(items: &[StockItem], item: StockItem) -> AppResult<Vec<StockItem>> {
    if items.iter().any(|i| i.id == item.id) {
        return Err(AppError::DuplicateStockItem(item.id));
    }
    let mut out = items.to_vec();
    out.push(item);
    Ok(out)
}

fn with_item<F>(items: &[StockItem], id: &str, change: F) -> AppResult<Vec<StockItem>>
where
    F: FnOnce(&mut StockItem),
{
    let mut out = items.to_vec();
    let item = out
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| AppError::StockItemNotFound(id.to_string()))?;
    change(item);
    Ok(out)
}

/// Change a quantity by `delta`, flooring at zero. Restocking above the
/// reorder point clears a pending reorder request.
pub fn adjust(items: &[StockItem], id: &str, delta: i64) -> AppResult<Vec<StockItem>> {
    with_item(items, id, |item| {
        let q = (i64::from(item.quantity) + delta).clamp(0, i64::from(u32::MAX));
        item.quantity = u32::try_from(q).unwrap_or(u32::MAX);
        if item.quantity > item.threshold {
            item.is_order_requested = false;
        }
    })
}

pub fn toggle_order(items: &[StockItem], id: &str) -> AppResult<Vec<StockItem>> {
    with_item(items, id, |item| item.is_order_requested = !item.is_order_requested)
}

pub fn remove(items: &[StockItem], id: &str) -> AppResult<Vec<StockItem>> {
    if !items.iter().any(|i| i.id == id) {
        return Err(AppError::StockItemNotFound(id.to_string()));
    }
    Ok(items.iter().filter(|i| i.id != id).cloned().collect())
}

/// Selection used by the list and reorder views. Empty filter keeps all.
#[derive(Debug, Clone, Default)]
pub struct StockFilter {
    pub owner: Option<StockOwner>,
    pub resident_id: Option<String>,
    pub category: Option<StockCategory>,
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    pub low_only: bool,
}

impl StockFilter {
    pub fn matches(&self, item: &StockItem) -> bool {
        if self.owner.is_some_and(|o| o != item.owner_type) {
            return false;
        }
        if let Some(r) = &self.resident_id {
            if item.resident_id.as_deref() != Some(r.as_str()) {
                return false;
            }
        }
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if let Some(s) = &self.search {
            if !item.name.to_lowercase().contains(&s.to_lowercase()) {
                return false;
            }
        }
        !self.low_only || item.is_low()
    }
}

pub fn filter<'a>(items: &'a [StockItem], f: &StockFilter) -> Vec<&'a StockItem> {
    items.iter().filter(|i| f.matches(i)).collect()
}

/// Items of the selection that need a reorder.
pub fn order_list<'a>(items: &'a [StockItem], f: &StockFilter) -> Vec<&'a StockItem> {
    items
        .iter()
        .filter(|i| f.matches(i) && i.needs_order())
        .collect()
}

/// Mark every item of `ids` as reordered.
pub fn mark_ordered(items: &[StockItem], ids: &[String]) -> Vec<StockItem> {
    items
        .iter()
        .cloned()
        .map(|mut i| {
            if ids.contains(&i.id) {
                i.is_order_requested = true;
            }
            i
        })
        .collect()
}
