use crate::cli::parser::{Commands, StockAction};
use crate::config::Config;
use crate::core::residents;
use crate::core::stock::{self, StockFilter};
use crate::errors::AppResult;
use crate::models::stock::{StockItem, StockOwner};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREY, RED, RESET, YELLOW, paint};
use crate::utils::id::short_id;
use crate::utils::table::{Column, Table};

use super::{audit, open_state};

const COL_QTY: usize = 3;
const COL_STATUS: usize = 5;

fn status_of(item: &StockItem) -> (&'static str, &'static str) {
    match (item.is_low(), item.is_order_requested) {
        (_, true) => ("ordered", GREY),
        (true, false) => ("LOW", RED),
        (false, false) => ("ok", RESET),
    }
}

fn owner_filter(owner: &Option<StockOwner>, resident: &Option<String>) -> StockFilter {
    StockFilter {
        // A resident id implies resident-owned items.
        owner: if resident.is_some() {
            Some(StockOwner::Resident)
        } else {
            *owner
        },
        resident_id: resident.clone(),
        ..StockFilter::default()
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stock { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        StockAction::Add {
            id,
            name,
            category,
            quantity,
            unit,
            threshold,
            resident,
        } => {
            if let Some(r) = resident {
                residents::require(&container.state().residents, r)?;
            }

            let item = StockItem {
                id: id.clone().unwrap_or_else(short_id),
                name: name.clone(),
                category: *category,
                quantity: *quantity,
                unit: unit.clone(),
                threshold: *threshold,
                owner_type: if resident.is_some() {
                    StockOwner::Resident
                } else {
                    StockOwner::Company
                },
                resident_id: resident.clone(),
                is_order_requested: false,
            };
            let item_id = item.id.clone();

            let updated = stock::add(&container.state().stock, item)?;
            container.replace_stock(updated)?;

            audit(container.backend(), "stock_add", &item_id, name);
            success(format!("Stock item added: {} ({})", item_id, name));
        }

        StockAction::List {
            owner,
            resident,
            category,
            search,
            low,
        } => {
            let filter = StockFilter {
                category: *category,
                search: search.clone(),
                low_only: *low,
                ..owner_filter(owner, resident)
            };
            let state = container.state();
            let items = stock::filter(&state.stock, &filter);

            if items.is_empty() {
                info("No stock items.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("NAME", 4),
                Column::new("CATEGORY", 8),
                Column::new("QTY", 3),
                Column::new("REORDER AT", 10),
                Column::new("STATUS", 6),
                Column::new("OWNER", 5),
            ]);

            let mut colors = Vec::with_capacity(items.len());
            for i in &items {
                let (status, color) = status_of(i);
                let owner = match &i.resident_id {
                    Some(r) => container.resident_name(r).unwrap_or(r).to_string(),
                    None => "facility".to_string(),
                };
                colors.push((i.is_low(), color));
                table.add_row(vec![
                    i.id.clone(),
                    i.name.clone(),
                    i.category.to_string(),
                    format!("{} {}", i.quantity, i.unit),
                    i.threshold.to_string(),
                    status.to_string(),
                    owner,
                ]);
            }

            print!(
                "{}",
                table.render_with(|r, c, cell| match c {
                    COL_QTY if colors[r].0 => paint(YELLOW, cell),
                    COL_STATUS => paint(colors[r].1, cell),
                    _ => cell.to_string(),
                })
            );

            let pending = items.iter().filter(|i| i.needs_order()).count();
            if pending > 0 {
                warning(format!("{} item(s) need a reorder", pending));
            }
        }

        StockAction::Adjust { id, delta } => {
            let updated = stock::adjust(&container.state().stock, id, *delta)?;
            container.replace_stock(updated)?;

            let item = container
                .state()
                .stock
                .iter()
                .find(|i| i.id == *id)
                .cloned();
            audit(container.backend(), "stock_adjust", id, &format!("{delta:+}"));

            if let Some(i) = item {
                success(format!("{}: {} {}", i.name, i.quantity, i.unit));
                if i.needs_order() {
                    warning(format!(
                        "{} is at or below its reorder point ({})",
                        i.name, i.threshold
                    ));
                }
            }
        }

        StockAction::ToggleOrder { id } => {
            let updated = stock::toggle_order(&container.state().stock, id)?;
            container.replace_stock(updated)?;

            let requested = container
                .state()
                .stock
                .iter()
                .any(|i| i.id == *id && i.is_order_requested);
            audit(
                container.backend(),
                "stock_order",
                id,
                if requested { "requested" } else { "cleared" },
            );
            if requested {
                success(format!("Reorder requested for {}", id));
            } else {
                success(format!("Reorder request cleared for {}", id));
            }
        }

        StockAction::Orders {
            owner,
            resident,
            mark,
        } => {
            let filter = owner_filter(owner, resident);
            let list: Vec<StockItem> = stock::order_list(&container.state().stock, &filter)
                .into_iter()
                .cloned()
                .collect();

            if list.is_empty() {
                success("Nothing to reorder.");
                return Ok(());
            }

            header("Reorder list");
            for i in &list {
                println!(
                    "- {}: {} {} left (reorder at {})",
                    i.name, i.quantity, i.unit, i.threshold
                );
            }

            if *mark {
                let ids: Vec<String> = list.iter().map(|i| i.id.clone()).collect();
                let updated = stock::mark_ordered(&container.state().stock, &ids);
                container.replace_stock(updated)?;
                audit(
                    container.backend(),
                    "stock_order",
                    &ids.join(","),
                    "requested",
                );
                success(format!("{} item(s) marked as reordered", ids.len()));
            }
        }

        StockAction::Del { id } => {
            let updated = stock::remove(&container.state().stock, id)?;
            container.replace_stock(updated)?;
            audit(container.backend(), "stock_del", id, "Stock item deleted");
            success(format!("Stock item {} deleted", id));
        }
    }

    Ok(())
}
