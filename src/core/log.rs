use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, RESET, YELLOW, paint};

const MAX_OP_WIDTH: usize = 40;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "task_add" | "staff_add" => GREEN,
        "task_del" | "shift_clear" => RED,
        "task_done" | "task_undo" | "shift_assign" => YELLOW,
        "alerts" => BLUE,
        "migration_applied" | "init" => MAGENTA,
        _ => RESET,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_target = |op: &str, target: &str| -> String {
            let s = if target.is_empty() {
                op.to_string()
            } else {
                format!("{op} ({target})")
            };
            if s.chars().count() > MAX_OP_WIDTH {
                let mut cut: String = s.chars().take(MAX_OP_WIDTH - 3).collect();
                cut.push_str("...");
                cut
            } else {
                s
            }
        };

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let label = op_target(&e.operation, &e.target);
            let padded = format!("{:<op_w$}", label, op_w = op_w);
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                e.id,
                e.date,
                paint(color_for_operation(&e.operation), &padded),
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
