use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::core::overdue::is_overdue;
use crate::core::{staff, tasks};
use crate::errors::AppResult;
use crate::models::task::{TaskCategory, TaskDraft, TaskPriority};
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_priority, color_for_task, paint};
use crate::utils::table::{Column, Table};
use chrono::Local;

use super::{audit, open_state, resolve_now};

const COL_PRIORITY: usize = 4;
const COL_STATUS: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        TaskAction::Add {
            time,
            title,
            description,
            category,
            priority,
            assigned_to,
            resident,
            id,
        } => {
            let category = match category {
                Some(c) => TaskCategory::from_code(c)?,
                None => TaskCategory::default(),
            };
            let priority = match priority {
                Some(p) => TaskPriority::from_code(p)?,
                None => TaskPriority::default(),
            };
            if let Some(s) = assigned_to {
                staff::require(&container.state().staff, s)?;
            }

            let draft = TaskDraft {
                id: id.clone(),
                time: time.clone(),
                title: title.clone(),
                description: description.clone(),
                category,
                priority,
                assigned_to: assigned_to.clone(),
                resident_id: resident.clone(),
            };

            let (updated, task) = tasks::add(&container.state().tasks, draft)?;
            container.replace_tasks(updated)?;

            audit(
                container.backend(),
                "task_add",
                &task.id,
                &format!("{} {}", task.time, task.title),
            );
            success(format!("Task added: {} ({} {})", task.id, task.time, task.title));
        }

        TaskAction::List { category, at } => {
            let category = category
                .as_deref()
                .map(TaskCategory::from_code)
                .transpose()?;
            let now = resolve_now(at)?.time();
            let state = container.state();

            let selected = tasks::filter_by_category(&state.tasks, category);
            if selected.is_empty() {
                info("No tasks.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("TIME", 5),
                Column::new("TITLE", 5),
                Column::new("CATEGORY", 8),
                Column::new("PRIORITY", 8),
                Column::new("STATUS", 7),
                Column::new("ASSIGNED", 8),
            ]);

            let mut colors = Vec::with_capacity(selected.len());
            for t in &selected {
                let overdue = state.enable_alerts && is_overdue(t, now);
                let status = if t.is_completed {
                    "done"
                } else if overdue {
                    "OVERDUE"
                } else {
                    "pending"
                };
                let assigned = t
                    .assigned_to
                    .as_deref()
                    .map(|id| container.staff_name(id).unwrap_or(id).to_string())
                    .unwrap_or_else(|| "-".to_string());

                colors.push((
                    color_for_task(t.is_completed, overdue),
                    color_for_priority(t.priority),
                ));
                table.add_row(vec![
                    t.id.clone(),
                    t.time.clone(),
                    t.title.clone(),
                    t.category.to_string(),
                    t.priority.to_string(),
                    status.to_string(),
                    assigned,
                ]);
            }

            print!(
                "{}",
                table.render_with(|r, c, cell| match c {
                    COL_PRIORITY => paint(colors[r].1, cell),
                    COL_STATUS => paint(colors[r].0, cell),
                    _ => cell.to_string(),
                })
            );
        }

        TaskAction::Done { id } | TaskAction::Undo { id } => {
            let done = matches!(action, TaskAction::Done { .. });
            let now = Local::now().naive_local();
            let updated = tasks::set_completed(&container.state().tasks, id, done, now)?;
            container.replace_tasks(updated)?;

            let op = if done { "task_done" } else { "task_undo" };
            audit(container.backend(), op, id, op);
            if done {
                success(format!("Task {} completed", id));
            } else {
                success(format!("Task {} reopened", id));
            }
        }

        TaskAction::Del { id } => {
            let updated = tasks::remove(&container.state().tasks, id)?;
            container.replace_tasks(updated)?;
            audit(container.backend(), "task_del", id, "Task deleted");
            success(format!("Task {} deleted", id));
        }
    }

    Ok(())
}
