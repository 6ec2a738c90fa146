use crate::cli::parser::{Commands, TodoAction};
use crate::config::Config;
use crate::core::{staff, todos};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, paint};
use chrono::Local;

use super::{audit, open_state};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Todo { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        TodoAction::Add { staff, content } => {
            staff::require(&container.state().staff, staff)?;
            let (updated, todo) = todos::add(
                &container.state().todos,
                staff,
                content,
                Local::now().naive_local(),
            )?;
            container.replace_todos(updated)?;

            audit(container.backend(), "todo_add", &todo.id, &todo.content);
            success(format!("Todo added: {} ({})", todo.id, todo.content));
        }

        TodoAction::List { staff } => {
            let member = staff::require(&container.state().staff, staff)?;
            let mine = todos::for_staff(&container.state().todos, staff);

            header(format!(
                "Todos of {} ({} open)",
                member.name,
                todos::open_count(&container.state().todos, staff)
            ));

            if mine.is_empty() {
                info("No todos.");
                return Ok(());
            }

            for t in mine {
                if t.is_completed {
                    println!("{}", paint(GREY, &format!("[x] {:<10} {}", t.id, t.content)));
                } else {
                    println!("[ ] {:<10} {}", t.id, t.content);
                }
            }
        }

        TodoAction::Toggle { id } => {
            let updated = todos::toggle(&container.state().todos, id)?;
            container.replace_todos(updated)?;

            let done = container
                .state()
                .todos
                .iter()
                .any(|t| t.id == *id && t.is_completed);
            audit(container.backend(), "todo_toggle", id, if done { "done" } else { "open" });
            success(format!("Todo {} marked {}", id, if done { "done" } else { "open" }));
        }

        TodoAction::Del { id } => {
            let updated = todos::remove(&container.state().todos, id)?;
            container.replace_todos(updated)?;
            audit(container.backend(), "todo_del", id, "Todo deleted");
            success(format!("Todo {} deleted", id));
        }
    }

    Ok(())
}
