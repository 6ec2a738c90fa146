use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overdue::evaluate;
use crate::errors::AppResult;
use crate::ui::messages::{alert, header, success, warning};
use crate::utils::time::format_time;

use super::{open_state, resolve_now};

/// One-shot overdue evaluation, as if no earlier tick had run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overdue { at } = cmd {
        let container = open_state(cfg)?;
        let state = container.state();
        let now = resolve_now(at)?;
        let at_str = format_time(&now.time());

        if !state.enable_alerts {
            warning("Overdue alerts are disabled (enable with `caresync alerts --on`).");
            return Ok(());
        }

        let evaluation = evaluate(&state.tasks, now, state.enable_alerts, 0);

        if evaluation.is_empty() {
            success(format!("No overdue tasks at {}", at_str));
            return Ok(());
        }

        header(format!("Overdue at {}", at_str));
        for t in &evaluation.overdue_tasks {
            println!("{}  {:<10} {}", t.time, t.id, t.title);
        }
        alert(format!("Overdue: {}", evaluation.count()), false);
    }

    Ok(())
}
