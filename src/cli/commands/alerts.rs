use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::{audit, open_state};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { on, off } = cmd {
        let mut container = open_state(cfg)?;

        if !*on && !*off {
            let state = if container.state().enable_alerts {
                "on"
            } else {
                "off"
            };
            info(format!("Overdue alerts are {}", state));
            return Ok(());
        }

        let enabled = *on;
        container.set_enable_alerts(enabled)?;
        let label = if enabled { "on" } else { "off" };
        audit(container.backend(), "alerts", label, "Overdue alerts toggled");
        success(format!("Overdue alerts turned {}", label));
    }

    Ok(())
}
