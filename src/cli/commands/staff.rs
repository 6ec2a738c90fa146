use crate::cli::parser::{Commands, StaffAction};
use crate::config::Config;
use crate::core::staff;
use crate::errors::AppResult;
use crate::models::staff::{Staff, StaffRole};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

use super::{audit, open_state};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Staff { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        StaffAction::List => {
            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("NAME", 4),
                Column::new("ROLE", 4),
            ]);
            for s in &container.state().staff {
                table.add_row(vec![s.id.clone(), s.name.clone(), s.role.as_str().to_string()]);
            }
            print!("{}", table.render());
        }

        StaffAction::Add { id, name, role } => {
            let member = Staff::new(id, name, StaffRole::from_code(role)?);
            let updated = staff::add(&container.state().staff, member)?;
            container.replace_staff(updated)?;

            audit(container.backend(), "staff_add", id, name);
            success(format!("Staff member {} ({}) added", name, id));
        }
    }

    Ok(())
}
