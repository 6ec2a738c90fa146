use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::calendar::{Granularity, MonthLayout};
use crate::core::{shift, staff};
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftSlot;
use crate::ui::messages::{header, success};
use crate::utils::colors::{GREY, paint};
use crate::utils::date::{format_date, parse_date, weekday_short};

use super::calendar::resolve_window;
use super::{audit, open_state};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Shift { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        ShiftAction::Assign { date, slot, staff } => {
            let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
            let member = staff::require(&container.state().staff, staff)?.clone();

            let updated = shift::assign(&container.state().shifts, &d, *slot, &member.id);
            container.replace_shifts(updated)?;

            audit(
                container.backend(),
                "shift_assign",
                &format_date(&d),
                &format!("{} shift: {}", slot, member.id),
            );
            success(format!(
                "{} {} shift ({}) assigned to {}",
                format_date(&d),
                slot,
                slot.hours(),
                member.name
            ));
        }

        ShiftAction::Clear { date, slot } => {
            let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
            let updated = shift::clear(&container.state().shifts, &d, *slot);
            container.replace_shifts(updated)?;

            audit(
                container.backend(),
                "shift_clear",
                &format_date(&d),
                &format!("{} shift cleared", slot),
            );
            success(format!("{} {} shift cleared", format_date(&d), slot));
        }

        ShiftAction::Show { view, date, shift: n } => {
            let view = view.unwrap_or(cfg.default_view);
            let window = resolve_window(date, view, MonthLayout::Padded, *n)?;
            let state = container.state();

            header(format!("Shifts {}", window.title()));

            for d in &window.dates {
                let entry = shift::shift_for(&state.shifts, d);
                let name = |slot: ShiftSlot| -> String {
                    entry
                        .and_then(|s| s.staff_for(slot))
                        .map(|id| container.staff_name(id).unwrap_or(id).to_string())
                        .unwrap_or_else(|| "-".to_string())
                };

                let line = format!(
                    "{} {}  day: {:<18} night: {}",
                    format_date(d),
                    weekday_short(d),
                    name(ShiftSlot::Day),
                    name(ShiftSlot::Night)
                );

                if window.is_padding(d) && view == Granularity::Month {
                    println!("{}", paint(GREY, &line));
                } else {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
