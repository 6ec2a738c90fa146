use crate::cli::parser::{Commands, ScheduleAction};
use crate::config::Config;
use crate::core::calendar::MonthLayout;
use crate::core::{residents, schedule};
use crate::errors::AppResult;
use crate::models::resident::Resident;
use crate::models::schedule::{ScheduleDraft, ScheduleKind};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RESET, paint};
use crate::utils::date::{format_date, today, weekday_short};

use super::calendar::resolve_window;
use super::{audit, open_state};

fn color_for_kind(kind: ScheduleKind) -> &'static str {
    match kind {
        ScheduleKind::DayCare => BLUE,
        ScheduleKind::Visit => MAGENTA,
        ScheduleKind::Home => GREEN,
        ScheduleKind::Other => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Schedule { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        ScheduleAction::Add {
            date,
            resident,
            title,
            kind,
            start,
            end,
            notes,
        } => {
            residents::require(&container.state().residents, resident)?;

            let draft = ScheduleDraft {
                resident_id: resident.clone(),
                date: date.clone(),
                title: title.clone(),
                kind: *kind,
                start_time: start.clone(),
                end_time: end.clone(),
                notes: notes.clone(),
            };
            let (updated, entry) = schedule::add(&container.state().schedules, draft)?;
            container.replace_schedules(updated)?;

            audit(
                container.backend(),
                "schedule_add",
                &entry.id,
                &format!("{} {} {}", entry.resident_id, entry.date, entry.title),
            );
            success(format!(
                "Schedule entry added: {} ({} {} {})",
                entry.id, entry.date, entry.kind, entry.title
            ));
        }

        ScheduleAction::Del { id } => {
            let updated = schedule::remove(&container.state().schedules, id)?;
            container.replace_schedules(updated)?;
            audit(container.backend(), "schedule_del", id, "Schedule entry deleted");
            success(format!("Schedule entry {} deleted", id));
        }

        ScheduleAction::Show {
            view,
            date,
            shift,
            resident,
        } => {
            let view = view.unwrap_or(cfg.default_view);
            // Resident plans list the month itself, no leading days.
            let window = resolve_window(date, view, MonthLayout::Plain, *shift)?;
            let state = container.state();

            let selected: Vec<&Resident> = match resident {
                Some(id) => vec![residents::require(&state.residents, id)?],
                None => state.residents.iter().collect(),
            };

            header(format!("Plans {}", window.title()));

            if selected.is_empty() {
                info("No residents.");
                return Ok(());
            }

            let now = today();
            for r in selected {
                println!("{}", r.label());

                let mut any = false;
                for d in &window.dates {
                    for entry in schedule::for_date(&state.schedules, &r.id, d) {
                        any = true;
                        let line = format!(
                            "  {} {}  {:<9} {:<12} {}{}  [{}]",
                            format_date(d),
                            weekday_short(d),
                            entry.kind.code(),
                            entry.time_range(),
                            entry.title,
                            entry
                                .notes
                                .as_deref()
                                .map(|n| format!(" ({n})"))
                                .unwrap_or_default(),
                            entry.id
                        );
                        let marker = if *d == now { " *" } else { "" };
                        println!("{}{}", paint(color_for_kind(entry.kind), &line), marker);
                    }
                }
                if !any {
                    println!("  (no plans)");
                }
            }
        }
    }

    Ok(())
}
