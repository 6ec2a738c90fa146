use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarWindow, Granularity, MonthLayout};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_day, paint};
use crate::utils::date::{format_date, sunday_index, today, weekday_short};
use chrono::Datelike;

use super::resolve_date;

const WEEK_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat";

/// Build the window for `--date` / `--view`, then page it by `--shift`.
pub(crate) fn resolve_window(
    date: &Option<String>,
    view: Granularity,
    layout: MonthLayout,
    shift: i64,
) -> AppResult<CalendarWindow> {
    let reference = resolve_date(date)?;
    CalendarWindow::with_layout(reference, view, layout)
        .shifted(shift)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| {
            AppError::DateOutOfRange(format!("{} shifted by {} {}(s)", reference, shift, view))
        })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        view,
        date,
        shift,
        no_padding,
        list,
    } = cmd
    {
        let view = view.unwrap_or(cfg.default_view);
        let layout = if *no_padding {
            MonthLayout::Plain
        } else {
            MonthLayout::Padded
        };
        let window = resolve_window(date, view, layout, *shift)?;

        header(window.title());

        if *list || view == Granularity::Day {
            print_list(&window, cfg.show_weekday);
        } else {
            print_grid(&window);
        }
    }

    Ok(())
}

fn print_list(window: &CalendarWindow, show_weekday: bool) {
    for d in &window.dates {
        let mut line = format_date(d);
        if show_weekday {
            line.push(' ');
            line.push_str(weekday_short(d));
        }
        if window.is_padding(d) {
            line.push_str(" (prev)");
        }
        if *d == today() {
            line.push_str(" *");
        }
        println!("{}", paint(color_for_day(sunday_index(d), window.is_padding(d)), &line));
    }
}

fn print_grid(window: &CalendarWindow) {
    println!("{}", WEEK_HEADER);

    for row in window.weeks() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(d) => paint(
                    color_for_day(sunday_index(d), window.is_padding(d)),
                    &format!("{:>3}", d.day()),
                ),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}
