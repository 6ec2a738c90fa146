use crate::cli::parser::{Commands, ReportAction};
use crate::config::Config;
use crate::core::{reports, staff};
use crate::errors::AppResult;
use crate::export::csv::{write_reports, write_reports_to};
use crate::models::report::{IncidentReport, ReportDraft, ReportType};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RED, YELLOW, paint};
use chrono::Local;

use super::{audit, open_state};

fn color_for_type(kind: ReportType) -> &'static str {
    match kind {
        ReportType::Hiyari => YELLOW,
        ReportType::Accident => RED,
    }
}

fn print_report(r: &IncidentReport, readers: &[String]) {
    header(format!("{} {} ({})", r.kind.label(), r.id, r.created_at));
    println!("Author : {}", r.author_name);
    println!("When   : {}", r.when);
    println!("Where  : {}", r.place);
    println!("Who    : {}", r.who);
    println!("What   : {}", r.what);
    println!("Why    : {}", r.why);
    println!("How    : {}", r.how);
    println!("Read by: {}", readers.join(", "));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        ReportAction::Add {
            kind,
            author,
            when,
            place,
            who,
            what,
            why,
            how,
        } => {
            let author = staff::require(&container.state().staff, author)?.clone();
            let draft = ReportDraft {
                kind: *kind,
                when: when.clone(),
                place: place.clone(),
                who: who.clone(),
                what: what.clone(),
                why: why.clone(),
                how: how.clone(),
            };

            let (updated, report) = reports::add(
                &container.state().reports,
                draft,
                &author,
                Local::now().naive_local(),
            )?;
            container.replace_reports(updated)?;

            audit(
                container.backend(),
                "report_add",
                &report.id,
                &format!("{} by {}", report.kind, author.id),
            );
            success(format!("{} report filed: {}", report.kind.label(), report.id));
        }

        ReportAction::List { kind, reader } => {
            if let Some(s) = reader {
                staff::require(&container.state().staff, s)?;
            }
            let all = &container.state().reports;
            let list = reports::by_type(all, *kind);

            if list.is_empty() {
                info("No reports.");
                return Ok(());
            }

            for r in list {
                let unread = reader.as_deref().is_some_and(|s| !r.is_read_by(s));
                let line = format!(
                    "{}{:<9} {:<10} {}  {}  {}",
                    if unread { "● " } else { "  " },
                    r.kind.to_string(),
                    r.id,
                    r.created_at,
                    r.author_name,
                    r.what
                );
                println!("{}", paint(color_for_type(r.kind), &line));
            }

            if let Some(s) = reader {
                let n = reports::unread_count(all, s);
                if n > 0 {
                    warning(format!("{} unread report(s) for {}", n, s));
                }
            }
        }

        ReportAction::Show { id, reader } => {
            if let Some(s) = reader {
                staff::require(&container.state().staff, s)?;
                let updated = reports::mark_read(&container.state().reports, id, s)?;
                container.replace_reports(updated)?;
            }

            let report = reports::require(&container.state().reports, id)?;
            let readers: Vec<String> = report
                .read_by_staff_ids
                .iter()
                .map(|s| container.staff_name(s).unwrap_or(s).to_string())
                .collect();
            print_report(report, &readers);
        }

        ReportAction::Export { kind, output } => {
            let list = reports::by_type(&container.state().reports, *kind);
            match output {
                Some(path) => {
                    write_reports_to(path, &list)?;
                    success(format!("{} report(s) exported to {}", list.len(), path));
                }
                None => write_reports(std::io::stdout().lock(), &list)?,
            }
        }
    }

    Ok(())
}
