use crate::errors::AppResult;
use crate::models::report::IncidentReport;
use csv::Writer;
use std::io;

const REPORT_HEADER: [&str; 9] = [
    "type", "created_at", "author", "when", "where", "who", "what", "why", "how",
];

/// Line breaks inside a cell become spaces so every report is one row.
fn one_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Write reports as CSV to any writer (a file or stdout).
pub fn write_reports<W: io::Write>(out: W, reports: &[&IncidentReport]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(REPORT_HEADER)?;

    for r in reports {
        wtr.write_record([
            r.kind.label().to_string(),
            r.created_at.clone(),
            one_line(&r.author_name),
            one_line(&r.when),
            one_line(&r.place),
            one_line(&r.who),
            one_line(&r.what),
            one_line(&r.why),
            one_line(&r.how),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write reports as CSV into `path`.
pub fn write_reports_to(path: &str, reports: &[&IncidentReport]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_reports(file, reports)
}
