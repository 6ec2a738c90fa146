use crate::cli::parser::{Commands, ResidentAction};
use crate::config::Config;
use crate::core::{residents, schedule};
use crate::errors::{AppError, AppResult};
use crate::models::resident::{HealthReading, HealthRecord, Resident, ResidentPatch};
use crate::ui::messages::{header, info, success};
use crate::utils::date::parse_date;
use crate::utils::id::short_id;
use crate::utils::table::{Column, Table};

use super::{audit, open_state, resolve_now};

fn check_birth_date(input: &Option<String>) -> AppResult<Option<String>> {
    match input {
        Some(s) => parse_date(s)
            .map(|d| Some(d.format("%Y-%m-%d").to_string()))
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

fn opt(v: Option<f64>, unit: &str) -> String {
    v.map(|x| format!("{x}{unit}")).unwrap_or_else(|| "-".to_string())
}

fn opt_u(v: Option<u32>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

fn vitals_table(records: &[&HealthRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("DATE", 4),
        Column::new("TIME", 4),
        Column::new("WEIGHT", 6),
        Column::new("TEMP", 4),
        Column::new("BP", 2),
        Column::new("PULSE", 5),
        Column::new("SPO2", 4),
        Column::new("NOTES", 5),
    ]);
    for r in records {
        let v = &r.reading;
        let bp = match (v.systolic_bp, v.diastolic_bp) {
            (None, None) => "-".to_string(),
            (s, d) => format!("{}/{}", opt_u(s), opt_u(d)),
        };
        table.add_row(vec![
            r.date.clone(),
            r.time.clone(),
            opt(v.weight, "kg"),
            opt(v.temperature, "°C"),
            bp,
            opt_u(v.pulse),
            v.spo2.map(|x| format!("{x}%")).unwrap_or_else(|| "-".to_string()),
            v.notes.clone().unwrap_or_default(),
        ]);
    }
    table
}

fn print_profile(r: &Resident) {
    header(format!("{} ({})", r.label(), r.id));
    println!("Age            : {}", r.age);
    println!("Birth date     : {}", r.birth_date.as_deref().unwrap_or("-"));
    println!("Blood type     : {}", r.blood_type.as_deref().unwrap_or("-"));
    println!("Diagnosis      : {}", r.diagnosis.as_deref().unwrap_or("-"));
    println!("Weight         : {}", opt(r.current_weight, " kg"));
    println!("Support level  : {}", r.disability_level);
    println!("Assessment     : {}", r.assessment);
    println!("Care plan      : {}", r.care_plan);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Resident { action } = cmd else {
        return Ok(());
    };

    let mut container = open_state(cfg)?;

    match action {
        ResidentAction::Add {
            id,
            name,
            room,
            age,
            birth_date,
            blood_type,
            diagnosis,
            disability_level,
            assessment,
            care_plan,
        } => {
            let id = id.clone().unwrap_or_else(short_id);
            let resident = Resident {
                age: *age,
                birth_date: check_birth_date(birth_date)?,
                blood_type: blood_type.clone(),
                diagnosis: diagnosis.clone(),
                disability_level: disability_level.clone(),
                assessment: assessment.clone(),
                care_plan: care_plan.clone(),
                ..Resident::new(&id, name, room)
            };

            let updated = residents::add(&container.state().residents, resident)?;
            container.replace_residents(updated)?;

            audit(container.backend(), "resident_add", &id, name);
            success(format!("Resident added: {} ({}, room {})", id, name, room));
        }

        ResidentAction::List => {
            let list = &container.state().residents;
            if list.is_empty() {
                info("No residents.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("NAME", 4),
                Column::new("ROOM", 4),
                Column::new("AGE", 3),
                Column::new("SUPPORT", 7),
            ]);
            for r in list {
                table.add_row(vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.room_number.clone(),
                    r.age.to_string(),
                    r.disability_level.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        ResidentAction::Show { id } => {
            let r = residents::require(&container.state().residents, id)?;
            print_profile(r);

            let history = residents::health_history(r);
            println!();
            if history.is_empty() {
                info("No vitals recorded.");
            } else {
                print!("{}", vitals_table(&history).render());
            }
        }

        ResidentAction::Update {
            id,
            name,
            room,
            age,
            birth_date,
            blood_type,
            diagnosis,
            disability_level,
            assessment,
            care_plan,
        } => {
            let patch = ResidentPatch {
                name: name.clone(),
                room_number: room.clone(),
                age: *age,
                birth_date: check_birth_date(birth_date)?,
                blood_type: blood_type.clone(),
                diagnosis: diagnosis.clone(),
                disability_level: disability_level.clone(),
                assessment: assessment.clone(),
                care_plan: care_plan.clone(),
            };

            let updated = residents::update(&container.state().residents, id, patch)?;
            container.replace_residents(updated)?;

            audit(container.backend(), "resident_update", id, "Profile updated");
            success(format!("Resident {} updated", id));
        }

        ResidentAction::Vitals {
            id,
            weight,
            temperature,
            systolic,
            diastolic,
            pulse,
            spo2,
            notes,
            at,
        } => {
            let reading = HealthReading {
                weight: *weight,
                temperature: *temperature,
                systolic_bp: *systolic,
                diastolic_bp: *diastolic,
                pulse: *pulse,
                spo2: *spo2,
                notes: notes.clone(),
            };
            let now = resolve_now(at)?;

            let (updated, record) =
                residents::record_vitals(&container.state().residents, id, reading, now)?;
            container.replace_residents(updated)?;

            audit(
                container.backend(),
                "resident_vitals",
                id,
                &format!("{} {}", record.date, record.time),
            );
            success(format!(
                "Vitals recorded for {} at {} {}",
                id, record.date, record.time
            ));
        }

        ResidentAction::Del { id } => {
            let updated = residents::remove(&container.state().residents, id)?;
            let plans = schedule::remove_for_resident(&container.state().schedules, id);
            let dropped = container.state().schedules.len() - plans.len();

            container.replace_schedules(plans)?;
            container.replace_residents(updated)?;

            audit(container.backend(), "resident_del", id, "Resident deleted");
            success(format!(
                "Resident {} deleted ({} schedule entr{} removed)",
                id,
                dropped,
                if dropped == 1 { "y" } else { "ies" }
            ));
        }
    }

    Ok(())
}
