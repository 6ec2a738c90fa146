mod common;

use common::{add_task, setup_sandbox, stdout_of};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_init_seeds_roster() {
    let sb = setup_sandbox();

    sb.cmd()
        .args(["staff", "list"])
        .assert()
        .success()
        .stdout(contains("Yamada"))
        .stdout(contains("nurse"));
}

#[test]
fn test_init_does_not_write_config_in_test_mode() {
    let sb = setup_sandbox();
    assert!(!sb.home.path().join(".caresync").join("caresync.conf").exists());
}

#[test]
fn test_task_add_and_list() {
    let sb = setup_sandbox();

    sb.cmd()
        .args([
            "task",
            "add",
            "--id",
            "med1",
            "--time",
            "8:30",
            "--title",
            "Morning meds",
            "--category",
            "medication",
            "--priority",
            "high",
        ])
        .assert()
        .success()
        .stdout(contains("Task added: med1 (08:30 Morning meds)"));

    add_task(&sb, "bf1", "07:30", "Breakfast");

    let out = stdout_of(sb.cmd().args(["task", "list", "--at", "07:00"]));
    let bf = out.find("Breakfast").expect("breakfast listed");
    let med = out.find("Morning meds").expect("meds listed");
    assert!(bf < med, "tasks are listed in time order:\n{out}");
    assert!(out.contains("MEDICATION"));
    assert!(out.contains("pending"));
    assert!(!out.contains("OVERDUE"));
}

#[test]
fn test_task_list_filters_by_category() {
    let sb = setup_sandbox();
    sb.cmd()
        .args([
            "task", "add", "--time", "12:00", "--title", "Lunch", "--category", "meal",
        ])
        .assert()
        .success();
    add_task(&sb, "x1", "15:00", "Paperwork");

    sb.cmd()
        .args(["task", "list", "--category", "MEAL"])
        .assert()
        .success()
        .stdout(contains("Lunch"))
        .stdout(contains("Paperwork").not());
}

#[test]
fn test_task_rejects_invalid_input() {
    let sb = setup_sandbox();

    sb.cmd()
        .args(["task", "add", "--time", "24:10", "--title", "Bad"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    sb.cmd()
        .args([
            "task", "add", "--time", "10:00", "--title", "Bad", "--category", "snack",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid task category"));

    sb.cmd()
        .args([
            "task",
            "add",
            "--time",
            "10:00",
            "--title",
            "Bad",
            "--assigned-to",
            "s99",
        ])
        .assert()
        .failure()
        .stderr(contains("No staff member with id s99"));
}

#[test]
fn test_done_undo_del() {
    let sb = setup_sandbox();
    add_task(&sb, "t1", "09:00", "Walk");

    sb.cmd()
        .args(["task", "done", "t1"])
        .assert()
        .success()
        .stdout(contains("Task t1 completed"));
    sb.cmd()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(contains("done"));

    sb.cmd()
        .args(["task", "undo", "t1"])
        .assert()
        .success()
        .stdout(contains("Task t1 reopened"));

    sb.cmd()
        .args(["task", "del", "t1"])
        .assert()
        .success()
        .stdout(contains("Task t1 deleted"));
    sb.cmd()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(contains("No tasks."));

    sb.cmd()
        .args(["task", "done", "t1"])
        .assert()
        .failure()
        .stderr(contains("No task with id t1"));
}

#[test]
fn test_overdue_is_strict_and_skips_completed() {
    let sb = setup_sandbox();
    add_task(&sb, "a", "08:00", "Breakfast");
    add_task(&sb, "b", "10:00", "Bath");
    add_task(&sb, "c", "07:00", "Wake up");
    sb.cmd().args(["task", "done", "c"]).assert().success();

    // Same minute is not overdue yet.
    let out = stdout_of(sb.cmd().args(["overdue", "--at", "10:00"]));
    assert!(out.contains("Breakfast"));
    assert!(!out.contains("Bath"));
    assert!(!out.contains("Wake up"));
    assert!(out.contains("Overdue: 1"));

    let out = stdout_of(sb.cmd().args(["overdue", "--at", "10:01"]));
    assert!(out.contains("Bath"));
    assert!(out.contains("Overdue: 2"));

    sb.cmd()
        .args(["overdue", "--at", "07:59"])
        .assert()
        .success()
        .stdout(contains("No overdue tasks at 07:59"));
}

#[test]
fn test_alerts_toggle_disables_overdue() {
    let sb = setup_sandbox();
    add_task(&sb, "a", "08:00", "Breakfast");

    sb.cmd()
        .args(["alerts"])
        .assert()
        .success()
        .stdout(contains("Overdue alerts are on"));

    sb.cmd()
        .args(["alerts", "--off"])
        .assert()
        .success()
        .stdout(contains("Overdue alerts turned off"));

    sb.cmd()
        .args(["overdue", "--at", "12:00"])
        .assert()
        .success()
        .stdout(contains("Overdue alerts are disabled"))
        .stdout(contains("Breakfast").not());

    sb.cmd().args(["alerts", "--on"]).assert().success();
    sb.cmd()
        .args(["overdue", "--at", "12:00"])
        .assert()
        .success()
        .stdout(contains("Overdue: 1"));

    sb.cmd().args(["alerts", "--on", "--off"]).assert().failure();
}

#[test]
fn test_watch_runs_requested_ticks() {
    let sb = setup_sandbox();
    add_task(&sb, "a", "00:00", "Midnight check");

    sb.cmd()
        .args(["watch", "--ticks", "1", "--interval", "3600", "--silent"])
        .assert()
        .success()
        .stdout(contains("#1 overdue="))
        .stdout(contains("Monitor stopped after 1 evaluation(s)"));
}

#[test]
fn test_calendar_month_list_is_padded() {
    let sb = setup_sandbox();

    let out = stdout_of(sb.cmd().args([
        "calendar", "--view", "month", "--date", "2024-02-10", "--list",
    ]));
    assert!(out.contains("=== 2024-02 ==="));
    assert_eq!(out.matches("(prev)").count(), 4);
    assert_eq!(out.matches("2024-02-").count(), 29);
    assert!(out.contains("2024-01-28 Sun (prev)"));

    let out = stdout_of(sb.cmd().args([
        "calendar",
        "--view",
        "month",
        "--date",
        "2024-02-10",
        "--list",
        "--no-padding",
    ]));
    assert_eq!(out.matches("(prev)").count(), 0);
    assert_eq!(out.matches("2024-02-").count(), 29);
}

#[test]
fn test_calendar_plain_grid_leaves_leading_cells_blank() {
    let sb = setup_sandbox();

    let out = stdout_of(sb.cmd().args([
        "calendar",
        "--view",
        "month",
        "--date",
        "2024-02-10",
        "--no-padding",
    ]));
    let rows: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.contains("Sun Mon Tue"))
        .skip(1)
        .collect();
    // Feb 1st 2024 is a Thursday: four blank cells before it.
    assert!(rows[0].starts_with("                  1   2"), "{out}");
    assert!(!rows[0].contains("28"), "{out}");
    assert_eq!(rows.len(), 5, "{out}");
}

#[test]
fn test_calendar_shift_moves_window() {
    let sb = setup_sandbox();

    sb.cmd()
        .args([
            "calendar", "--view", "month", "--date", "2024-03-31", "--shift=-1", "--list",
        ])
        .assert()
        .success()
        .stdout(contains("=== 2024-02 ==="));

    let out = stdout_of(sb.cmd().args([
        "calendar", "--view", "week", "--date", "2024-02-29", "--shift", "1", "--list",
    ]));
    assert!(out.contains("2024-03-03 Sun"));
    assert!(out.contains("2024-03-09 Sat"));
    assert_eq!(out.matches("2024-03-").count(), 7 + 2);

    sb.cmd()
        .args(["calendar", "--view", "day", "--date", "2024-12-31", "--shift", "1"])
        .assert()
        .success()
        .stdout(contains("2025-01-01 Wed"));
}

#[test]
fn test_calendar_rejects_bad_date() {
    let sb = setup_sandbox();
    sb.cmd()
        .args(["calendar", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_shift_assign_show_clear() {
    let sb = setup_sandbox();

    sb.cmd()
        .args(["shift", "assign", "2025-03-10", "--slot", "day", "--staff", "s2"])
        .assert()
        .success()
        .stdout(contains("2025-03-10 day shift (09:00-17:00) assigned to Yamada"));
    sb.cmd()
        .args(["shift", "assign", "2025-03-10", "--slot", "night", "--staff", "s5"])
        .assert()
        .success();

    sb.cmd()
        .args(["shift", "show", "--view", "day", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Yamada"))
        .stdout(contains("night: Sato (nurse)"));

    sb.cmd()
        .args(["shift", "clear", "2025-03-10", "--slot", "day"])
        .assert()
        .success()
        .stdout(contains("2025-03-10 day shift cleared"));
    sb.cmd()
        .args(["shift", "show", "--view", "day", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Yamada").not());

    sb.cmd()
        .args(["shift", "assign", "2025-03-10", "--slot", "day", "--staff", "zz"])
        .assert()
        .failure()
        .stderr(contains("No staff member with id zz"));
}

#[test]
fn test_staff_add_and_duplicate() {
    let sb = setup_sandbox();

    sb.cmd()
        .args(["staff", "add", "--id", "s6", "--name", "Ito", "--role", "nurse"])
        .assert()
        .success()
        .stdout(contains("Staff member Ito (s6) added"));

    sb.cmd()
        .args(["staff", "list"])
        .assert()
        .success()
        .stdout(contains("Ito"));

    sb.cmd()
        .args(["staff", "add", "--id", "s6", "--name", "Other"])
        .assert()
        .failure()
        .stderr(contains("Staff id already in use"));

    sb.cmd()
        .args(["staff", "add", "--id", "s7", "--name", "X", "--role", "chef"])
        .assert()
        .failure()
        .stderr(contains("Invalid staff role"));
}

#[test]
fn test_log_print_records_operations() {
    let sb = setup_sandbox();
    add_task(&sb, "a", "08:00", "Breakfast");
    sb.cmd().args(["alerts", "--off"]).assert().success();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("task_add"))
        .stdout(contains("alerts"));
}

#[test]
fn test_config_print_uses_defaults() {
    let sb = setup_sandbox();
    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("poll_interval_secs"));
}

/// Last whitespace-separated word before '(' on the success line, i.e.
/// the generated id in "...: <id> (...)".
fn id_after(out: &str, prefix: &str) -> String {
    let line = out
        .lines()
        .find(|l| l.contains(prefix))
        .unwrap_or_else(|| panic!("no line with {prefix:?} in:\n{out}"));
    let rest = &line[line.find(prefix).unwrap() + prefix.len()..];
    rest.split_whitespace().next().unwrap().to_string()
}

fn add_resident(sb: &common::Sandbox, id: &str, name: &str, room: &str) {
    sb.cmd()
        .args(["resident", "add", "--id", id, "--name", name, "--room", room])
        .assert()
        .success();
}

#[test]
fn test_resident_add_list_show_and_vitals() {
    let sb = setup_sandbox();

    sb.cmd()
        .args([
            "resident",
            "add",
            "--id",
            "r1",
            "--name",
            "Tanaka",
            "--room",
            "101",
            "--age",
            "84",
            "--birth-date",
            "1941-04-02",
        ])
        .assert()
        .success()
        .stdout(contains("Resident added: r1 (Tanaka, room 101)"));

    sb.cmd()
        .args(["resident", "list"])
        .assert()
        .success()
        .stdout(contains("Tanaka"))
        .stdout(contains("84"));

    sb.cmd()
        .args(["resident", "show", "r1"])
        .assert()
        .success()
        .stdout(contains("1941-04-02"))
        .stdout(contains("No vitals recorded."));

    sb.cmd()
        .args(["resident", "vitals", "r1", "--weight", "52.5", "--sys", "130", "--dia", "85", "--at", "07:45"])
        .assert()
        .success()
        .stdout(contains("Vitals recorded for r1 at"))
        .stdout(contains("07:45"));

    sb.cmd()
        .args(["resident", "show", "r1"])
        .assert()
        .success()
        .stdout(contains("52.5 kg"))
        .stdout(contains("130/85"));

    sb.cmd()
        .args(["resident", "update", "r1", "--room", "203"])
        .assert()
        .success()
        .stdout(contains("Resident r1 updated"));

    sb.cmd()
        .args(["resident", "show", "r1"])
        .assert()
        .success()
        .stdout(contains("Tanaka (203)"));
}

#[test]
fn test_resident_errors() {
    let sb = setup_sandbox();
    add_resident(&sb, "r1", "Tanaka", "101");

    sb.cmd()
        .args(["resident", "add", "--id", "r1", "--name", "X", "--room", "1"])
        .assert()
        .failure()
        .stderr(contains("Resident id already in use: r1"));

    sb.cmd()
        .args(["resident", "vitals", "r1"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for vitals"));

    sb.cmd()
        .args(["resident", "show", "r9"])
        .assert()
        .failure()
        .stderr(contains("No resident with id r9"));
}

#[test]
fn test_schedule_show_lists_plans_of_the_month_only() {
    let sb = setup_sandbox();
    add_resident(&sb, "r1", "Tanaka", "101");
    add_resident(&sb, "r2", "Kato", "102");

    let out = stdout_of(sb.cmd().args([
        "schedule",
        "add",
        "2024-02-05",
        "--resident",
        "r1",
        "--title",
        "Dentist",
        "--kind",
        "visit",
        "--start",
        "10:00",
        "--end",
        "11:30",
    ]));
    assert!(out.contains("Schedule entry added:"), "{out}");
    assert!(out.contains("2024-02-05 VISIT Dentist"), "{out}");

    // Days of January that a padded month grid would show.
    sb.cmd()
        .args(["schedule", "add", "2024-01-30", "--resident", "r1", "--title", "Day care"])
        .assert()
        .success();

    let out = stdout_of(sb.cmd().args([
        "schedule", "show", "--view", "month", "--date", "2024-02-10",
    ]));
    assert!(out.contains("Tanaka (101)"), "{out}");
    assert!(out.contains("2024-02-05"), "{out}");
    assert!(out.contains("10:00-11:30"), "{out}");
    assert!(out.contains("Dentist"), "{out}");
    assert!(!out.contains("2024-01-30"), "{out}");
    assert!(out.contains("Kato (102)"), "{out}");
    assert!(out.contains("(no plans)"), "{out}");

    let out = stdout_of(sb.cmd().args([
        "schedule",
        "show",
        "--view",
        "month",
        "--date",
        "2024-02-10",
        "--shift=-1",
        "--resident",
        "r1",
    ]));
    assert!(out.contains("2024-01-30"), "{out}");
    assert!(out.contains("DAY_CARE"), "{out}");
    assert!(!out.contains("Kato"), "{out}");
}

#[test]
fn test_schedule_rejects_unknown_resident_and_bad_times() {
    let sb = setup_sandbox();
    add_resident(&sb, "r1", "Tanaka", "101");

    sb.cmd()
        .args(["schedule", "add", "2024-02-05", "--resident", "r9", "--title", "X"])
        .assert()
        .failure()
        .stderr(contains("No resident with id r9"));

    sb.cmd()
        .args([
            "schedule", "add", "2024-02-05", "--resident", "r1", "--title", "X", "--start",
            "12:00", "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid value for end time"));
}

#[test]
fn test_resident_delete_drops_schedule() {
    let sb = setup_sandbox();
    add_resident(&sb, "r1", "Tanaka", "101");
    sb.cmd()
        .args(["schedule", "add", "2024-02-05", "--resident", "r1", "--title", "Bath"])
        .assert()
        .success();

    sb.cmd()
        .args(["resident", "del", "r1"])
        .assert()
        .success()
        .stdout(contains("Resident r1 deleted (1 schedule entry removed)"));

    sb.cmd()
        .args(["schedule", "show", "--date", "2024-02-05", "--view", "month"])
        .assert()
        .success()
        .stdout(contains("No residents."));
}

#[test]
fn test_stock_low_items_and_reorder() {
    let sb = setup_sandbox();
    add_resident(&sb, "r1", "Tanaka", "101");

    sb.cmd()
        .args([
            "stock", "add", "--id", "g1", "--name", "Gloves", "--category", "medical",
            "--quantity", "10", "--unit", "box", "--threshold", "3",
        ])
        .assert()
        .success()
        .stdout(contains("Stock item added: g1 (Gloves)"));

    sb.cmd()
        .args([
            "stock", "add", "--id", "t1", "--name", "Tissues", "--quantity", "1",
            "--threshold", "2", "--resident", "r1",
        ])
        .assert()
        .success();

    let out = stdout_of(sb.cmd().args(["stock", "list"]));
    assert!(out.contains("Gloves") && out.contains("Tissues"), "{out}");
    assert!(out.contains("LOW"), "{out}");
    assert!(out.contains("1 item(s) need a reorder"), "{out}");

    sb.cmd()
        .args(["stock", "adjust", "g1", "-8"])
        .assert()
        .success()
        .stdout(contains("Gloves: 2 box"))
        .stdout(contains("at or below its reorder point"));

    let out = stdout_of(sb.cmd().args(["stock", "orders", "--owner", "company"]));
    assert!(out.contains("- Gloves: 2 box left (reorder at 3)"), "{out}");
    assert!(!out.contains("Tissues"), "{out}");

    sb.cmd()
        .args(["stock", "orders", "--mark"])
        .assert()
        .success()
        .stdout(contains("2 item(s) marked as reordered"));

    sb.cmd()
        .args(["stock", "orders"])
        .assert()
        .success()
        .stdout(contains("Nothing to reorder."));

    sb.cmd()
        .args(["stock", "list", "--resident", "r1"])
        .assert()
        .success()
        .stdout(contains("Tissues"))
        .stdout(contains("ordered"))
        .stdout(contains("Gloves").not());
}

#[test]
fn test_stock_errors() {
    let sb = setup_sandbox();

    sb.cmd()
        .args(["stock", "add", "--name", "Soap", "--resident", "r9"])
        .assert()
        .failure()
        .stderr(contains("No resident with id r9"));

    sb.cmd()
        .args(["stock", "adjust", "nope", "1"])
        .assert()
        .failure()
        .stderr(contains("No stock item with id nope"));

    sb.cmd()
        .args(["stock", "add", "--id", "s", "--name", "Soap"])
        .assert()
        .success();
    sb.cmd()
        .args(["stock", "toggle-order", "s"])
        .assert()
        .success()
        .stdout(contains("Reorder requested for s"));
    sb.cmd()
        .args(["stock", "del", "s"])
        .assert()
        .success()
        .stdout(contains("Stock item s deleted"));
}

#[test]
fn test_report_read_receipts_and_export() {
    let sb = setup_sandbox();

    let out = stdout_of(sb.cmd().args([
        "report", "add", "--type", "hiyari", "--author", "s2", "--when", "12:40",
        "--where", "dining room", "--who", "Tanaka", "--what", "Almost choked",
        "--why", "ate too fast", "--how", "was watched",
    ]));
    assert!(out.contains("Near miss report filed:"), "{out}");
    let id = id_after(&out, "report filed: ");

    let out = stdout_of(sb.cmd().args(["report", "list", "--as", "s3"]));
    assert!(out.contains("Almost choked"), "{out}");
    assert!(out.contains("1 unread report(s) for s3"), "{out}");

    sb.cmd()
        .args(["report", "show", &id, "--as", "s3"])
        .assert()
        .success()
        .stdout(contains("dining room"))
        .stdout(contains("Read by: Yamada, Suzuki"));

    let out = stdout_of(sb.cmd().args(["report", "list", "--as", "s3"]));
    assert!(!out.contains("unread"), "{out}");

    sb.cmd()
        .args(["report", "list", "--type", "accident"])
        .assert()
        .success()
        .stdout(contains("No reports."));

    let csv = sb.home.path().join("reports.csv");
    sb.cmd()
        .args(["report", "export", "--output", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("1 report(s) exported"));

    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("type,created_at,author,when,where,who,what,why,how"));
    assert!(text.contains("Near miss"));
    assert!(text.contains("Almost choked"));
}

#[test]
fn test_report_needs_known_author() {
    let sb = setup_sandbox();
    sb.cmd()
        .args([
            "report", "add", "--type", "accident", "--author", "zz", "--when", "now",
            "--where", "hall", "--who", "Kato", "--what", "Fell",
        ])
        .assert()
        .failure()
        .stderr(contains("No staff member with id zz"));
}

#[test]
fn test_todo_add_toggle_delete() {
    let sb = setup_sandbox();

    let out = stdout_of(sb.cmd().args(["todo", "add", "--staff", "s2", "Call family"]));
    let id = id_after(&out, "Todo added: ");

    sb.cmd()
        .args(["todo", "list", "--staff", "s2"])
        .assert()
        .success()
        .stdout(contains("Todos of Yamada (1 open)"))
        .stdout(contains("[ ]"))
        .stdout(contains("Call family"));

    sb.cmd()
        .args(["todo", "toggle", &id])
        .assert()
        .success()
        .stdout(contains("marked done"));

    sb.cmd()
        .args(["todo", "list", "--staff", "s2"])
        .assert()
        .success()
        .stdout(contains("(0 open)"))
        .stdout(contains("[x]"));

    sb.cmd()
        .args(["todo", "list", "--staff", "s3"])
        .assert()
        .success()
        .stdout(contains("No todos."));

    sb.cmd()
        .args(["todo", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    sb.cmd()
        .args(["todo", "add", "--staff", "s2", "  "])
        .assert()
        .failure()
        .stderr(contains("Invalid value for todo"));
}
