use caresync::core::overdue::{evaluate, is_overdue};
use caresync::models::task::Task;
use caresync::utils::time::{hour_minute, normalize_time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(h, m, 30)
        .unwrap()
}

fn task(id: &str, time: &str) -> Task {
    Task::new(id, time, &format!("task {id}"))
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_strictly_past_minute_is_overdue() {
    let tasks = vec![task("a", "10:00"), task("b", "10:05"), task("c", "10:06")];
    let ev = evaluate(&tasks, at(10, 5), true, 0);
    assert_eq!(ids(&ev.overdue_tasks), vec!["a"]);
}

#[test]
fn test_earlier_hour_is_overdue_regardless_of_minutes() {
    let tasks = vec![task("a", "09:59"), task("b", "00:00"), task("c", "11:00")];
    let ev = evaluate(&tasks, at(10, 0), true, 0);
    assert_eq!(ids(&ev.overdue_tasks), vec!["a", "b"]);
}

#[test]
fn test_completed_tasks_never_overdue() {
    let tasks = vec![
        task("a", "00:00").completed(),
        task("b", "08:00").completed(),
        task("c", "08:00"),
    ];
    for (h, m) in [(0, 0), (8, 1), (23, 59)] {
        let ev = evaluate(&tasks, at(h, m), true, 0);
        assert!(ev.overdue_tasks.iter().all(|t| !t.is_completed));
    }
    assert_eq!(ids(&evaluate(&tasks, at(23, 59), true, 0).overdue_tasks), vec!["c"]);
}

#[test]
fn test_disabled_alerts_bypass_everything() {
    let tasks = vec![task("a", "00:00"), task("b", "01:00")];
    for prev in [0, 1, 5] {
        let ev = evaluate(&tasks, at(23, 0), false, prev);
        assert!(ev.overdue_tasks.is_empty());
        assert!(!ev.should_alert);
    }
}

#[test]
fn test_should_alert_only_on_growth() {
    let three = vec![task("a", "07:00"), task("b", "08:00"), task("c", "09:00")];
    let two = &three[..2];

    // previous=2, new=2
    assert!(!evaluate(two, at(12, 0), true, 2).should_alert);
    // previous=2, new=3
    assert!(evaluate(&three, at(12, 0), true, 2).should_alert);
    // previous=3, new=1
    assert!(!evaluate(&three[..1], at(12, 0), true, 3).should_alert);
    // nothing overdue never alerts
    assert!(!evaluate(&three, at(6, 0), true, 0).should_alert);
}

#[test]
fn test_malformed_time_is_not_overdue() {
    let tasks = vec![
        task("bad1", "soon"),
        task("bad2", "25:00"),
        task("bad3", "10:75"),
        task("bad4", ""),
        task("ok", "10:00"),
    ];
    let ev = evaluate(&tasks, at(23, 59), true, 0);
    assert_eq!(ids(&ev.overdue_tasks), vec!["ok"]);
    assert!(ev.should_alert);
}

#[test]
fn test_signed_or_non_digit_parts_are_rejected() {
    for bad in ["+9:+5", "+09:05", "09:+5", "-1:00", "9:5a", "123:00", ":30", "09:"] {
        assert_eq!(hour_minute(bad), None, "{bad}");
        assert!(normalize_time(bad).is_err(), "{bad}");
    }
    assert!(!is_overdue(&task("x", "+9:+5"), NaiveTime::from_hms_opt(23, 0, 0).unwrap()));
    assert_eq!(normalize_time("9:05").unwrap(), "09:05");
}

#[test]
fn test_unpadded_time_still_parses() {
    let now = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    assert!(is_overdue(&task("a", "9:05"), now));
    assert!(!is_overdue(&task("b", "9:30"), now));
}

#[test]
fn test_evaluation_preserves_task_order() {
    let tasks = vec![task("z", "08:00"), task("a", "07:00"), task("m", "09:00")];
    let ev = evaluate(&tasks, at(12, 0), true, 0);
    assert_eq!(ids(&ev.overdue_tasks), vec!["z", "a", "m"]);
    assert_eq!(ev.count(), 3);
}
