//! Overdue task evaluation.
//!
//! A task is overdue once its scheduled minute has fully passed: with the
//! clock at 10:05 a task due at 10:00 is overdue, one due at 10:05 is not.
//! Only the time of day is compared; tasks carry no date.

use crate::models::task::Task;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Result of one evaluation tick. Replaced wholesale on every tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverdueEvaluation {
    pub overdue_tasks: Vec<Task>,
    /// The overdue set grew compared to the previous tick.
    pub should_alert: bool,
}

impl OverdueEvaluation {
    pub fn count(&self) -> usize {
        self.overdue_tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overdue_tasks.is_empty()
    }
}

/// Whether `task` is overdue at `now`.
///
/// Completed tasks never are. A malformed `time` is logged and treated as
/// not overdue.
pub fn is_overdue(task: &Task, now: NaiveTime) -> bool {
    if task.is_completed {
        return false;
    }

    let Some((hour, minute)) = task.scheduled() else {
        log::warn!(
            "event=overdue_check status=skipped task_id={} time={:?} reason=malformed_time",
            task.id,
            task.time
        );
        return false;
    };

    now.hour() > hour || (now.hour() == hour && now.minute() > minute)
}

/// Evaluate `tasks` at `now`.
///
/// With `alerts_enabled == false` nothing is computed and the result is
/// empty. Otherwise `should_alert` is set iff the overdue count is strictly
/// greater than `previous_overdue_count`.
pub fn evaluate(
    tasks: &[Task],
    now: NaiveDateTime,
    alerts_enabled: bool,
    previous_overdue_count: usize,
) -> OverdueEvaluation {
    if !alerts_enabled {
        return OverdueEvaluation::default();
    }

    let at = now.time();
    let overdue_tasks: Vec<Task> = tasks
        .iter()
        .filter(|t| is_overdue(t, at))
        .cloned()
        .collect();

    let should_alert = overdue_tasks.len() > previous_overdue_count;

    OverdueEvaluation {
        overdue_tasks,
        should_alert,
    }
}
