//! Task book operations. Every mutation returns a new list; callers hand
//! it to the state container as a whole value.

use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskCategory, TaskDraft};
use crate::utils::id::short_id;
use crate::utils::time::normalize_time;
use chrono::NaiveDateTime;

/// Insert a task built from `draft`, keeping the list ordered by time.
pub fn add(tasks: &[Task], draft: TaskDraft) -> AppResult<(Vec<Task>, Task)> {
    let time = normalize_time(&draft.time)?;
    let id = match draft.id {
        Some(id) if tasks.iter().any(|t| t.id == id) => {
            return Err(AppError::DuplicateTask(id));
        }
        Some(id) => id,
        None => short_id(),
    };

    let task = Task {
        id,
        time,
        title: draft.title,
        description: draft.description,
        category: draft.category,
        priority: draft.priority,
        is_completed: false,
        assigned_to: draft.assigned_to,
        completed_at: None,
        resident_id: draft.resident_id,
    };

    let mut out = tasks.to_vec();
    out.push(task.clone());
    // Stable: tasks sharing a time keep insertion order.
    out.sort_by(|a, b| a.time.cmp(&b.time));

    Ok((out, task))
}

/// Mark a task done (stamping `completed_at`) or reopen it.
pub fn set_completed(
    tasks: &[Task],
    id: &str,
    done: bool,
    now: NaiveDateTime,
) -> AppResult<Vec<Task>> {
    let mut out = tasks.to_vec();
    let task = out
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;

    task.is_completed = done;
    task.completed_at = done.then(|| now.format("%Y-%m-%dT%H:%M:%S").to_string());

    Ok(out)
}

pub fn remove(tasks: &[Task], id: &str) -> AppResult<Vec<Task>> {
    if !tasks.iter().any(|t| t.id == id) {
        return Err(AppError::TaskNotFound(id.to_string()));
    }
    Ok(tasks.iter().filter(|t| t.id != id).cloned().collect())
}

pub fn filter_by_category(tasks: &[Task], category: Option<TaskCategory>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .collect()
}
