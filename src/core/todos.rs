use crate::errors::{AppError, AppResult};
use crate::models::todo::Todo;
use crate::utils::id::short_id;
use chrono::NaiveDateTime;

/// Append a todo for `staff_id`. Content is trimmed and must not be empty.
pub fn add(
    todos: &[Todo],
    staff_id: &str,
    content: &str,
    now: NaiveDateTime,
) -> AppResult<(Vec<Todo>, Todo)> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::InvalidField {
            field: "todo",
            value: "empty".to_string(),
        });
    }

    let todo = Todo {
        id: short_id(),
        content: content.to_string(),
        is_completed: false,
        staff_id: staff_id.to_string(),
        created_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
    };

    let mut out = todos.to_vec();
    out.push(todo.clone());
    Ok((out, todo))
}

pub fn toggle(todos: &[Todo], id: &str) -> AppResult<Vec<Todo>> {
    let mut out = todos.to_vec();
    let todo = out
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::TodoNotFound(id.to_string()))?;
    todo.is_completed = !todo.is_completed;
    Ok(out)
}

pub fn remove(todos: &[Todo], id: &str) -> AppResult<Vec<Todo>> {
    if !todos.iter().any(|t| t.id == id) {
        return Err(AppError::TodoNotFound(id.to_string()));
    }
    Ok(todos.iter().filter(|t| t.id != id).cloned().collect())
}

pub fn for_staff<'a>(todos: &'a [Todo], staff_id: &str) -> Vec<&'a Todo> {
    todos.iter().filter(|t| t.staff_id == staff_id).collect()
}

pub fn open_count(todos: &[Todo], staff_id: &str) -> usize {
    todos
        .iter()
        .filter(|t| t.staff_id == staff_id && !t.is_completed)
        .count()
}
