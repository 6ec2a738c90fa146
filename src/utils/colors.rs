/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::task::TaskPriority;

/// Task state color:
/// completed → grey
/// overdue → red
/// pending → reset
pub fn color_for_task(completed: bool, overdue: bool) -> &'static str {
    if completed {
        GREY
    } else if overdue {
        RED
    } else {
        RESET
    }
}

pub fn color_for_priority(p: TaskPriority) -> &'static str {
    match p {
        TaskPriority::Low => GREY,
        TaskPriority::Medium => RESET,
        TaskPriority::High => YELLOW,
        TaskPriority::Urgent => MAGENTA,
    }
}

/// Calendar cell color: Sunday red, Saturday blue, padding days grey.
pub fn color_for_day(sunday_index: u32, is_padding: bool) -> &'static str {
    if is_padding {
        GREY
    } else {
        match sunday_index {
            0 => RED,
            6 => BLUE,
            _ => RESET,
        }
    }
}

/// Wrap a value in a color and reset afterwards.
pub fn paint(color: &str, value: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
