pub mod calendar;
pub mod clock;
pub mod config;
pub mod log;
pub mod monitor;
pub mod overdue;
pub mod reports;
pub mod residents;
pub mod schedule;
pub mod shift;
pub mod staff;
pub mod state;
pub mod stock;
pub mod tasks;
pub mod todos;
