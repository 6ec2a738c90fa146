pub mod report;
pub mod resident;
pub mod schedule;
pub mod shift;
pub mod staff;
pub mod stock;
pub mod task;
pub mod todo;
