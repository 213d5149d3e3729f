//! Persistence interfaces. Implementations live in [crate::app::repo].

pub mod employee;
pub mod timesheet;
