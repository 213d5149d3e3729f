//! Defines application business models.

pub mod document;
pub mod employee;
pub mod timesheet;
