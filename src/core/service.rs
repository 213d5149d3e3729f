//! High level operations composing repositories and document storage.

pub mod document;
pub mod employee;
pub mod timesheet;
