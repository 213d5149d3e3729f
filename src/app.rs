//! Module containing concrete implementations from the [core](crate::core) module.

pub mod document;
pub mod repo;
pub mod server;
pub mod state;
