//! Repository implementations.

pub mod pg;
