//! Document storage implementations.

pub mod store;
