//! HTTP server implementation.

mod api;
mod dto;
mod form;
pub mod router;
