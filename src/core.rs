//! The core module defines the business logic of staffdesk.
//! It provides the models, the traits adapters need to implement and the services on top of them.

pub mod document;
pub mod model;
pub mod repo;
pub mod service;
