//! Request handlers, one module per domain.

pub mod auth;
pub mod dashboard;
pub mod files;
pub mod health;
pub mod lending;
pub mod notification;
pub mod resource;
