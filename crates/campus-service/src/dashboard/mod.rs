//! Per-user dashboard projections.

pub mod service;

pub use service::{Dashboard, DashboardService};
