//! # campus-service
//!
//! Business logic service layer for CampusShare. Each service orchestrates
//! the store traits, the blob store, and credential handling to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod dashboard;
pub mod lending;
pub mod notification;
pub mod resource;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{Dashboard, DashboardService};
pub use lending::LendingService;
pub use notification::NotificationService;
pub use resource::{Download, NewResource, ResourceService};
pub use user::{RegisterUser, UserService};
