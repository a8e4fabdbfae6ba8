//! # campus-database
//!
//! PostgreSQL connection management, the store traits the services depend
//! on, their PostgreSQL repository implementations, and an in-memory store
//! with the same behavior.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{
    DashboardStore, LendingStore, NotificationLedger, ResolvedRequest, ResourceStore, Stores,
    UserStore,
};
