//! In-memory store backing tests and the `memory://` development mode.

pub mod store;

pub use store::MemoryStore;
