//! Owner inbox queries over the notification ledger.

pub mod service;

pub use service::NotificationService;
