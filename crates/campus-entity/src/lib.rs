//! # campus-entity
//!
//! Domain entity models for CampusShare. Every struct in this crate
//! represents a database table row, a read-side projection over several
//! tables, or a domain value object. Database entities derive
//! `sqlx::FromRow`.
//!
//! The [`lending`] module holds the resource lending state machine. It is
//! pure: it decides transitions and the persistence layer applies them.

pub mod lending;
pub mod notification;
pub mod resource;
pub mod user;
