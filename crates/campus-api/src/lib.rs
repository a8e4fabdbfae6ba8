//! # campus-api
//!
//! HTTP API layer for CampusShare built on Axum.
//!
//! Provides the JSON endpoints under `/api`, the `/uploads` file route,
//! middleware (CORS, logging, compression), extractors, DTOs, and the
//! mapping from [`AppError`](campus_core::AppError) to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
