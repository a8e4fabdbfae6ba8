//! Resource catalog and uploaded files.

pub mod service;

pub use service::{Download, NewResource, ResourceService};
