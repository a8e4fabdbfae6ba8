//! Resource catalog entities.

pub mod model;
pub mod status;
pub mod view;

pub use model::{CreateResource, Resource};
pub use status::ResourceStatus;
pub use view::{BorrowedItem, OwnedItem, ResourceListing};
