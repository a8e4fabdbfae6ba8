//! Borrow-request notification entities.

pub mod model;
pub mod status;
pub mod view;

pub use model::{CreateNotification, Notification};
pub use status::NotificationStatus;
pub use view::NotificationView;
