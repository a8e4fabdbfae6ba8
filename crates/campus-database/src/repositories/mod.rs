//! PostgreSQL repository implementations of the store traits.

pub mod dashboard;
pub mod lending;
pub mod notification;
pub mod resource;
pub mod user;

pub use dashboard::DashboardRepository;
pub use lending::LendingRepository;
pub use notification::NotificationRepository;
pub use resource::ResourceRepository;
pub use user::UserRepository;
