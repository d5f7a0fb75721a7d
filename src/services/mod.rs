pub mod fetch_service;
pub mod notification_service;
pub mod publish_service;

pub use fetch_service::{FetchService, DEFAULT_ENTRY_LIMIT};
pub use notification_service::{send_digest, NotificationService};
pub use publish_service::PublishService;
