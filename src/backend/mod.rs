pub mod config;
pub mod error;
pub mod fixtures;
pub mod page;
pub mod profile;
pub mod services;
pub mod toast;
pub mod trip;

pub use config::PageConfig;
pub use error::{ClipboardError, SaveError};
pub use page::ProfilePage;
pub use profile::ProfileField;
pub use services::{AppRoute, Clipboard, Navigation, Notification, NotificationKind, Notifier};
pub use toast::ToastQueue;
pub use trip::{Trip, TripTab};
