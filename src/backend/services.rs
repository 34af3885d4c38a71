use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ClipboardError;

static NEXT_NOTIFICATION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Short-lived toast message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed),
            title: title.into(),
            description: description.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Trips,
    Profile,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Trips => "/trips",
            AppRoute::Profile => "/profile",
        }
    }
}

pub trait Navigation {
    fn navigate_to(&self, route: AppRoute);
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_ids_increase() {
        let a = Notification::success("a", "first");
        let b = Notification::error("b", "second");
        assert!(b.id > a.id);
        assert_eq!(a.kind, NotificationKind::Success);
        assert_eq!(b.kind, NotificationKind::Error);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Trips.path(), "/trips");
        assert_eq!(AppRoute::Profile.path(), "/profile");
    }
}
