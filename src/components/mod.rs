pub mod common;
pub mod home_page;
pub mod nav_bar;
pub mod platform;
pub mod profile_page;
pub mod trip_detail;
pub mod trips_page;

use dioxus::prelude::*;
use crate::backend::{PageConfig, ProfilePage, ToastQueue};

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: Signal<ProfilePage>,
    pub toasts: Signal<ToastQueue>,
    pub config: Signal<PageConfig>,
}

impl AppState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            page: use_signal(ProfilePage::default),
            toasts: use_signal(ToastQueue::default),
            config: use_signal(|| config),
        }
    }

    /// Applies a page transition without subscribing the caller.
    pub fn update_page(&self, f: impl FnOnce(ProfilePage) -> ProfilePage) {
        let mut page = self.page;
        let next = f(page.peek().clone());
        page.set(next);
    }
}

/// Drives a `VirtualDom` for a while so spawned tasks and effects get to run.
#[cfg(test)]
pub(crate) async fn run_for(dom: &mut dioxus::dioxus_core::VirtualDom, duration: std::time::Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::Instant::now() < deadline {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(10), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }
}
