//! Browser/router implementations of the page services.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus::dioxus_core::spawn_forever;
use dioxus::router::Navigator;
use serde::Deserialize;

use crate::backend::{AppRoute, Clipboard, ClipboardError, Navigation, Notification, Notifier};
use crate::components::AppState;
use crate::Route;

pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Home => Route::HomeComponent {},
            AppRoute::Trips => Route::TripsComponent {},
            AppRoute::Profile => Route::ProfileComponent {},
        }
    }
}

pub struct RouterNavigation(pub Navigator);

impl Navigation for RouterNavigation {
    fn navigate_to(&self, route: AppRoute) {
        tracing::info!("Navigating to {}", route.path());
        self.0.push(Route::from(route));
    }
}

/// Pushes toasts into the shared queue and removes each one after the
/// configured duration. The dismiss timer runs in the root scope so it
/// outlives the component that raised the toast.
pub struct ToastNotifier {
    app_state: AppState,
}

impl ToastNotifier {
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let config = self.app_state.config.peek().clone();
        let mut toasts = self.app_state.toasts;
        let id = notification.id;

        let queue = toasts.peek().clone();
        toasts.set(queue.push(notification, config.max_toasts));

        let _ = spawn_forever(async move {
            sleep(config.toast_duration()).await;
            let queue = toasts.peek().clone();
            toasts.set(queue.dismiss(id));
        });
    }
}

#[derive(Debug, Deserialize)]
struct ClipboardReply {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

const CLIPBOARD_SCRIPT: &str = r#"
    const text = await dioxus.recv();
    if (!navigator.clipboard || !navigator.clipboard.writeText) {
        dioxus.send({ ok: false, error: "unavailable" });
    } else {
        try {
            await navigator.clipboard.writeText(text);
            dioxus.send({ ok: true });
        } catch (e) {
            const denied = e && e.name === "NotAllowedError";
            dioxus.send({ ok: false, error: denied ? "denied" : String(e) });
        }
    }
"#;

/// `navigator.clipboard.writeText`, awaited.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut eval = document::eval(CLIPBOARD_SCRIPT);
        eval.send(text.to_string())
            .map_err(|e| ClipboardError::Failed(format!("{:?}", e)))?;

        let reply = eval
            .recv::<ClipboardReply>()
            .await
            .map_err(|e| ClipboardError::Failed(format!("{:?}", e)))?;

        match reply {
            ClipboardReply { ok: true, .. } => Ok(()),
            ClipboardReply { error, .. } => Err(match error.as_deref() {
                Some("denied") => ClipboardError::Denied,
                Some("unavailable") => ClipboardError::Unavailable,
                Some(other) => ClipboardError::Failed(other.to_string()),
                None => ClipboardError::Failed("unknown error".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PageConfig;
    use crate::components::run_for;
    use dioxus::dioxus_core::VirtualDom;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static QUEUED: AtomicUsize = AtomicUsize::new(0);
    static MOST_QUEUED: AtomicUsize = AtomicUsize::new(0);

    fn toast_root() -> Element {
        let app_state = AppState::new(PageConfig {
            toast_duration_ms: 20,
            max_toasts: 3,
        });
        use_context_provider(|| app_state);
        let show = use_signal(|| true);
        use_context_provider(|| show);

        let queued = app_state.toasts.read().iter().count();
        QUEUED.store(queued, Ordering::SeqCst);
        MOST_QUEUED.fetch_max(queued, Ordering::SeqCst);

        rsx! {
            if show() {
                SavesThenLeaves {}
            }
        }
    }

    #[component]
    fn SavesThenLeaves() -> Element {
        let app_state = use_context::<AppState>();
        let mut show = use_context::<Signal<bool>>();
        use_effect(move || {
            ToastNotifier::new(app_state).notify(Notification::success(
                "Profile Updated",
                "Your profile has been successfully updated.",
            ));
            show.set(false);
        });
        rsx! { p { "saving" } }
    }

    #[tokio::test]
    async fn test_toast_dismissed_after_raiser_unmounts() {
        let mut dom = VirtualDom::new(toast_root);
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_millis(300)).await;

        assert_eq!(MOST_QUEUED.load(Ordering::SeqCst), 1);
        assert_eq!(QUEUED.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_app_routes_map_to_router_routes() {
        assert!(Route::from(AppRoute::Home) == Route::HomeComponent {});
        assert!(Route::from(AppRoute::Trips) == Route::TripsComponent {});
        assert!(Route::from(AppRoute::Profile) == Route::ProfileComponent {});
    }
}
