mod backend;
mod components;

use components::home_page::HomeComponent;
use components::nav_bar::NavComponent;
use components::profile_page::ProfileComponent;
use components::trips_page::TripsComponent;
use components::AppState;

use backend::PageConfig;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    HomeComponent {},
    #[route("/trips")]
    TripsComponent {},
    #[route("/profile")]
    ProfileComponent {},
}

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "TRIP_PROFILE_CONFIG";

/// Reads a JSON `PageConfig` from `TRIP_PROFILE_CONFIG`, falling back to defaults.
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> PageConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(raw) => PageConfig::from_json(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", CONFIG_ENV, e);
            PageConfig::default()
        }),
        Err(_) => PageConfig::default(),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> PageConfig {
    PageConfig::default()
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let app_state = AppState::new(config);
    use_context_provider(|| app_state);

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
