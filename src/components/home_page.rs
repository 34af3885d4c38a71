use dioxus::prelude::*;
use crate::backend::{AppRoute, Navigation};
use crate::components::platform::RouterNavigation;
use crate::components::AppState;

#[component]
pub fn HomeComponent() -> Element {
    let app_state = use_context::<AppState>();
    let nav = navigator();

    let page = app_state.page.read();
    let name = page.profile.name.clone();
    let upcoming = page.counts().upcoming;
    drop(page);

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "text-center mb-8",
                h1 { class: "text-4xl font-bold mb-2", "Plan your next trip" }
                p { class: "text-[var(--text-secondary)] text-lg",
                    "Welcome back, {name}. You have {upcoming} upcoming trip(s)."
                }
            }
            div { class: "flex justify-center gap-3",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| RouterNavigation(nav).navigate_to(AppRoute::Trips),
                    "Browse my trips"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| RouterNavigation(nav).navigate_to(AppRoute::Profile),
                    "Go to profile"
                }
            }
        }
    }
}
