use dioxus::prelude::*;
use dioxus::dioxus_core::spawn_forever;
use crate::backend::{AppRoute, Navigation, Notifier, Trip};
use crate::components::common::Modal;
use crate::components::platform::{BrowserClipboard, RouterNavigation, ToastNotifier};
use crate::components::AppState;

#[component]
pub fn TripCard(trip: Trip, on_view: EventHandler<u32>) -> Element {
    let id = trip.id;
    let badge_class = trip.status.badge_class();
    let status = trip.status.label();

    rsx! {
        div { class: "list-item flex items-center gap-4 p-4 border border-[var(--border-color)] rounded-lg hover:shadow-md transition-shadow",
            img {
                src: "{trip.image}",
                alt: "{trip.destination}",
                class: "w-20 h-20 object-cover rounded-lg",
            }
            div { class: "flex-1 flex items-start justify-between",
                div {
                    h3 { class: "text-xl font-semibold mb-1", "{trip.destination}" }
                    p { class: "text-[var(--text-secondary)] mb-2", "{trip.dates}" }
                    div { class: "flex items-center gap-4 text-sm text-[var(--text-muted)]",
                        span { "{trip.attractions} attractions" }
                        span { "Budget: {trip.budget}" }
                    }
                }
                div { class: "text-right",
                    span { class: "{badge_class}", "{status}" }
                    div { class: "mt-2",
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| on_view.call(id),
                            "View Details"
                        }
                    }
                }
            }
        }
    }
}

/// Shares through the browser clipboard and reports the outcome as a toast.
/// Runs in the root scope, so leaving the page does not drop the result.
pub fn share_trip(app_state: AppState, id: u32) {
    let _ = spawn_forever(async move {
        let page = app_state.page.peek().clone();
        let notifier = ToastNotifier::new(app_state);
        match page.share_trip(id, &BrowserClipboard).await {
            Ok(notification) => notifier.notify(notification),
            Err(e) => notifier.notify(e.notification()),
        }
    });
}

/// Drops any trip selected on another page once the calling page mounts.
pub fn use_fresh_trip_selection(app_state: AppState) {
    use_effect(move || app_state.update_page(|p| p.close_trip()));
}

/// Shown while a trip is selected; closing clears the selection.
#[component]
pub fn TripDetailDialog() -> Element {
    let app_state = use_context::<AppState>();
    let nav = navigator();
    let page = app_state.page.read();

    let Some(trip) = page.selected().cloned() else {
        return rsx! {};
    };
    drop(page);

    let id = trip.id;
    let on_close = move |_: ()| app_state.update_page(|p| p.close_trip());
    let on_full_trip = move |_| {
        app_state.update_page(|p| p.close_trip());
        RouterNavigation(nav).navigate_to(AppRoute::Trips);
    };

    rsx! {
        Modal {
            title: trip.destination.clone(),
            width_class: "sm:max-w-[600px]",
            on_close: on_close,
            header_action: rsx! {
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| share_trip(app_state, id),
                    "Share"
                }
            },

            div { class: "section-stack",
                div { class: "flex items-center gap-4",
                    img {
                        src: "{trip.image}",
                        alt: "{trip.destination}",
                        class: "w-16 h-16 object-cover rounded-lg",
                    }
                    div {
                        p { class: "text-[var(--text-secondary)]", "{trip.dates}" }
                        p { class: "text-sm text-[var(--text-muted)]",
                            "{trip.attractions} attractions • Budget: {trip.budget}"
                        }
                    }
                }

                div {
                    h3 { class: "text-lg font-semibold mb-3", "Accommodations" }
                    div { class: "space-y-2",
                        for (index, stay) in trip.stays.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "card flex justify-between items-center p-3",
                                div {
                                    p { class: "font-medium", "{stay.name}" }
                                    p { class: "text-sm text-[var(--text-secondary)]", "{stay.nights} nights" }
                                }
                                p { class: "font-semibold", "{stay.price}" }
                            }
                        }
                    }
                }

                div {
                    h3 { class: "text-lg font-semibold mb-3", "Day-by-Day Itinerary" }
                    div { class: "space-y-4",
                        for plan in trip.itinerary.iter() {
                            div {
                                key: "{plan.day}",
                                class: "border-l-4 border-[var(--primary)] pl-4",
                                h4 { class: "font-medium text-[var(--primary)] mb-2", "Day {plan.day}" }
                                ul { class: "space-y-1",
                                    for activity in plan.activities.iter() {
                                        li { class: "text-sm text-[var(--text-secondary)]", "{activity}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "action-group flex gap-3",
                    button { class: "btn btn-primary flex-1", onclick: on_full_trip, "View Full Trip" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| share_trip(app_state, id),
                        "Share Trip"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PageConfig;
    use crate::components::run_for;
    use dioxus::dioxus_core::VirtualDom;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    static STILL_SELECTED: AtomicBool = AtomicBool::new(true);

    fn selected_elsewhere_root() -> Element {
        let app_state = AppState::new(PageConfig::default());
        use_context_provider(|| app_state);
        use_hook(|| app_state.update_page(|p| p.select_trip(1)));

        STILL_SELECTED.store(app_state.page.read().selected_trip.is_some(), Ordering::SeqCst);

        rsx! { NextPage {} }
    }

    #[component]
    fn NextPage() -> Element {
        let app_state = use_context::<AppState>();
        use_fresh_trip_selection(app_state);
        rsx! { p { "next page" } }
    }

    #[tokio::test]
    async fn test_selection_cleared_when_page_mounts() {
        let mut dom = VirtualDom::new(selected_elsewhere_root);
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_millis(100)).await;

        assert!(!STILL_SELECTED.load(Ordering::SeqCst));
    }
}
