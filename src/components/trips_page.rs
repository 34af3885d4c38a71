use dioxus::prelude::*;
use crate::components::trip_detail::{use_fresh_trip_selection, TripCard, TripDetailDialog};
use crate::components::AppState;

#[component]
pub fn TripsComponent() -> Element {
    let app_state = use_context::<AppState>();
    use_fresh_trip_selection(app_state);

    let page = app_state.page.read();
    let trips = page.trips.clone();
    let count = page.counts().all;
    drop(page);

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "Trips" }
                p { class: "text-[var(--text-secondary)]", "{count} trips" }
            }

            if trips.is_empty() {
                div { class: "empty-state py-12",
                    p { class: "empty-state-text", "No trips planned" }
                }
            } else {
                div { class: "space-y-6",
                    for trip in trips {
                        TripCard {
                            key: "{trip.id}",
                            trip: trip.clone(),
                            on_view: move |id: u32| app_state.update_page(|p| p.select_trip(id)),
                        }
                    }
                }
            }

            TripDetailDialog {}
        }
    }
}
