use dioxus::prelude::*;
use crate::components::common::ToastStack;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    // Logo section
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "TripPlanner" }
                    }

                    // Navigation links
                    div { class: "nav-links",
                        Link {
                            to: Route::HomeComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Home"
                        }
                        Link {
                            to: Route::TripsComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Trips"
                        }
                        Link {
                            to: Route::ProfileComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Profile"
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }

            ToastStack {}
        }
    }
}
