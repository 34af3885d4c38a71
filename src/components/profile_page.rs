use dioxus::prelude::*;
use crate::backend::fixtures::AVATAR_IMAGE;
use crate::backend::{AppRoute, Navigation, Notifier, ProfileField, SaveError, TripTab};
use crate::components::common::{Avatar, Modal};
use crate::components::platform::{RouterNavigation, ToastNotifier};
use crate::components::trip_detail::{use_fresh_trip_selection, TripCard, TripDetailDialog};
use crate::components::AppState;

#[component]
pub fn ProfileComponent() -> Element {
    let app_state = use_context::<AppState>();
    use_fresh_trip_selection(app_state);

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            ProfileHeader {}
            StatsGrid {}
            TripHistory {}
            TripDetailDialog {}
        }
    }
}

#[component]
fn ProfileHeader() -> Element {
    let app_state = use_context::<AppState>();
    let page = app_state.page.read();
    let profile = page.profile.clone();
    let joined = page.member_since.label();
    let is_editing = page.is_editing();
    drop(page);

    let initials = profile.initials();

    rsx! {
        div { class: "panel mb-8",
            div { class: "flex items-start justify-between",
                div { class: "flex items-center gap-6",
                    div { class: "relative",
                        Avatar { src: "{AVATAR_IMAGE}", fallback: initials }
                        // Photo upload is not supported yet.
                        button {
                            class: "absolute bottom-0 right-0 btn btn-primary btn-sm rounded-full",
                            title: "Change photo",
                            disabled: true,
                            "📷"
                        }
                    }
                    div {
                        h1 { class: "page-title mb-2", "{profile.name}" }
                        p { class: "text-[var(--text-secondary)] mb-4", "{profile.bio}" }
                        div { class: "flex items-center gap-4 text-sm text-[var(--text-muted)]",
                            span { "📍 {profile.location}" }
                            span { "📅 {joined}" }
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| app_state.update_page(|p| p.open_editor()),
                    "⚙ Edit Profile"
                }
            }
        }

        if is_editing {
            EditProfileDialog {}
        }
    }
}

/// Edits a draft; nothing reaches the profile until "Save Changes".
#[component]
fn EditProfileDialog() -> Element {
    let app_state = use_context::<AppState>();
    let Some(draft) = app_state.page.read().draft.clone() else {
        return rsx! {};
    };

    let on_save = move |_| {
        let page = app_state.page.peek().clone();
        let (next, result) = page.save_profile();
        let mut page_signal = app_state.page;
        page_signal.set(next);
        match result {
            Ok(notification) => ToastNotifier::new(app_state).notify(notification),
            Err(SaveError::Invalid(errors)) => {
                tracing::debug!("{} field error(s) shown inline", errors.len());
            }
            Err(SaveError::NotEditing) => {}
        }
    };

    rsx! {
        Modal {
            title: "Edit Profile",
            on_close: move |_: ()| app_state.update_page(|p| p.cancel_edit()),

            form {
                class: "space-y-4 py-4",
                onsubmit: move |e| e.prevent_default(),

                for field in ProfileField::ALL {
                    {
                        let value = draft.data.get(field).to_string();
                        let error = draft.errors.get(field).map(|e| e.to_string());
                        let id = field.html_id();
                        let field_label = field.label();
                        let input_class = if error.is_some() { "input input-error" } else { "input" };

                        rsx! {
                            div { key: "{id}", class: "form-group",
                                label { class: "form-label", r#for: "{id}", "{field_label}" }
                                input {
                                    id: "{id}",
                                    class: "{input_class}",
                                    r#type: field.input_type(),
                                    value: "{value}",
                                    oninput: move |e| app_state.update_page(|p| p.edit_field(field, e.value())),
                                    onblur: move |_| app_state.update_page(|p| p.check_field(field)),
                                }
                                if let Some(message) = error {
                                    p { class: "form-error text-xs text-[var(--error)]", "{message}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "action-group flex justify-end gap-2",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| app_state.update_page(|p| p.cancel_edit()),
                    "Cancel"
                }
                button { class: "btn btn-primary", onclick: on_save, "Save Changes" }
            }
        }
    }
}

#[component]
fn StatCard(value: String, label: String, color: String) -> Element {
    rsx! {
        div { class: "card p-6 text-center",
            div { class: "text-3xl font-bold mb-2 {color}", "{value}" }
            div { class: "text-sm text-[var(--text-secondary)]", "{label}" }
        }
    }
}

#[component]
fn StatsGrid() -> Element {
    let app_state = use_context::<AppState>();
    let stats = app_state.page.read().stats.clone();

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-4 gap-6 mb-8",
            StatCard { value: "{stats.total_trips}", label: "Total Trips", color: "text-blue-600" }
            StatCard { value: "{stats.countries_visited}", label: "Countries Visited", color: "text-green-600" }
            StatCard { value: "{stats.total_budget}", label: "Total Spent", color: "text-amber-600" }
            StatCard { value: "{stats.favorite_destination}", label: "Favorite Region", color: "text-purple-600" }
        }
    }
}

#[component]
fn TripHistory() -> Element {
    let app_state = use_context::<AppState>();
    let nav = navigator();

    let page = app_state.page.read();
    let counts = page.counts();
    let active_tab = page.active_tab;
    let visible: Vec<_> = page.visible_trips().into_iter().cloned().collect();
    drop(page);

    let tabs: Vec<(TripTab, String)> = TripTab::ALL
        .into_iter()
        .map(|tab| (tab, tab.label(&counts)))
        .collect();

    rsx! {
        div { class: "panel",
            div { class: "panel-header flex items-center justify-between",
                h2 { class: "panel-title", "My Trips" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| RouterNavigation(nav).navigate_to(AppRoute::Home),
                    "Plan New Trip"
                }
            }

            div { class: "grid grid-cols-3 gap-2 mb-6 border-b border-[var(--border-subtle)] pb-2",
                for (tab, label) in tabs {
                    div {
                        key: "{tab:?}",
                        class: if tab == active_tab { "nav-button active cursor-pointer text-center" } else { "nav-button cursor-pointer text-center" },
                        onclick: move |_| app_state.update_page(|p| p.select_tab(tab)),
                        "{label}"
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state py-12",
                    p { class: "empty-state-text", "No trips here yet" }
                }
            } else {
                div { class: "space-y-6",
                    for trip in visible {
                        TripCard {
                            key: "{trip.id}",
                            trip: trip.clone(),
                            on_view: move |id: u32| app_state.update_page(|p| p.select_trip(id)),
                        }
                    }
                }
            }
        }
    }
}
