use dioxus::prelude::*;
use crate::backend::NotificationKind;
use crate::components::AppState;

/// Overlay dialog. Clicking the backdrop, the close button or pressing
/// Escape calls `on_close`.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default = "sm:max-w-[425px]".to_string())] width_class: String,
    header_action: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-[100] bg-black/60 backdrop-blur-sm flex items-center justify-center animate-fade-in",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "panel w-full {width_class} max-h-[80vh] overflow-y-auto animate-scale-in",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "panel-header flex items-center justify-between",
                    h2 { class: "panel-title", "{title}" }
                    div { class: "flex items-center gap-2",
                        {header_action}
                        button {
                            class: "btn btn-ghost btn-sm",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn Avatar(src: String, fallback: String) -> Element {
    let mut failed = use_signal(|| false);

    rsx! {
        div { class: "w-24 h-24 rounded-full overflow-hidden bg-[var(--bg-surface)] flex items-center justify-center",
            if failed() {
                span { class: "text-2xl font-semibold", "{fallback}" }
            } else {
                img {
                    src: "{src}",
                    alt: "Profile",
                    class: "w-full h-full object-cover",
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}

#[component]
pub fn ToastStack() -> Element {
    let app_state = use_context::<AppState>();
    let toasts = app_state.toasts.read().clone();
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed bottom-4 right-4 z-[200] flex flex-col gap-2 w-80",
            for toast in toasts.iter() {
                {
                    let id = toast.id;
                    let kind_class = match toast.kind {
                        NotificationKind::Success => "toast toast-success",
                        NotificationKind::Error => "toast toast-error",
                    };
                    let title = toast.title.clone();
                    let description = toast.description.clone();
                    let mut toasts_signal = app_state.toasts;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "{kind_class} animate-fade-in",
                            role: "status",
                            div { class: "flex justify-between items-start gap-2",
                                div {
                                    p { class: "font-semibold text-sm", "{title}" }
                                    p { class: "text-xs text-[var(--text-secondary)]", "{description}" }
                                }
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    aria_label: "Dismiss",
                                    onclick: move |_| {
                                        let queue = toasts_signal.peek().clone();
                                        toasts_signal.set(queue.dismiss(id));
                                    },
                                    "✕"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
