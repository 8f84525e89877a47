//! Overlay that hosts a create/edit form. Owns no form state.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl DialogSize {
    pub fn class(&self) -> &'static str {
        match self {
            DialogSize::Sm => "modal--sm",
            DialogSize::Md => "modal--md",
            DialogSize::Lg => "modal--lg",
            DialogSize::Xl => "modal--xl",
        }
    }
}

/// Runs `on_close` on the next tick so the overlay is not torn down
/// during its own event dispatch.
fn close_later(on_close: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        on_close.run(());
    });
}

#[component]
pub fn FormDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] size: DialogSize,
    children: ChildrenFn,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Text selection that ends outside the surface must not close the dialog
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_later(on_close);
        }
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            close_later(on_close);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div
                    class=format!("modal {}", size.class())
                    role="dialog"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{move || title.get()}</h3>
                        <button
                            class="button button--ghost modal-close"
                            title="Close"
                            on:click=move |_| close_later(on_close)
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_is_the_default_size() {
        assert_eq!(DialogSize::default(), DialogSize::Md);
        assert_eq!(DialogSize::Lg.class(), "modal--lg");
        assert_eq!(DialogSize::Sm.class(), "modal--sm");
    }
}
