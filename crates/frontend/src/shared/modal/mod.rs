use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Closes on Escape, on overlay click and on the close button.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Accent color of the modal border
    #[prop(optional, into)]
    accent: MaybeProp<String>,
    /// Ignore close requests while true (e.g. during a pending save)
    #[prop(optional, into)]
    locked: MaybeProp<bool>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let is_locked = move || locked.get().unwrap_or(false);
    let request_close = move || {
        if !is_locked() {
            on_close.run(());
        }
    };

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let border = move || {
        accent
            .get()
            .map(|color| format!("border-color: {};", color))
            .unwrap_or_default()
    };

    view! {
        <div class="modal-overlay" on:click=move |_| request_close()>
            <div class="modal" style=border on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        disabled=is_locked
                        on:click=move |_| request_close()
                    >
                        {icon("close")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
