//! Generic confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm before running `on_confirm`.
#[component]
pub fn ConfirmationModal(
    open: RwSignal<bool>,
    title: &'static str,
    message: Signal<String>,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>{title}</h2>
                    <p class="dialog__message">{move || message.get()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
