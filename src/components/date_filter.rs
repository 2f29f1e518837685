//! Start/end date range filter for the attendance page.

use leptos::prelude::*;

/// Two date inputs and a filter button. Empty fields mean "use the default
/// range".
#[component]
pub fn DateFilter(on_filter: Callback<(String, String)>, loading: Signal<bool>) -> impl IntoView {
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());

    view! {
        <div class="date-filter">
            <input
                class="date-filter__input"
                type="date"
                prop:value=move || start.get()
                on:input=move |ev| start.set(event_target_value(&ev))
            />
            <span class="date-filter__separator">"to"</span>
            <input
                class="date-filter__input"
                type="date"
                prop:value=move || end.get()
                on:input=move |ev| end.set(event_target_value(&ev))
            />
            <button
                class="btn btn--primary"
                disabled=move || loading.get()
                on:click=move |_| on_filter.run((start.get(), end.get()))
            >
                {move || if loading.get() { "Filtering..." } else { "Filter" }}
            </button>
        </div>
    }
}
