//! Root route: forwards to the default admin section.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Redirect `/` to the employee directory.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        navigate(
            "/admin/employees",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="protected__loading">
            <p>"Loading..."</p>
        </div>
    }
}
