//! Top navigation bar: brand, notification bell, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirmation_modal::ConfirmationModal;
use crate::components::notification_panel::NotificationPanel;
use crate::state::notifications::NotificationsState;
use crate::state::session::{self, SessionState};

/// Sticky top bar shown on every admin page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    let panel_open = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);

    let unread = move || notifications.get().unread_count;

    let on_sign_out = Callback::new(move |()| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::sign_out(session).await;
            navigate(
                "/signin",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    });

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                <span class="nav-bar__logo">"H"</span>
                <span class="nav-bar__title">"HRIS Admin"</span>
            </a>

            <span class="nav-bar__spacer"></span>

            <div class="nav-bar__bell">
                <button
                    class="btn btn--icon"
                    title="Notifications"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        panel_open.update(|open| *open = !*open);
                    }
                >
                    <svg class="nav-bar__icon" viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M10 2a5 5 0 0 0-5 5v3l-1.5 3h13L15 10V7a5 5 0 0 0-5-5z"></path>
                        <path d="M8 15a2 2 0 0 0 4 0"></path>
                    </svg>
                </button>
                <Show when=move || (unread() > 0)>
                    <span class="nav-bar__badge">{unread}</span>
                </Show>
                <Show when=move || panel_open.get()>
                    <div class="nav-bar__dropdown" on:click=move |ev| ev.stop_propagation()>
                        <NotificationPanel/>
                    </div>
                </Show>
            </div>

            <button
                class="btn btn--icon"
                title="Sign out"
                on:click=move |_| confirm_open.set(true)
            >
                <svg class="nav-bar__icon" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M7 3h6v2H9v10h4v2H7V3z"></path>
                    <path d="M12 10h6m-3-3 3 3-3 3"></path>
                </svg>
            </button>
        </header>

        <ConfirmationModal
            open=confirm_open
            title="Sign out"
            message=Signal::derive(|| "Are you sure you want to sign out?".to_owned())
            confirm_label="Sign out"
            on_confirm=on_sign_out
        />
    }
}
