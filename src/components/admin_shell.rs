//! Chrome wrapping every admin page: route guard, navbar, sidebar, and the
//! notification feed startup.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::protected::Protected;
use crate::components::sidebar::Sidebar;
use crate::net::feed::FeedSender;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;

/// Protected admin layout. Starts the notification feed the first time a
/// signed-in session renders it.
#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let sender = expect_context::<RwSignal<FeedSender>>();
    let feed_started = RwSignal::new(false);

    Effect::new(move || {
        if !session.get().is_authenticated() || feed_started.get_untracked() {
            return;
        }
        feed_started.set(true);

        #[cfg(feature = "hydrate")]
        sender.set(crate::net::feed::spawn_feed(session, notifications));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (sender, notifications);
        }
    });

    view! {
        <Protected>
            <div class="admin-shell">
                <NavBar/>
                <div class="admin-shell__body">
                    <Sidebar/>
                    <main class="admin-shell__main">{children()}</main>
                </div>
            </div>
        </Protected>
    }
}
