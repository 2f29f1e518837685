//! Root application component: context setup, session bootstrap, routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::feed::FeedSender;
use crate::pages::attendance::AttendancePage;
use crate::pages::employees::EmployeesPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::signin::SignInPage;
use crate::state::attendance;
use crate::state::notifications::NotificationsState;
use crate::state::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The persisted session and attendance cache are restored here, once,
/// before the router can render any protected subtree. All stores are
/// provided as contexts rather than globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::load());
    let notifications = RwSignal::new(NotificationsState::default());
    let attendance = RwSignal::new(attendance::load());
    let feed_sender = RwSignal::new(FeedSender::default());

    provide_context(session);
    provide_context(notifications);
    provide_context(attendance);
    provide_context(feed_sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/hris-console.css"/>
        <Title text="HRIS Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("employees"))
                    view=EmployeesPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("attendance"))
                    view=AttendancePage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("profile")) view=ProfilePage/>
            </Routes>
        </Router>
    }
}
