//! Route guard gating protected subtrees behind a restored session.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{self, SessionState};

/// Collapse a requested return path to `/` unless it is a same-origin,
/// single-leading-slash path. Anything else (`//host`, absolute URLs,
/// relative fragments) could be abused as an open redirect.
pub fn sanitize_return_path(raw: &str) -> String {
    if !raw.starts_with('/') || raw.starts_with("//") {
        return "/".to_owned();
    }
    raw.to_owned()
}

/// Build the sign-in redirect target carrying the current path, query
/// string included.
pub fn signin_redirect_target(current: &str) -> String {
    format!(
        "/signin?redirect={}",
        urlencoding::encode(&sanitize_return_path(current))
    )
}

/// Gate `children` behind a confirmed session.
///
/// Shows a loading placeholder until the persisted session has been
/// restored and, when no token is present, until one silent refresh
/// attempt has concluded. A failed attempt redirects to the sign-in page
/// with the original location as the return target. A present token
/// renders children immediately; its expiry is only discovered reactively
/// through a 401.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    // `checking` starts true so the first paint is the loading placeholder;
    // `attempted` bounds the guard to a single refresh per mount.
    let checking = RwSignal::new(true);
    let attempted = RwSignal::new(false);

    Effect::new(move || {
        let state = session.get();
        if !state.hydrated {
            return;
        }
        if state.token.is_some() {
            checking.set(false);
            return;
        }

        let pathname = location.pathname.get_untracked();
        let search = location.search.get_untracked();
        let current = if search.is_empty() {
            pathname
        } else {
            format!("{pathname}?{search}")
        };

        if attempted.get_untracked() {
            // The session was cleared after the one allowed refresh attempt
            // (a 401 whose refresh failed, or a sign-out elsewhere); the
            // credential is gone, so go straight to sign-in.
            navigate(
                &signin_redirect_target(&current),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
            return;
        }
        attempted.set(true);
        checking.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let ok = session::refresh_access_token(session).await;
            checking.set(false);
            if !ok {
                navigate(
                    &signin_redirect_target(&current),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    });

    view! {
        {move || {
            let state = session.get();
            if !state.hydrated || checking.get() {
                view! {
                    <div class="protected__loading">
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            } else if state.token.is_none() {
                ().into_any()
            } else {
                children().into_any()
            }
        }}
    }
}
