//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::protected::sanitize_return_path;
use crate::state::session::{self, SessionState};
use crate::util::{storage, validate};

/// localStorage key remembering the last-used email.
const REMEMBER_KEY: &str = "hris-admin.rememberEmail";

/// Credential form with a remembered email and a post-login redirect taken
/// from the `redirect` query parameter (sanitized before use).
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(storage::get_item(REMEMBER_KEY).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let remember = RwSignal::new(true);

    let redirect_target = move || {
        let raw = query
            .get()
            .get("redirect")
            .unwrap_or_else(|| "/".to_owned());
        sanitize_return_path(&raw)
    };

    let form_valid = move || {
        validate::email_looks_valid(email.get().trim()) && password.get().len() >= 6
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() || loading.get_untracked() {
            return;
        }

        if remember.get_untracked() {
            storage::set_item(REMEMBER_KEY, email.get_untracked().trim());
        } else {
            storage::remove_item(REMEMBER_KEY);
        }

        error.set(None);
        loading.set(true);

        let target = redirect_target();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session::sign_in(
                session,
                email.get_untracked().trim(),
                &password.get_untracked(),
            )
            .await;
            loading.set(false);
            match result {
                Ok(()) => navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="signin-page">
            <div class="signin-page__panel">
                <h1>"HRIS Admin"</h1>
                <p>"Human resources administration console"</p>
            </div>

            <main class="signin-page__form-wrap">
                <div class="signin-card">
                    <h2>"Welcome back"</h2>
                    <p class="signin-card__subtitle">"Sign in to continue"</p>

                    <form class="signin-card__form" on:submit=submit>
                        <label class="signin-card__label">
                            "Email"
                            <input
                                class="signin-card__input"
                                type="email"
                                autocomplete="username"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="signin-card__label">
                            "Password"
                            <div class="signin-card__password-row">
                                <input
                                    class="signin-card__input"
                                    autocomplete="current-password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="btn btn--small"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </label>

                        <label class="signin-card__remember">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| remember.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>

                        {move || {
                            error.get().map(|msg| view! { <div class="signin-card__error">{msg}</div> })
                        }}

                        <button
                            class="btn btn--primary signin-card__submit"
                            type="submit"
                            disabled=move || loading.get() || !form_valid()
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </main>
        </div>
    }
}
