//! Signed-in administrator profile page.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::net::profile as profile_api;
use crate::net::profile::{ChangePasswordRequest, UpdateProfileRequest};
use crate::state::session::{self, SessionState};
use crate::util::validate;

/// Profile view with inline editing and a change-password dialog.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AdminShell>
            <ProfileCard/>
        </AdminShell>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password_open = RwSignal::new(false);

    let begin_edit = move |_| {
        if let Some(user) = session.get_untracked().user {
            name.set(user.name);
            position.set(user.position.unwrap_or_default());
            phone.set(user.phone.unwrap_or_default());
            editing.set(true);
        }
    };

    let save = move |_| {
        if saving.get_untracked() || name.get_untracked().trim().is_empty() {
            return;
        }
        saving.set(true);

        let request = UpdateProfileRequest {
            name: name.get_untracked().trim().to_owned(),
            position: validate::none_if_empty(&position.get_untracked()),
            phone: validate::none_if_empty(&phone.get_untracked()),
        };
        leptos::task::spawn_local(async move {
            if let Some(updated) = profile_api::update_profile(session, &request).await {
                session.update(|s| s.user = Some(updated));
                session::persist(session);
                editing.set(false);
            }
            saving.set(false);
        });
    };

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    if let Some(url) = profile_api::upload_photo(session, &file).await {
                        session.update(|s| {
                            if let Some(user) = &mut s.user {
                                user.photo_url = Some(url);
                            }
                        });
                        session::persist(session);
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="page profile-page">
            <header class="page__header">
                <h1>"My Profile"</h1>
            </header>

            {move || {
                let Some(user) = session.get().user else {
                    return view! { <p class="profile-card__empty">"No profile loaded"</p> }
                        .into_any();
                };

                if editing.get() {
                    view! {
                        <div class="profile-card">
                            <label class="dialog__label">
                                "Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Position"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || position.get()
                                    on:input=move |ev| position.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Phone"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Photo"
                                <input type="file" accept="image/*" on:change=on_photo_change/>
                            </label>

                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| editing.set(false)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || saving.get()
                                    on:click=save
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="profile-card">
                            {user
                                .photo_url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <img class="profile-card__photo" src=url alt="Profile photo"/>
                                    }
                                })}
                            <dl class="profile-card__details">
                                <dt>"Name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.clone()}</dd>
                                <dt>"Position"</dt>
                                <dd>{user.position.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Phone"</dt>
                                <dd>{user.phone.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                            </dl>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| password_open.set(true)>
                                    "Change Password"
                                </button>
                                <button class="btn btn--primary" on:click=begin_edit>
                                    "Edit Profile"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <ChangePasswordModal open=password_open/>
        </div>
    }
}

/// Dialog collecting the old and new password.
#[component]
fn ChangePasswordModal(open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let close = move |_| {
        old_password.set(String::new());
        new_password.set(String::new());
        confirm.set(String::new());
        error.set(None);
        open.set(false);
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        if new_password.get_untracked().len() < 6 {
            error.set(Some("New password must be at least 6 characters".to_owned()));
            return;
        }
        if new_password.get_untracked() != confirm.get_untracked() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }

        error.set(None);
        submitting.set(true);

        let request = ChangePasswordRequest {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            let result = profile_api::change_password(session, &request).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    open.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=close>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Change Password"</h2>

                    <label class="dialog__label">
                        "Current password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "New password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Confirm new password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}

                    <div class="dialog__actions">
                        <button class="btn" on:click=close>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || submitting.get()
                            on:click=submit
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
