//! Add/edit employee dialog.

use leptos::prelude::*;

use crate::net::types::Employee;
use crate::util::validate;

/// Values collected by the employee form. A present `id` means the dialog
/// is editing an existing row rather than creating one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub position: String,
    pub phone: String,
}

impl EmployeeForm {
    /// Prefill the form from an existing row.
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            id: Some(emp.id.clone()),
            name: emp.name.clone(),
            email: emp.email.clone(),
            position: emp.position.clone().unwrap_or_default(),
            phone: emp.phone.clone().unwrap_or_default(),
        }
    }

    /// Validation message, or `None` when the form is submittable.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Name is required");
        }
        if self.email.trim().is_empty() {
            return Some("Email is required");
        }
        if !validate::email_looks_valid(self.email.trim()) {
            return Some("Email address is not valid");
        }
        None
    }
}

/// Dialog for adding or editing an employee.
#[component]
pub fn EmployeeModal(
    open: RwSignal<bool>,
    form: RwSignal<EmployeeForm>,
    on_submit: Callback<EmployeeForm>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let cancel = move |_| {
        error.set(None);
        open.set(false);
    };

    let submit = move |_| {
        let current = form.get_untracked();
        if let Some(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        open.set(false);
        on_submit.run(current);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=cancel>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>
                        {move || if form.get().id.is_some() { "Edit Employee" } else { "Add Employee" }}
                    </h2>

                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || form.get().email
                            // Email is the account identifier; it cannot be
                            // edited after creation.
                            disabled=move || form.get().id.is_some()
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Position"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().position
                            on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().phone
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}

                    <div class="dialog__actions">
                        <button class="btn" on:click=cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=submit>
                            {move || if form.get().id.is_some() { "Update" } else { "Add" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
