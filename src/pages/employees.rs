//! Employee management page: directory table with CRUD dialogs.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::components::confirmation_modal::ConfirmationModal;
use crate::components::employee_modal::{EmployeeForm, EmployeeModal};
use crate::components::employee_table::EmployeeTable;
use crate::net::employees as employee_api;
use crate::net::types::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::state::session::SessionState;
use crate::util::validate;

/// Initial password assigned to accounts created from the console; the
/// employee is expected to change it on first sign-in.
const DEFAULT_PASSWORD: &str = "defaultPassword123";

/// Employee directory with add/edit/delete flows.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <AdminShell>
            <EmployeeDirectory/>
        </AdminShell>
    }
}

#[component]
fn EmployeeDirectory() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(true);

    let modal_open = RwSignal::new(false);
    let form = RwSignal::new(EmployeeForm::default());

    let delete_open = RwSignal::new(false);
    let to_delete = RwSignal::new(None::<Employee>);

    // Initial directory load.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let list = employee_api::fetch_employees(session).await;
            employees.set(employee_api::dedupe_by_id(list));
            loading.set(false);
        });
    });

    let on_add = move |_| {
        form.set(EmployeeForm::default());
        modal_open.set(true);
    };

    let on_edit = Callback::new(move |id: String| {
        let found = employees.get_untracked().iter().find(|e| e.id == id).cloned();
        if let Some(emp) = found {
            form.set(EmployeeForm::from_employee(&emp));
            modal_open.set(true);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let found = employees.get_untracked().iter().find(|e| e.id == id).cloned();
        if let Some(emp) = found {
            to_delete.set(Some(emp));
            delete_open.set(true);
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(emp) = to_delete.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if employee_api::delete_employee(session, &emp.id).await {
                employees.update(|list| list.retain(|e| e.id != emp.id));
            }
            to_delete.set(None);
        });
    });

    let on_submit = Callback::new(move |submitted: EmployeeForm| {
        leptos::task::spawn_local(async move {
            match submitted.id.clone() {
                Some(id) => {
                    let request = UpdateEmployeeRequest {
                        name: submitted.name.trim().to_owned(),
                        position: validate::none_if_empty(&submitted.position),
                        phone: validate::none_if_empty(&submitted.phone),
                    };
                    if let Some(updated) =
                        employee_api::update_employee(session, &id, &request).await
                    {
                        employees.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|e| e.id == id) {
                                *slot = updated;
                            }
                        });
                    }
                }
                None => {
                    let request = CreateEmployeeRequest {
                        name: submitted.name.trim().to_owned(),
                        email: submitted.email.trim().to_owned(),
                        password: DEFAULT_PASSWORD.to_owned(),
                        position: validate::none_if_empty(&submitted.position),
                        phone: validate::none_if_empty(&submitted.phone),
                    };
                    if let Some(created) = employee_api::create_employee(session, &request).await {
                        employees.update(|list| list.push(created));
                    }
                }
            }
        });
    });

    let delete_message = Signal::derive(move || {
        to_delete
            .get()
            .map(|emp| format!("Delete employee {}? This cannot be undone.", emp.name))
            .unwrap_or_default()
    });

    view! {
        <div class="page employees-page">
            <header class="page__header">
                <h1>"Employee Management"</h1>
                <button class="btn btn--primary" on:click=on_add>
                    "Add Employee"
                </button>
            </header>

            <EmployeeTable
                employees=employees.into()
                loading=loading.into()
                on_edit=on_edit
                on_delete=on_delete
            />

            <EmployeeModal open=modal_open form=form on_submit=on_submit/>

            <ConfirmationModal
                open=delete_open
                title="Delete Employee"
                message=delete_message
                confirm_label="Delete"
                on_confirm=on_confirm_delete
            />
        </div>
    }
}
