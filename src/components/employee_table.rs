//! Employee directory table.

use leptos::prelude::*;

use crate::net::types::Employee;

/// Table of employees with edit/delete row actions.
#[component]
pub fn EmployeeTable(
    employees: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="employee-table">
            {move || {
                if loading.get() {
                    return view! { <p class="employee-table__empty">"Loading employees..."</p> }
                        .into_any();
                }
                let rows = employees.get();
                if rows.is_empty() {
                    return view! { <p class="employee-table__empty">"No employees yet"</p> }
                        .into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Position"</th>
                                <th>"Phone"</th>
                                <th class="data-table__actions-head">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|emp| {
                                    let edit_id = emp.id.clone();
                                    let delete_id = emp.id.clone();
                                    view! {
                                        <tr>
                                            <td>{emp.name}</td>
                                            <td>{emp.email}</td>
                                            <td>{emp.position.unwrap_or_else(|| "-".to_owned())}</td>
                                            <td>{emp.phone.unwrap_or_else(|| "-".to_owned())}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| on_edit.run(edit_id.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| on_delete.run(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}
