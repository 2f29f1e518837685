//! Employee directory REST client.
//!
//! Read failures degrade to empty lists and write failures to `None`/
//! `false` so the directory page can keep rendering whatever it has.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::RwSignal;
use serde_json::Value;

use crate::net::api::{self, Method};
use crate::net::types::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::state::session::SessionState;

/// Pull the employee list out of a response that may be a bare array or a
/// `data` envelope. Rows that do not deserialize are skipped.
pub fn employees_from_response(body: &Value) -> Vec<Employee> {
    let list = if body.is_array() {
        body
    } else {
        body.get("data").unwrap_or(body)
    };
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Drop rows with missing or duplicate ids, keeping first occurrences.
pub fn dedupe_by_id(list: Vec<Employee>) -> Vec<Employee> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter()
        .filter(|emp| !emp.id.is_empty() && seen.insert(emp.id.clone()))
        .collect()
}

/// Fetch all employees. Failures degrade to an empty list.
pub async fn fetch_employees(session: RwSignal<SessionState>) -> Vec<Employee> {
    match api::api_fetch(session, Method::Get, "/admin/employees", None).await {
        Ok(body) => employees_from_response(&body),
        Err(err) => {
            leptos::logging::warn!("failed to fetch employees: {err}");
            Vec::new()
        }
    }
}

/// Create an employee account; returns the created row when the server
/// sends one back.
pub async fn create_employee(
    session: RwSignal<SessionState>,
    request: &CreateEmployeeRequest,
) -> Option<Employee> {
    let body = serde_json::to_value(request).ok()?;
    let resp = api::api_fetch(session, Method::Post, "/admin/employees", Some(&body))
        .await
        .map_err(|err| leptos::logging::warn!("failed to create employee: {err}"))
        .ok()?;
    employee_from_response(&resp)
}

/// Update an employee row; returns the refreshed row.
pub async fn update_employee(
    session: RwSignal<SessionState>,
    id: &str,
    request: &UpdateEmployeeRequest,
) -> Option<Employee> {
    let body = serde_json::to_value(request).ok()?;
    let path = format!("/admin/employees/{id}");
    let resp = api::api_fetch(session, Method::Put, &path, Some(&body))
        .await
        .map_err(|err| leptos::logging::warn!("failed to update employee {id}: {err}"))
        .ok()?;
    employee_from_response(&resp)
}

/// Delete an employee account.
pub async fn delete_employee(session: RwSignal<SessionState>, id: &str) -> bool {
    let path = format!("/admin/employees/{id}");
    match api::api_fetch(session, Method::Delete, &path, None).await {
        Ok(_) => true,
        Err(err) => {
            leptos::logging::warn!("failed to delete employee {id}: {err}");
            false
        }
    }
}

/// Extract a single employee payload that may be bare or `data`-enveloped.
fn employee_from_response(body: &Value) -> Option<Employee> {
    let data = body.get("data").filter(|d| d.is_object()).unwrap_or(body);
    serde_json::from_value(data.clone()).ok()
}
