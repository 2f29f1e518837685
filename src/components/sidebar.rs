//! Side navigation for the admin area.

use leptos::prelude::*;

/// Links to the admin sections.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <a class="sidebar__link" href="/admin/employees">
                "Employees"
            </a>
            <a class="sidebar__link" href="/admin/attendance">
                "Attendance"
            </a>
            <a class="sidebar__link" href="/admin/profile">
                "My Profile"
            </a>
        </nav>
    }
}
