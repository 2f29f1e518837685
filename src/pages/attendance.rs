//! Attendance history page with date-range filtering.

use leptos::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::components::attendance_table::AttendanceHistoryTable;
use crate::components::date_filter::DateFilter;
use crate::net::attendance as attendance_api;
use crate::state::attendance::{self, AttendanceState};
use crate::state::session::SessionState;

/// Attendance history behind the admin shell.
#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <AdminShell>
            <AttendanceHistory/>
        </AdminShell>
    }
}

#[component]
fn AttendanceHistory() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = expect_context::<RwSignal<AttendanceState>>();

    let run_filter = move |start: String, end: String| {
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let history = attendance_api::fetch_history(
                session,
                Some(start.as_str()).filter(|s| !s.is_empty()),
                Some(end.as_str()).filter(|s| !s.is_empty()),
            )
            .await;
            state.update(|s| {
                s.history = history;
                s.loading = false;
                attendance::store(s);
            });
        });
    };

    // With no cached history, load the default range on mount.
    Effect::new(move || {
        if state.get_untracked().history.is_empty() {
            run_filter(String::new(), String::new());
        }
    });

    let on_filter = Callback::new(move |(start, end): (String, String)| run_filter(start, end));

    view! {
        <div class="page attendance-page">
            <header class="page__header">
                <h1>"Attendance History"</h1>
                <DateFilter
                    on_filter=on_filter
                    loading=Signal::derive(move || state.get().loading)
                />
            </header>

            <AttendanceHistoryTable
                history=Signal::derive(move || state.get().history)
                loading=Signal::derive(move || state.get().loading)
            />
        </div>
    }
}
