//! Attendance history table.

use leptos::prelude::*;

use crate::state::attendance::{DayStatus, HistoryRecord};

/// Table of projected attendance days.
#[component]
pub fn AttendanceHistoryTable(
    history: Signal<Vec<HistoryRecord>>,
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="attendance-table">
            {move || {
                if loading.get() {
                    return view! { <p class="attendance-table__empty">"Loading history..."</p> }
                        .into_any();
                }
                let rows = history.get();
                if rows.is_empty() {
                    return view! {
                        <p class="attendance-table__empty">"No attendance records in this range"</p>
                    }
                        .into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Employee"</th>
                                <th>"Clock In"</th>
                                <th>"Clock Out"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|rec| {
                                    view! {
                                        <tr>
                                            <td>{rec.date}</td>
                                            <td>{rec.user.name}</td>
                                            <td>{rec.clock_in}</td>
                                            <td>{rec.clock_out}</td>
                                            <td>
                                                <span class=status_class(rec.status)>
                                                    {rec.status.label()}
                                                </span>
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

fn status_class(status: DayStatus) -> &'static str {
    match status {
        DayStatus::OnTime => "status-badge status-badge--ok",
        DayStatus::Late => "status-badge status-badge--late",
        DayStatus::Absent => "status-badge status-badge--absent",
    }
}
