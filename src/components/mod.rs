//! Reusable UI components for the admin console.

pub mod admin_shell;
pub mod attendance_table;
pub mod confirmation_modal;
pub mod date_filter;
pub mod employee_modal;
pub mod employee_table;
pub mod nav_bar;
pub mod notification_panel;
pub mod protected;
pub mod sidebar;
