//! Shared client-side state modules.
//!
//! State is split by domain (`session`, `notifications`, `attendance`) so
//! individual components can depend on small focused models. Each store is
//! an `RwSignal` provided via context from the application root.

pub mod attendance;
pub mod notifications;
pub mod session;
