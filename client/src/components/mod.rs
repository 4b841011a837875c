//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard views and shared chrome while reading
//! shared state from Leptos context providers.

pub mod empty_goals;
pub mod logo;
pub mod summary;
pub mod toaster;
