//! Leptos components for the manufacturing planner built on `planning_core`.
//!
//! [`SearchableCombobox`] drives a [`planning_core::SelectionState`] held in a signal and
//! executes the reducer's effects (caller notification, blur grace timer). The remaining
//! components are thin views over the core formatters and the shared primitive set.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod combobox;
mod login;
mod materials;

pub use combobox::SearchableCombobox;
pub use login::{LoginCredentials, LoginScreen};
pub use materials::{DurationBadge, MaterialBreakdown, UpdatedAtBadge};
