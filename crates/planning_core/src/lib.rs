//! Headless planning logic shared by the planner UI crates.
//!
//! The crate owns the searchable-combobox selection reducer, the quantity/duration/timestamp
//! formatters, recipe material aggregation, and the serde-backed catalog and widget
//! configuration types. Nothing here touches the DOM; the Leptos layer in `planning_ui`
//! holds a [`SelectionState`] in a signal and executes the [`ComboEffect`] intents it emits.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod combobox;
pub mod config;
pub mod format;
pub mod model;

pub use combobox::{
    filter_options, label_for, ComboAction, ComboEffect, ComboError, ComboOption, SelectionState,
};
pub use config::{
    ComboboxConfig, ConfigError, DEFAULT_BLUR_GRACE_MS, DEFAULT_EMPTY_TEXT, MAX_BLUR_GRACE_MS,
};
pub use format::{
    calc_materials, duration_label, format_quantity, format_updated_at, format_updated_at_in,
    sum_material_rows, MaterialRow, NOT_UPDATED_LABEL, UNREGISTERED_MATERIAL_LABEL,
};
pub use model::{Catalog, Density, Item, Material, MaterialMap, ParseTagError, RecipeLine, RecipeUnit};
