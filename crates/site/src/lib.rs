//! Browser entry for the manufacturing planner demo.

mod catalog;
mod web_app;

pub use catalog::{demo_catalog, item_picker_config};
pub use web_app::{PlannerEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
