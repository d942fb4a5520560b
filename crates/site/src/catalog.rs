//! Embedded demo catalog and widget configuration.

use leptos::logging;
use planning_core::{Catalog, ComboboxConfig};

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");
const ITEM_PICKER_JSON: &str = include_str!("../fixtures/combobox.json");

/// Demo items and materials; an unreadable fixture yields an empty catalog.
pub fn demo_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).unwrap_or_else(|err| {
        logging::warn!("demo catalog load failed: {err}");
        Catalog::default()
    })
}

/// Item picker configuration; an invalid fixture falls back to defaults.
pub fn item_picker_config() -> ComboboxConfig {
    ComboboxConfig::from_json(ITEM_PICKER_JSON).unwrap_or_else(|err| {
        logging::warn!("item picker config load failed: {err}");
        ComboboxConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use planning_core::{calc_materials, Density, UNREGISTERED_MATERIAL_LABEL};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fixtures_parse_without_fallback() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("catalog fixture");
        assert_eq!(catalog.items.len(), 4);
        assert_eq!(catalog.materials.len(), 6);
        assert_eq!(
            catalog.item("itm-cookie").map(|item| item.density),
            Some(Density::TwoHour)
        );

        let config = ComboboxConfig::from_json(ITEM_PICKER_JSON).expect("picker fixture");
        assert_eq!(config.blur_grace_ms, 120);
        assert_eq!(config.empty_text, "No matching items");
    }

    #[test]
    fn cookie_recipe_references_an_unregistered_tin() {
        let catalog = demo_catalog();
        let cookie = catalog.item("itm-cookie").expect("cookie item");
        let rows = calc_materials(cookie, 10.0, &catalog.material_map());

        assert_eq!(rows.len(), cookie.recipe.len());
        let tin = rows
            .iter()
            .find(|row| row.material_id == "m-tin")
            .expect("tin row");
        assert_eq!(tin.material_name, UNREGISTERED_MATERIAL_LABEL);
        assert_eq!(tin.quantity_label(), "10 pcs");
    }
}
