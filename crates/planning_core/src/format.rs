//! Display formatting for quantities, durations, and timestamps, plus recipe aggregation.

use std::{collections::HashMap, fmt};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::model::{Density, Item, MaterialMap, RecipeUnit};

/// Placeholder shown when an item has never been updated or its timestamp is unreadable.
pub const NOT_UPDATED_LABEL: &str = "Not yet updated";
/// Placeholder name for a recipe line whose material id is not registered.
pub const UNREGISTERED_MATERIAL_LABEL: &str = "Unregistered material";

const DAY_SUFFIX: &str = "d";
const HOUR_SUFFIX: &str = "h";
const UPDATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M";
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Renders `value` with at most three fractional digits and no trailing zeros.
///
/// Ties round away from zero (`0.0625` renders `"0.063"`). Non-finite input renders as `"0"`,
/// as does anything that rounds to zero.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let scaled = (value * 1000.0).round() / 1000.0;
    let rounded = if scaled.is_finite() { scaled } else { value };
    let fixed = format!("{rounded:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Renders a production length counted in `density` slots.
///
/// Day slots keep the day suffix; two-hour slots are converted to hours.
pub fn duration_label(length: f64, density: Density) -> String {
    match density {
        Density::Day => format!("{}{DAY_SUFFIX}", format_quantity(length)),
        Density::TwoHour => format!("{}{HOUR_SUFFIX}", format_quantity(length * 2.0)),
        Density::Hour => format!("{}{HOUR_SUFFIX}", format_quantity(length)),
    }
}

/// [`format_updated_at_in`] rendered in the local time zone.
pub fn format_updated_at(value: Option<&str>) -> String {
    format_updated_at_in(value, &Local)
}

/// Renders an update timestamp in `tz`, or [`NOT_UPDATED_LABEL`] when absent or unreadable.
///
/// Accepts RFC 3339, `YYYY-MM-DD[ T]HH:MM[:SS[.fff]]`, and `YYYY-MM-DD`. Values without an
/// offset are read as wall-clock time in `tz`.
pub fn format_updated_at_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    value
        .and_then(|raw| parse_timestamp(raw.trim(), tz))
        .map(|at| at.format(UPDATED_AT_FORMAT).to_string())
        .unwrap_or_else(|| NOT_UPDATED_LABEL.to_string())
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(tz));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    tz.from_local_datetime(&naive).earliest()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One computed material requirement.
pub struct MaterialRow {
    /// Material id from the recipe line.
    pub material_id: String,
    /// Resolved material name or [`UNREGISTERED_MATERIAL_LABEL`].
    pub material_name: String,
    /// Required quantity for the requested amount.
    pub quantity: f64,
    /// Unit of `quantity`.
    pub unit: RecipeUnit,
}

impl MaterialRow {
    /// Quantity with its unit symbol, e.g. `"1.25 kg"`.
    pub fn quantity_label(&self) -> String {
        format!("{} {}", format_quantity(self.quantity), self.unit.symbol())
    }
}

/// Material requirements for producing `amount` units of `item`, one row per recipe line.
///
/// `amount` is not validated; zero and negative amounts scale the recipe like any other value.
pub fn calc_materials(item: &Item, amount: f64, materials: &MaterialMap) -> Vec<MaterialRow> {
    item.recipe
        .iter()
        .map(|line| MaterialRow {
            material_id: line.material_id.clone(),
            material_name: materials
                .get(&line.material_id)
                .map(|material| material.name.clone())
                .unwrap_or_else(|| UNREGISTERED_MATERIAL_LABEL.to_string()),
            quantity: line.per_unit * amount,
            unit: line.unit,
        })
        .collect()
}

/// Merges rows that share a material and unit, keeping first-appearance order.
///
/// Used to total the requirements of a plan that produces several items.
pub fn sum_material_rows(rows: impl IntoIterator<Item = MaterialRow>) -> Vec<MaterialRow> {
    let mut merged: Vec<MaterialRow> = Vec::new();
    let mut index: HashMap<(String, RecipeUnit), usize> = HashMap::new();
    for row in rows {
        let key = (row.material_id.clone(), row.unit);
        match index.get(&key) {
            Some(&at) => merged[at].quantity += row.quantity,
            None => {
                index.insert(key, merged.len());
                merged.push(row);
            }
        }
    }
    merged
}
