//! Planner domain model: items, recipe lines, materials, and the closed tag enumerations.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combobox::ComboOption;
use crate::config::ConfigError;

/// Material lookup keyed by material id.
pub type MaterialMap = HashMap<String, Material>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure to parse a runtime tag into one of the closed enumerations.
pub enum ParseTagError {
    /// The density tag is not `day`, `2hour`, or `hour`.
    #[error("unknown density `{0}`")]
    UnknownDensity(String),
    /// The recipe unit tag is not one of the supported units.
    #[error("unknown recipe unit `{0}`")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Time granularity a production length is expressed in.
pub enum Density {
    /// One slot per day.
    #[serde(rename = "day")]
    Day,
    /// One slot per two-hour block.
    #[serde(rename = "2hour")]
    TwoHour,
    /// One slot per hour.
    #[serde(rename = "hour")]
    Hour,
}

impl Density {
    /// All densities in display order.
    pub const ALL: [Self; 3] = [Self::Day, Self::TwoHour, Self::Hour];

    /// Stable wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::TwoHour => "2hour",
            Self::Hour => "hour",
        }
    }

    /// Hours covered by one slot.
    pub fn hours_per_slot(self) -> u32 {
        match self {
            Self::Day => 24,
            Self::TwoHour => 2,
            Self::Hour => 1,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Density {
    type Err = ParseTagError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|density| density.tag() == raw)
            .ok_or_else(|| ParseTagError::UnknownDensity(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Unit a recipe quantity is measured in.
pub enum RecipeUnit {
    /// Kilograms.
    Kg,
    /// Grams.
    G,
    /// Liters.
    L,
    /// Milliliters.
    Ml,
    /// Pieces.
    Pcs,
}

impl RecipeUnit {
    /// All units in display order.
    pub const ALL: [Self; 5] = [Self::Kg, Self::G, Self::L, Self::Ml, Self::Pcs];

    /// Stable wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
            Self::L => "l",
            Self::Ml => "ml",
            Self::Pcs => "pcs",
        }
    }

    /// Short label shown next to a quantity.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
            Self::L => "L",
            Self::Ml => "mL",
            Self::Pcs => "pcs",
        }
    }
}

impl fmt::Display for RecipeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for RecipeUnit {
    type Err = ParseTagError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.tag() == raw)
            .ok_or_else(|| ParseTagError::UnknownUnit(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One material requirement of an item, per produced unit.
pub struct RecipeLine {
    /// Referenced material id.
    pub material_id: String,
    /// Quantity consumed per produced unit.
    pub per_unit: f64,
    /// Unit of `per_unit`.
    pub unit: RecipeUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Registered material.
pub struct Material {
    /// Stable material id.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Manufactured item with its recipe.
pub struct Item {
    /// Stable item id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form note shown under the name in pickers.
    #[serde(default)]
    pub note: Option<String>,
    /// Recipe lines in display order.
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
    /// Production length, counted in `density` slots.
    #[serde(default)]
    pub production_length: f64,
    /// Granularity of `production_length`.
    pub density: Density,
    /// Last update timestamp as supplied by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Item {
    /// Picker option for this item; the id doubles as a search keyword.
    pub fn to_option(&self) -> ComboOption {
        ComboOption {
            value: self.id.clone(),
            label: self.name.clone(),
            description: self.note.clone(),
            keywords: Some(self.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Items and materials the planner works against.
pub struct Catalog {
    /// Registered materials.
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Manufactured items.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalog {
    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the payload is not a valid catalog, including when a
    /// density or unit tag is outside the supported set.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Material lookup keyed by id. Later duplicates win.
    pub fn material_map(&self) -> MaterialMap {
        self.materials
            .iter()
            .map(|material| (material.id.clone(), material.clone()))
            .collect()
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Picker options for every item, in catalog order.
    pub fn item_options(&self) -> Vec<ComboOption> {
        self.items.iter().map(Item::to_option).collect()
    }

    /// Picker options for every material, in catalog order.
    pub fn material_options(&self) -> Vec<ComboOption> {
        self.materials
            .iter()
            .map(|material| ComboOption::new(material.id.clone(), material.name.clone()))
            .collect()
    }
}
