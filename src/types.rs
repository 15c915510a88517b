//! Type-safe domain types for the lunch decider
//!
//! Dietary preference and food type are closed sets, so they are modelled as
//! enums rather than strings. Declaration order is the canonical iteration
//! order used by the catalog and the eligible-set computation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Dietary preference chosen in step one of the customize wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum DietaryPreference {
    #[strum(to_string = "vegetarian", serialize = "veg")]
    #[serde(alias = "veg")]
    Vegetarian,
    #[strum(to_string = "non-vegetarian", serialize = "non-veg", serialize = "nonveg")]
    #[serde(alias = "non-veg", alias = "nonVeg")]
    NonVegetarian,
    #[strum(to_string = "vegan")]
    Vegan,
}

impl DietaryPreference {
    /// Human-readable label used by the terminal UI
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegan => "Vegan",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Vegetarian => "🥗",
            Self::NonVegetarian => "🍖",
            Self::Vegan => "🌱",
        }
    }

    /// All preferences in canonical order
    pub const fn all() -> &'static [Self] {
        &[Self::Vegetarian, Self::NonVegetarian, Self::Vegan]
    }
}

/// Food type chosen in step two of the customize wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FoodType {
    Healthy,
    Comfort,
}

impl FoodType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Comfort => "Comfort Food",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Healthy => "🥗",
            Self::Comfort => "🍕",
        }
    }

    /// All food types in canonical order (Healthy before Comfort)
    pub const fn all() -> &'static [Self] {
        &[Self::Healthy, Self::Comfort]
    }
}
