//! Selection criteria
//!
//! Transient, user-controlled filter values. Criteria are plain data; the
//! engine validates them against its catalog before they are applied.

use crate::catalog::Catalog;
use crate::error::SelectionError;
use crate::types::{DietaryPreference, FoodType};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Names the individual criteria fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum CriteriaField {
    #[strum(to_string = "dietary preference", serialize = "diet")]
    DietaryPreference,
    #[strum(to_string = "food type", serialize = "food-type")]
    FoodType,
    #[strum(to_string = "cuisine")]
    Cuisine,
}

/// Current filter values. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionCriteria {
    pub dietary_preference: Option<DietaryPreference>,
    pub food_type: Option<FoodType>,
    pub cuisine: Option<String>,
}

impl SelectionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dietary_preference(mut self, diet: DietaryPreference) -> Self {
        self.dietary_preference = Some(diet);
        self
    }

    pub fn with_food_type(mut self, food_type: FoodType) -> Self {
        self.food_type = Some(food_type);
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.dietary_preference.is_none() && self.food_type.is_none() && self.cuisine.is_none()
    }

    /// Clear one field. Clearing the dietary preference also clears the food
    /// type, since a food type is only ever chosen after a diet.
    pub fn clear(&mut self, field: CriteriaField) {
        match field {
            CriteriaField::DietaryPreference => {
                self.dietary_preference = None;
                self.food_type = None;
            }
            CriteriaField::FoodType => self.food_type = None,
            CriteriaField::Cuisine => self.cuisine = None,
        }
    }

    /// Reset every field to "any"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the cuisine against the catalog's cuisine set.
    ///
    /// Diet and food type are typed, so only the cuisine can be unknown.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), SelectionError> {
        match &self.cuisine {
            Some(cuisine) if !catalog.has_cuisine(cuisine) => {
                Err(SelectionError::invalid(CriteriaField::Cuisine, cuisine.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "any lunch");
        }
        let mut parts = Vec::with_capacity(3);
        if let Some(diet) = self.dietary_preference {
            parts.push(diet.to_string());
        }
        if let Some(food_type) = self.food_type {
            parts.push(food_type.to_string());
        }
        if let Some(cuisine) = &self.cuisine {
            parts.push(cuisine.clone());
        }
        write!(f, "{}", parts.join(" / "))
    }
}

/// A partial update to `SelectionCriteria`: only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaUpdate {
    pub dietary_preference: Option<DietaryPreference>,
    pub food_type: Option<FoodType>,
    pub cuisine: Option<String>,
}

impl CriteriaUpdate {
    pub fn dietary_preference(diet: DietaryPreference) -> Self {
        Self {
            dietary_preference: Some(diet),
            ..Self::default()
        }
    }

    pub fn food_type(food_type: FoodType) -> Self {
        Self {
            food_type: Some(food_type),
            ..Self::default()
        }
    }

    pub fn cuisine(cuisine: impl Into<String>) -> Self {
        Self {
            cuisine: Some(cuisine.into()),
            ..Self::default()
        }
    }

    /// Build an update from raw strings (CLI flags, settings file).
    ///
    /// Diet and food type parse case-insensitively. Cuisine is resolved to the
    /// catalog spelling. Unknown values yield `InvalidCriteriaValue`.
    pub fn parse(
        catalog: &Catalog,
        diet: Option<&str>,
        food_type: Option<&str>,
        cuisine: Option<&str>,
    ) -> Result<Self, SelectionError> {
        let dietary_preference = diet
            .map(|raw| {
                raw.trim()
                    .parse::<DietaryPreference>()
                    .map_err(|_| SelectionError::invalid(CriteriaField::DietaryPreference, raw))
            })
            .transpose()?;

        let food_type = food_type
            .map(|raw| {
                raw.trim()
                    .parse::<FoodType>()
                    .map_err(|_| SelectionError::invalid(CriteriaField::FoodType, raw))
            })
            .transpose()?;

        let cuisine = cuisine
            .map(|raw| {
                catalog
                    .canonical_cuisine(raw)
                    .map(str::to_string)
                    .ok_or_else(|| SelectionError::invalid(CriteriaField::Cuisine, raw))
            })
            .transpose()?;

        Ok(Self {
            dietary_preference,
            food_type,
            cuisine,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.dietary_preference.is_none() && self.food_type.is_none() && self.cuisine.is_none()
    }

    /// Apply onto `criteria`.
    ///
    /// With `reset_food_type` set, choosing a different diet drops a previously
    /// chosen food type unless this same update supplies one.
    pub fn apply_to(self, criteria: &mut SelectionCriteria, reset_food_type: bool) {
        if let Some(diet) = self.dietary_preference {
            if reset_food_type && criteria.dietary_preference != Some(diet) {
                criteria.food_type = None;
            }
            criteria.dietary_preference = Some(diet);
        }
        if let Some(food_type) = self.food_type {
            criteria.food_type = Some(food_type);
        }
        if let Some(cuisine) = self.cuisine {
            criteria.cuisine = Some(cuisine);
        }
    }
}

impl From<SelectionCriteria> for CriteriaUpdate {
    fn from(criteria: SelectionCriteria) -> Self {
        Self {
            dietary_preference: criteria.dietary_preference,
            food_type: criteria.food_type,
            cuisine: criteria.cuisine,
        }
    }
}
