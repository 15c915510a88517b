//! Error handling module for the lunch decider
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The engine reports `SelectionError`, catalog construction reports
//! `CatalogError`, and the terminal UI reports `LunchError`.

use crate::criteria::CriteriaField;
use crate::types::{DietaryPreference, FoodType};
use thiserror::Error;

/// Errors signalled by the option selection engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The current criteria leave nothing to pick from
    #[error("No lunch options match {criteria}")]
    EmptySelectionPool { criteria: String },

    /// A criteria value that the catalog does not know about
    #[error("Invalid {field}: '{value}'")]
    InvalidCriteriaValue { field: CriteriaField, value: String },

    /// A reveal sequence is already running
    #[error("A selection is already in progress")]
    SelectionInProgress,
}

impl SelectionError {
    pub fn invalid(field: CriteriaField, value: impl Into<String>) -> Self {
        Self::InvalidCriteriaValue {
            field,
            value: value.into(),
        }
    }

    /// True for the recoverable "nothing matches" condition
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, Self::EmptySelectionPool { .. })
    }
}

/// Errors raised while building or loading a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no {diet} / {food_type} section")]
    MissingSection {
        diet: DietaryPreference,
        food_type: FoodType,
    },

    #[error("Catalog section {diet} / {food_type} is empty")]
    EmptySection {
        diet: DietaryPreference,
        food_type: FoodType,
    },

    #[error("Catalog section {diet} / {food_type} has an item with a blank {what}")]
    BlankField {
        diet: DietaryPreference,
        food_type: FoodType,
        what: &'static str,
    },
}

/// Main error type for the application
#[derive(Error, Debug)]
pub enum LunchError {
    /// IO errors (terminal setup, drawing, event polling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, LunchError>;
