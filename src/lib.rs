//! Lunch Decider Library
//!
//! Picks a random lunch from a fixed catalog, narrowed by dietary preference,
//! food type and cuisine, with a short "spinning" reveal before the final pick.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, MenuItem};
pub use config_file::DeciderConfig;
pub use criteria::{CriteriaField, CriteriaUpdate, SelectionCriteria};
pub use engine::{
    compute_eligible_set, run_selection, RevealConfig, RevealSequence, RevealStep,
    SelectionEngine, SelectionState,
};
pub use error::{CatalogError, LunchError, SelectionError};
pub use types::{DietaryPreference, FoodType};
