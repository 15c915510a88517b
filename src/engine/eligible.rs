//! Eligible set computation
//!
//! Pure function of catalog and criteria: no randomness, no state.

use crate::catalog::{Catalog, MenuItem};
use crate::criteria::SelectionCriteria;
use crate::error::SelectionError;
use crate::types::{DietaryPreference, FoodType};

/// Compute the items a selection may draw from.
///
/// - diet and food type set: that one section
/// - diet only: the diet's healthy items followed by its comfort items
/// - otherwise: every diet in canonical order, healthy before comfort
///
/// A food type without a diet does not narrow the set. The cuisine filter is
/// applied last and keeps catalog order.
///
/// # Errors
///
/// `InvalidCriteriaValue` when the cuisine is not in the catalog,
/// `EmptySelectionPool` when nothing is left after filtering.
pub fn compute_eligible_set(
    catalog: &Catalog,
    criteria: &SelectionCriteria,
) -> Result<Vec<MenuItem>, SelectionError> {
    criteria.validate(catalog)?;

    let base: Vec<&MenuItem> = match (criteria.dietary_preference, criteria.food_type) {
        (Some(diet), Some(food_type)) => catalog.items(diet, food_type).iter().collect(),
        (Some(diet), None) => diet_items(catalog, diet).collect(),
        (None, _) => DietaryPreference::all()
            .iter()
            .flat_map(|&diet| diet_items(catalog, diet))
            .collect(),
    };

    let eligible: Vec<MenuItem> = match criteria.cuisine.as_deref() {
        Some(cuisine) => base
            .into_iter()
            .filter(|item| item.cuisine == cuisine)
            .cloned()
            .collect(),
        None => base.into_iter().cloned().collect(),
    };

    if eligible.is_empty() {
        tracing::debug!(criteria = %criteria, "Eligible set is empty");
        return Err(SelectionError::EmptySelectionPool {
            criteria: criteria.to_string(),
        });
    }

    tracing::debug!(criteria = %criteria, count = eligible.len(), "Computed eligible set");
    Ok(eligible)
}

fn diet_items(catalog: &Catalog, diet: DietaryPreference) -> impl Iterator<Item = &MenuItem> {
    FoodType::all()
        .iter()
        .flat_map(move |&food_type| catalog.items(diet, food_type).iter())
}
