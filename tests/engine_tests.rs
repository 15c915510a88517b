//! Tests for the Option Selection Engine
//!
//! These tests verify:
//! - Catalog completeness
//! - Eligible-set filtering (diet, food type, cuisine)
//! - Empty-pool signaling
//! - Reveal sequence length, termination and uniformity
//! - Re-entrancy guard and the diet-change reset convention

use lunch_decider::catalog::{Catalog, MenuItem};
use lunch_decider::criteria::{CriteriaField, CriteriaUpdate, SelectionCriteria};
use lunch_decider::engine::{
    compute_eligible_set, draw, run_selection, RevealConfig, SelectionEngine, DEFAULT_REVEAL_STEPS,
};
use lunch_decider::error::SelectionError;
use lunch_decider::types::{DietaryPreference, FoodType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_catalog_every_pair_non_empty() {
    let catalog = Catalog::builtin();
    for diet in DietaryPreference::all() {
        for food_type in FoodType::all() {
            assert!(
                !catalog.items(*diet, *food_type).is_empty(),
                "{} / {} is empty",
                diet,
                food_type
            );
        }
    }
}

#[test]
fn test_catalog_cuisines_stable_across_calls() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.cuisines(), catalog.cuisines());
    assert_eq!(catalog.cuisines().len(), 9);
}

// =============================================================================
// Eligible Set
// =============================================================================

#[test]
fn test_vegetarian_healthy_exact_items_in_order() {
    let criteria = SelectionCriteria::new()
        .with_dietary_preference(DietaryPreference::Vegetarian)
        .with_food_type(FoodType::Healthy);

    let eligible = compute_eligible_set(Catalog::builtin(), &criteria).unwrap();

    assert_eq!(
        names(&eligible),
        vec![
            "Greek Salad",
            "Quinoa Buddha Bowl",
            "Roasted Vegetable Wrap",
            "Lentil Soup",
            "Steamed Vegetable Dumplings",
        ]
    );
    assert!(!names(&eligible).contains(&"Grilled Chicken Salad"));
}

#[test]
fn test_cuisine_only_spans_whole_catalog() {
    let criteria = SelectionCriteria::new().with_cuisine("Japanese");
    let eligible = compute_eligible_set(Catalog::builtin(), &criteria).unwrap();

    assert_eq!(names(&eligible), vec!["Tuna Poke Bowl", "Raw Veggie Sushi Rolls"]);
    assert!(eligible.iter().all(|item| item.cuisine == "Japanese"));
}

#[test]
fn test_diet_only_includes_both_food_types() {
    let criteria = SelectionCriteria::new().with_dietary_preference(DietaryPreference::Vegan);
    let eligible = compute_eligible_set(Catalog::builtin(), &criteria).unwrap();

    assert_eq!(eligible.len(), 10);
    assert_eq!(eligible[0].name, "Acai Bowl");
    assert_eq!(eligible[9].name, "Black Bean Tacos");
}

#[test]
fn test_no_criteria_is_whole_catalog() {
    let eligible = compute_eligible_set(Catalog::builtin(), &SelectionCriteria::default()).unwrap();
    assert_eq!(eligible.len(), 30);
}

#[test]
fn test_food_type_without_diet_does_not_narrow() {
    let criteria = SelectionCriteria::new().with_food_type(FoodType::Comfort);
    let eligible = compute_eligible_set(Catalog::builtin(), &criteria).unwrap();
    assert_eq!(eligible.len(), 30);
}

#[test]
fn test_empty_pool_signaled() {
    let criteria = SelectionCriteria::new()
        .with_dietary_preference(DietaryPreference::Vegan)
        .with_food_type(FoodType::Comfort)
        .with_cuisine("Japanese");

    let err = compute_eligible_set(Catalog::builtin(), &criteria).unwrap_err();
    assert!(matches!(err, SelectionError::EmptySelectionPool { .. }));
}

#[test]
fn test_engine_refuses_to_select_from_empty_pool() {
    let mut engine = SelectionEngine::builtin().with_seed(3);
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Comfort),
            cuisine: Some("Japanese".to_string()),
        })
        .unwrap();

    assert!(engine.start_selection().unwrap_err().is_empty_pool());
    assert!(engine.run_to_completion().unwrap_err().is_empty_pool());
    assert!(!engine.is_selecting());
    assert!(engine.state().current_display.is_none());
    assert!(engine.state().last_pick.is_none());
}

#[test]
fn test_unknown_cuisine_rejected_by_eligible_set() {
    let criteria = SelectionCriteria::new().with_cuisine("Martian");
    let err = compute_eligible_set(Catalog::builtin(), &criteria).unwrap_err();

    assert!(matches!(
        err,
        SelectionError::InvalidCriteriaValue {
            field: CriteriaField::Cuisine,
            ..
        }
    ));
}

// =============================================================================
// Reveal Sequence
// =============================================================================

#[test]
fn test_run_emits_eleven_then_terminates() {
    let mut engine = SelectionEngine::builtin().with_seed(1);
    engine.start_selection().unwrap();
    assert!(engine.is_selecting());

    let mut emitted = Vec::new();
    while let Some(step) = engine.advance() {
        emitted.push(step);
    }

    assert_eq!(emitted.len(), DEFAULT_REVEAL_STEPS);
    assert!(emitted.last().unwrap().is_final());
    assert!(!engine.is_selecting());
    assert_eq!(
        engine.state().last_pick.as_ref(),
        Some(&emitted.last().unwrap().item)
    );
}

#[test]
fn test_every_step_drawn_from_eligible() {
    let mut engine = SelectionEngine::builtin().with_seed(8);
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::NonVegetarian),
            food_type: Some(FoodType::Comfort),
            cuisine: None,
        })
        .unwrap();
    let eligible = engine.eligible().unwrap();

    engine.start_selection().unwrap();
    while let Some(step) = engine.advance() {
        assert!(eligible.contains(&step.item));
    }
}

#[test]
fn test_uniform_draws() {
    let pool = Catalog::builtin()
        .items(DietaryPreference::Vegan, FoodType::Comfort)
        .to_vec();
    let mut rng = StdRng::seed_from_u64(77);
    let mut counts = vec![0usize; pool.len()];
    let draws = 40_000;

    for _ in 0..draws {
        let item = draw(&pool, &mut rng).unwrap();
        counts[pool.iter().position(|p| p == item).unwrap()] += 1;
    }

    let expected = 1.0 / pool.len() as f64;
    for count in counts {
        let freq = count as f64 / draws as f64;
        assert!((freq - expected).abs() < 0.015, "{freq} vs {expected}");
    }
}

#[test]
fn test_run_selection_is_host_driven() {
    let pool = Catalog::builtin()
        .items(DietaryPreference::Vegetarian, FoodType::Comfort)
        .to_vec();
    let mut seq = run_selection(&pool, StdRng::seed_from_u64(4), 11).unwrap();

    // Nothing happens until the host pulls
    assert_eq!(seq.remaining(), 11);
    seq.next().unwrap();
    assert_eq!(seq.remaining(), 10);
}

// =============================================================================
// Re-entrancy and Cancellation
// =============================================================================

#[test]
fn test_start_while_selecting_rejected() {
    let mut engine = SelectionEngine::builtin().with_seed(21);
    engine.start_selection().unwrap();
    engine.advance();
    engine.advance();

    let display = engine.state().current_display.clone();
    let remaining = engine.remaining_steps();

    assert_eq!(engine.start_selection(), Err(SelectionError::SelectionInProgress));
    assert_eq!(engine.state().current_display, display);
    assert_eq!(engine.remaining_steps(), remaining);

    let rest: Vec<_> = std::iter::from_fn(|| engine.advance()).collect();
    assert_eq!(rest.len(), remaining);
}

#[test]
fn test_new_run_after_completion() {
    let mut engine = SelectionEngine::builtin().with_seed(2);
    engine.run_to_completion().unwrap();
    assert!(engine.start_selection().is_ok());
}

#[test]
fn test_cancel_then_restart() {
    let mut engine = SelectionEngine::builtin().with_seed(6);
    engine.start_selection().unwrap();
    engine.advance();
    assert!(engine.cancel());
    assert!(engine.state().last_pick.is_none());
    assert!(engine.start_selection().is_ok());
}

// =============================================================================
// Criteria
// =============================================================================

#[test]
fn test_new_diet_resets_food_type() {
    let mut engine = SelectionEngine::builtin();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Healthy),
            cuisine: None,
        })
        .unwrap();

    engine
        .set_criteria(CriteriaUpdate::dietary_preference(DietaryPreference::Vegetarian))
        .unwrap();

    assert_eq!(engine.criteria().food_type, None);
    assert_eq!(
        engine.criteria().dietary_preference,
        Some(DietaryPreference::Vegetarian)
    );
}

#[test]
fn test_same_diet_keeps_food_type() {
    let mut engine = SelectionEngine::builtin();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Healthy),
            cuisine: None,
        })
        .unwrap();
    engine
        .set_criteria(CriteriaUpdate::dietary_preference(DietaryPreference::Vegan))
        .unwrap();

    assert_eq!(engine.criteria().food_type, Some(FoodType::Healthy));
}

#[test]
fn test_reset_convention_can_be_disabled() {
    let mut engine = SelectionEngine::builtin().with_food_type_reset(false);
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Healthy),
            cuisine: None,
        })
        .unwrap();
    engine
        .set_criteria(CriteriaUpdate::dietary_preference(DietaryPreference::Vegetarian))
        .unwrap();

    assert_eq!(engine.criteria().food_type, Some(FoodType::Healthy));
}

#[test]
fn test_clear_diet_clears_food_type() {
    let mut engine = SelectionEngine::builtin();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Healthy),
            cuisine: Some("Japanese".to_string()),
        })
        .unwrap();

    engine.clear_criteria(CriteriaField::DietaryPreference);
    assert_eq!(engine.criteria().dietary_preference, None);
    assert_eq!(engine.criteria().food_type, None);
    assert_eq!(engine.criteria().cuisine.as_deref(), Some("Japanese"));

    engine.reset_criteria();
    assert!(engine.criteria().is_empty());
}

#[test]
fn test_unknown_cuisine_is_invalid_value() {
    let mut engine = SelectionEngine::builtin();
    let err = engine
        .set_criteria(CriteriaUpdate::cuisine("Atlantean"))
        .unwrap_err();
    assert_eq!(
        err,
        SelectionError::invalid(CriteriaField::Cuisine, "Atlantean")
    );
    assert!(engine.criteria().is_empty());
}

#[test]
fn test_instant_reveal_keeps_step_count() {
    let mut engine = SelectionEngine::builtin()
        .with_seed(12)
        .with_reveal(RevealConfig::default().instant());
    assert_eq!(engine.interval(), Duration::ZERO);
    engine.start_selection().unwrap();
    assert_eq!(engine.remaining_steps(), 11);
}
