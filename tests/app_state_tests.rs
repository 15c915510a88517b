//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Key handling across the main card, filter panel and customize wizard
//! - The tick-driven reveal
//! - Rendering against ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lunch_decider::app::{App, AppMode, AppState, MainButton};
use lunch_decider::criteria::CriteriaUpdate;
use lunch_decider::engine::{RevealConfig, SelectionEngine};
use lunch_decider::theme::Severity;
use lunch_decider::types::{DietaryPreference, FoodType};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

fn engine() -> SelectionEngine {
    SelectionEngine::builtin()
        .with_seed(42)
        .with_reveal(RevealConfig::default().instant())
}

fn app() -> App {
    App::new(engine())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
}

fn finish_reveal(app: &mut App) {
    for _ in 0..100 {
        if !app.state().engine.is_selecting() {
            return;
        }
        app.tick(Instant::now());
    }
    panic!("reveal did not finish");
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    app.draw(&mut terminal).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_main() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Main);
    assert_eq!(state.main_focus, MainButton::Decide);
    assert!(!state.help_visible);
    assert!(!state.engine.is_selecting());
}

#[test]
fn test_app_mode_wizard_steps() {
    assert_eq!(AppMode::CustomizeDiet.next(), Some(AppMode::CustomizeFoodType));
    assert_eq!(AppMode::CustomizeFoodType.next(), None);
    assert_eq!(AppMode::CustomizeFoodType.previous(), Some(AppMode::CustomizeDiet));
    assert_eq!(AppMode::CustomizeDiet.previous(), None);
    assert_eq!(AppMode::Main.step_number(), None);
    assert!(!AppMode::Filters.is_customizing());
}

// =============================================================================
// Decide
// =============================================================================

#[test]
fn test_decide_runs_to_committed_pick() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.state().engine.is_selecting());

    finish_reveal(&mut app);

    let pick = app.state().engine.state().last_pick.clone().unwrap();
    assert_eq!(app.state().status_severity, Severity::Success);
    assert!(app.state().status_message.contains(&pick.name));
    assert_eq!(
        app.state().engine.state().current_display.as_deref(),
        Some(pick.name.as_str())
    );
}

#[test]
fn test_decide_twice_keeps_running_sequence() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    app.tick(Instant::now());
    let remaining = app.state().engine.remaining_steps();

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().engine.remaining_steps(), remaining);
    assert_eq!(app.state().status_severity, Severity::Warning);
}

#[test]
fn test_empty_pool_shown_in_status() {
    let mut engine = engine();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Comfort),
            cuisine: Some("Japanese".to_string()),
        })
        .unwrap();
    let mut app = App::new(engine);

    assert!(!press(&mut app, KeyCode::Enter));
    assert!(!app.state().engine.is_selecting());
    assert_eq!(app.state().status_severity, Severity::Error);
    assert!(app.state().status_message.contains("No lunch options match"));
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

// =============================================================================
// Customize Wizard
// =============================================================================

#[test]
fn test_wizard_full_flow() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().mode, AppMode::CustomizeDiet);

    // Next is disabled until a diet is chosen
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().mode, AppMode::CustomizeDiet);
    assert_eq!(app.state().status_severity, Severity::Warning);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.state().engine.criteria().dietary_preference,
        Some(DietaryPreference::NonVegetarian)
    );

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().mode, AppMode::CustomizeFoodType);

    // Save & Return is disabled until a food type is chosen
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().mode, AppMode::CustomizeFoodType);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));

    assert_eq!(app.state().mode, AppMode::Main);
    assert_eq!(app.state().engine.criteria().food_type, Some(FoodType::Comfort));
    assert_eq!(app.state().status_severity, Severity::Success);
}

#[test]
fn test_wizard_back_returns_to_diet_step() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, AppMode::CustomizeFoodType);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.state().mode, AppMode::CustomizeDiet);
}

#[test]
fn test_wizard_new_diet_resets_food_type() {
    let mut engine = engine();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegetarian),
            food_type: Some(FoodType::Healthy),
            cuisine: None,
        })
        .unwrap();
    let mut app = App::new(engine);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.state().diet_cursor, 0);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.state().engine.criteria().dietary_preference,
        Some(DietaryPreference::Vegan)
    );
    assert_eq!(app.state().engine.criteria().food_type, None);
}

#[test]
fn test_wizard_escape_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Main);
}

// =============================================================================
// Cuisine Filter Panel and Chips
// =============================================================================

#[test]
fn test_filter_panel_select_and_clear() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.state().mode, AppMode::Filters);
    assert_eq!(app.state().cuisine_cursor, 0);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.state().engine.criteria().cuisine.as_deref(),
        Some("Mediterranean")
    );

    // "Any cuisine" row clears the filter
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().engine.criteria().cuisine, None);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::Main);
}

#[test]
fn test_filter_cursor_clamped() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    for _ in 0..50 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.state().cuisine_cursor, app.state().cuisine_rows() - 1);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().engine.criteria().cuisine.as_deref(), Some("Mexican"));
}

#[test]
fn test_chip_keys_clear_fields() {
    let mut engine = engine();
    engine
        .set_criteria(CriteriaUpdate {
            dietary_preference: Some(DietaryPreference::Vegan),
            food_type: Some(FoodType::Healthy),
            cuisine: Some("International".to_string()),
        })
        .unwrap();
    let mut app = App::new(engine);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().engine.criteria().food_type, None);
    assert!(app.state().engine.criteria().dietary_preference.is_some());

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.state().engine.criteria().cuisine, None);

    press(&mut app, KeyCode::Char('2'));
    assert!(app.state().engine.criteria().is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_main_card() {
    let app = app();
    let screen = render(&app);
    assert!(screen.contains("Lunch Decider"));
    assert!(screen.contains("Roll the dice"));
    assert!(screen.contains("Customize"));
    assert!(screen.contains("Decide Lunch!"));
}

#[test]
fn test_render_deciding_label() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    let screen = render(&app);
    assert!(screen.contains("Deciding..."));
}

#[test]
fn test_render_chips_and_filter_panel() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Filter by Cuisine"));
    assert!(screen.contains("Any cuisine"));
    assert!(screen.contains("Cuisine: Mediterranean"));
}

#[test]
fn test_render_wizard_and_help() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    let screen = render(&app);
    assert!(screen.contains("Choose Your Diet"));
    assert!(screen.contains("Step 1 of 2"));
    assert!(screen.contains("Vegetarian"));

    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app);
    assert!(screen.contains("Lunch Decider Help"));
}
