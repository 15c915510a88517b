//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, MainButton)
//! - Main module - App struct and event loop
//!
//! The reveal is driven from the event loop: after a selection starts, the
//! poll timeout shrinks to the time left until the next step is due and
//! `tick` advances the engine once per interval.

mod state;

pub use state::{AppMode, AppState, MainButton};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::criteria::{CriteriaField, CriteriaUpdate};
use crate::engine::SelectionEngine;
use crate::error::Result;
use crate::theme::Severity;
use crate::types::{DietaryPreference, FoodType};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll timeout while no reveal is running
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// When the next reveal step is due; `None` while idle
    next_tick: Option<Instant>,
}

impl App {
    pub fn new(engine: SelectionEngine) -> Self {
        Self {
            state: AppState::new(engine),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            next_tick: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.draw(terminal)?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event) {
                            break;
                        }
                    }
                    // Resize is picked up by the next draw
                    _ => {}
                }
            }

            self.tick(Instant::now());
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Render one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &self.keybinding_context)
        })?;
        Ok(())
    }

    /// How long the event loop may block before the next reveal step
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_tick
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
            .min(IDLE_POLL)
    }

    /// Advance the reveal if a step is due
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.next_tick else {
            return;
        };
        if now < due {
            return;
        }

        match self.state.engine.advance() {
            Some(step) if step.is_final() => {
                self.next_tick = None;
                self.state.set_status(
                    Severity::Success,
                    format!("Lunch is decided: {} ({})", step.item.name, step.item.cuisine),
                );
            }
            Some(_) => {
                self.next_tick = Some(now + self.state.engine.interval());
            }
            None => {
                self.next_tick = None;
            }
        }
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Help overlay swallows everything except its close keys
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return false;
        }

        let mode = self.state.mode;
        let Some(action) = self.keybinding_context.action_for(&mode, &key_event) else {
            return false;
        };
        debug!(?action, ?mode, "Key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            _ => match mode {
                AppMode::Main => self.handle_main_action(action, key_event.code),
                AppMode::Filters => self.handle_filters_action(action),
                AppMode::CustomizeDiet => self.handle_diet_step_action(action),
                AppMode::CustomizeFoodType => self.handle_food_type_step_action(action),
            },
        }
        false
    }

    // =========================================================================
    // Main card
    // =========================================================================

    fn handle_main_action(&mut self, action: KeyAction, code: KeyCode) {
        match action {
            KeyAction::Toggle => {
                self.state.main_focus = match code {
                    KeyCode::Left => MainButton::Customize,
                    KeyCode::Right => MainButton::Decide,
                    _ => self.state.main_focus.toggle(),
                };
            }
            KeyAction::Select => match self.state.main_focus {
                MainButton::Decide => self.decide(Instant::now()),
                MainButton::Customize => self.open_customize(),
            },
            KeyAction::Decide => self.decide(Instant::now()),
            KeyAction::Customize => self.open_customize(),
            KeyAction::ToggleFilters => self.open_filters(),
            KeyAction::ClearCuisine => self.clear_field(CriteriaField::Cuisine),
            KeyAction::ClearDiet => self.clear_field(CriteriaField::DietaryPreference),
            KeyAction::ClearFoodType => self.clear_field(CriteriaField::FoodType),
            KeyAction::ResetCriteria => {
                self.state.engine.reset_criteria();
                self.state.set_status(Severity::Info, "All filters cleared");
            }
            KeyAction::Cancel => {
                if self.state.engine.cancel() {
                    self.next_tick = None;
                    self.state.set_status(Severity::Warning, "Stopped deciding");
                }
            }
            _ => {}
        }
    }

    /// Start a reveal run
    pub fn decide(&mut self, now: Instant) {
        // The Decide button is disabled while a reveal runs
        if self.state.engine.is_selecting() {
            self.state
                .set_status(Severity::Warning, "Already deciding, hang on...");
            return;
        }

        match self.state.engine.start_selection() {
            Ok(pool) => {
                self.next_tick = Some(now + self.state.engine.interval());
                self.state.set_status(
                    Severity::Info,
                    format!("Deciding among {} option{}...", pool, if pool == 1 { "" } else { "s" }),
                );
            }
            Err(err) => {
                self.state.set_status(
                    Severity::Error,
                    format!("{}. Clear a filter (1/2/3 or x) and try again.", err),
                );
            }
        }
    }

    fn clear_field(&mut self, field: CriteriaField) {
        self.state.engine.clear_criteria(field);
        self.state
            .set_status(Severity::Info, format!("Cleared {}", field));
    }

    // =========================================================================
    // Cuisine filter panel
    // =========================================================================

    fn open_filters(&mut self) {
        let current = self.state.engine.criteria().cuisine.clone();
        self.state.cuisine_cursor = current
            .and_then(|c| self.state.engine.cuisines().iter().position(|x| *x == c))
            .map_or(0, |i| i + 1);
        self.state.mode = AppMode::Filters;
    }

    fn handle_filters_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => {
                self.state.cuisine_cursor = self.state.cuisine_cursor.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                let last = self.state.cuisine_rows() - 1;
                self.state.cuisine_cursor = (self.state.cuisine_cursor + 1).min(last);
            }
            KeyAction::Select => match self.state.highlighted_cuisine() {
                Some(cuisine) => {
                    match self
                        .state
                        .engine
                        .set_criteria(CriteriaUpdate::cuisine(cuisine.clone()))
                    {
                        Ok(()) => self
                            .state
                            .set_status(Severity::Info, format!("Cuisine: {}", cuisine)),
                        Err(err) => self.state.set_status(Severity::Error, err.to_string()),
                    }
                }
                None => self.clear_field(CriteriaField::Cuisine),
            },
            KeyAction::ClearCuisine => {
                self.state.cuisine_cursor = 0;
                self.clear_field(CriteriaField::Cuisine);
            }
            KeyAction::Decide => self.decide(Instant::now()),
            KeyAction::Dismiss => self.state.mode = AppMode::Main,
            _ => {}
        }
    }

    // =========================================================================
    // Customize wizard
    // =========================================================================

    fn open_customize(&mut self) {
        let criteria = self.state.engine.criteria();
        self.state.diet_cursor = criteria
            .dietary_preference
            .and_then(|d| DietaryPreference::all().iter().position(|x| *x == d))
            .unwrap_or(0);
        self.state.mode = AppMode::CustomizeDiet;
    }

    fn handle_diet_step_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => {
                self.state.diet_cursor = self.state.diet_cursor.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                let last = DietaryPreference::all().len() - 1;
                self.state.diet_cursor = (self.state.diet_cursor + 1).min(last);
            }
            KeyAction::Select => {
                let diet = self.state.highlighted_diet();
                self.apply(CriteriaUpdate::dietary_preference(diet));
            }
            KeyAction::Next => {
                if self.state.engine.criteria().dietary_preference.is_none() {
                    self.state
                        .set_status(Severity::Warning, "Choose a diet first");
                    return;
                }
                self.state.food_type_cursor = self
                    .state
                    .engine
                    .criteria()
                    .food_type
                    .and_then(|t| FoodType::all().iter().position(|x| *x == t))
                    .unwrap_or(0);
                if let Some(next) = self.state.mode.next() {
                    self.state.mode = next;
                }
            }
            KeyAction::Dismiss => self.state.mode = AppMode::Main,
            _ => {}
        }
    }

    fn handle_food_type_step_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => {
                self.state.food_type_cursor = self.state.food_type_cursor.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                let last = FoodType::all().len() - 1;
                self.state.food_type_cursor = (self.state.food_type_cursor + 1).min(last);
            }
            KeyAction::Select => {
                let food_type = self.state.highlighted_food_type();
                self.apply(CriteriaUpdate::food_type(food_type));
            }
            KeyAction::Back => {
                if let Some(previous) = self.state.mode.previous() {
                    self.state.mode = previous;
                }
            }
            KeyAction::SaveAndReturn => {
                if self.state.engine.criteria().food_type.is_none() {
                    self.state
                        .set_status(Severity::Warning, "Choose a food type first");
                    return;
                }
                self.state.mode = AppMode::Main;
                let message = format!("Preferences saved: {}", self.state.engine.criteria());
                self.state.set_status(Severity::Success, message);
            }
            KeyAction::Dismiss => self.state.mode = AppMode::Main,
            _ => {}
        }
    }

    fn apply(&mut self, update: CriteriaUpdate) {
        if let Err(err) = self.state.engine.set_criteria(update) {
            self.state.set_status(Severity::Error, err.to_string());
        }
    }
}
