//! Application state definitions
//!
//! Contains the state rendered by the UI: the current mode, the selection
//! engine, cursor positions and the status line.

use crate::engine::SelectionEngine;
use crate::theme::Severity;
use crate::types::{DietaryPreference, FoodType};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Catalog, criteria and selection state
    pub engine: SelectionEngine,
    /// Status message for user feedback
    pub status_message: String,
    pub status_severity: Severity,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Focused button on the main card
    pub main_focus: MainButton,
    /// Highlighted entry in the cuisine panel (0 is "Any cuisine")
    pub cuisine_cursor: usize,
    /// Highlighted entry in wizard step 1
    pub diet_cursor: usize,
    /// Highlighted entry in wizard step 2
    pub food_type_cursor: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SelectionEngine::builtin())
    }
}

impl AppState {
    pub fn new(engine: SelectionEngine) -> Self {
        Self {
            mode: AppMode::Main,
            engine,
            status_message: "Enter: decide  c: customize  f: cuisines".to_string(),
            status_severity: Severity::Info,
            help_visible: false,
            main_focus: MainButton::Decide,
            cuisine_cursor: 0,
            diet_cursor: 0,
            food_type_cursor: 0,
        }
    }

    /// Set the status line
    pub fn set_status(&mut self, severity: Severity, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_severity = severity;
    }

    /// Diet under the wizard cursor
    pub fn highlighted_diet(&self) -> DietaryPreference {
        let all = DietaryPreference::all();
        all[self.diet_cursor.min(all.len() - 1)]
    }

    /// Food type under the wizard cursor
    pub fn highlighted_food_type(&self) -> FoodType {
        let all = FoodType::all();
        all[self.food_type_cursor.min(all.len() - 1)]
    }

    /// Cuisine under the panel cursor; `None` for the "Any cuisine" row
    pub fn highlighted_cuisine(&self) -> Option<String> {
        let cuisines = self.engine.cuisines();
        self.cuisine_cursor
            .checked_sub(1)
            .and_then(|i| cuisines.get(i))
            .map(|c| (*c).to_string())
    }

    /// Rows in the cuisine panel, including "Any cuisine"
    pub fn cuisine_rows(&self) -> usize {
        self.engine.cuisines().len() + 1
    }
}

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Result card with the Customize and Decide buttons
    Main,
    /// Cuisine filter panel open and focused
    Filters,
    /// Customize wizard, step 1
    CustomizeDiet,
    /// Customize wizard, step 2
    CustomizeFoodType,
}

impl AppMode {
    /// Next wizard step. Returns `None` outside the wizard or at the last step.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::CustomizeDiet => Some(Self::CustomizeFoodType),
            _ => None,
        }
    }

    /// Previous wizard step. Returns `None` outside the wizard or at the first step.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::CustomizeFoodType => Some(Self::CustomizeDiet),
            _ => None,
        }
    }

    pub fn is_customizing(&self) -> bool {
        matches!(self, Self::CustomizeDiet | Self::CustomizeFoodType)
    }

    /// 1-indexed wizard step for display
    pub fn step_number(&self) -> Option<usize> {
        match self {
            Self::CustomizeDiet => Some(1),
            Self::CustomizeFoodType => Some(2),
            _ => None,
        }
    }

    /// Total number of wizard steps.
    pub const WIZARD_STEPS: usize = 2;

    pub fn title(&self) -> &'static str {
        match self {
            Self::Main => "Lunch Decider",
            Self::Filters => "Filter by Cuisine",
            Self::CustomizeDiet => "Choose Your Diet",
            Self::CustomizeFoodType => "Choose Food Type",
        }
    }
}

/// Buttons on the main card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainButton {
    Customize,
    Decide,
}

impl MainButton {
    pub fn toggle(self) -> Self {
        match self {
            Self::Customize => Self::Decide,
            Self::Decide => Self::Customize,
        }
    }
}
