//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! The registry is the single source for key dispatch, the nav bar and the help overlay.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Move focus between the two buttons of a row
    Toggle,
    /// Activate the focused button or highlighted row
    Select,
    Decide,
    Customize,
    ToggleFilters,
    ClearCuisine,
    ClearDiet,
    ClearFoodType,
    ResetCriteria,
    /// Wizard: go to step 2
    Next,
    /// Wizard: go to step 1
    Back,
    /// Wizard: close after step 2
    SaveAndReturn,
    /// Stop the running reveal
    Cancel,
    /// Close the current panel or dialog
    Dismiss,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Plain bindings accept SHIFT (terminals report `?` with it) but not
    /// CONTROL or ALT.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        if self.modifiers.is_empty() {
            !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Main card
        self.mode_bindings.insert(
            AppMode::Main,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::Toggle, "Left", "Focus Customize"),
                Keybinding::new(KeyCode::Right, KeyAction::Toggle, "Right", "Focus Decide"),
                Keybinding::new(KeyCode::Tab, KeyAction::Toggle, "Tab", "Switch button"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Press button"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Decide, "D", "Decide lunch"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Decide, "Space", "Decide lunch"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::Customize, "C", "Customize"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::ToggleFilters, "F", "Filter cuisines"),
                Keybinding::new(KeyCode::Char('1'), KeyAction::ClearCuisine, "1", "Clear cuisine"),
                Keybinding::new(KeyCode::Char('2'), KeyAction::ClearDiet, "2", "Clear diet"),
                Keybinding::new(KeyCode::Char('3'), KeyAction::ClearFoodType, "3", "Clear food type"),
                Keybinding::new(KeyCode::Char('x'), KeyAction::ResetCriteria, "X", "Clear all"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Stop deciding"),
            ],
        );

        // Cuisine filter panel
        self.mode_bindings.insert(
            AppMode::Filters,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous cuisine"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next cuisine"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Apply"),
                Keybinding::new(KeyCode::Char('x'), KeyAction::ClearCuisine, "X", "Clear filter"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Decide, "D", "Decide lunch"),
                Keybinding::new(KeyCode::Char('f'), KeyAction::Dismiss, "F", "Close panel"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close panel"),
            ],
        );

        // Customize wizard, step 1
        self.mode_bindings.insert(
            AppMode::CustomizeDiet,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous diet"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next diet"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Choose diet"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Choose diet"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Next, "N", "Next"),
                Keybinding::new(KeyCode::Tab, KeyAction::Next, "Tab", "Next"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close"),
            ],
        );

        // Customize wizard, step 2
        self.mode_bindings.insert(
            AppMode::CustomizeFoodType,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous type"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next type"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Choose type"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Choose type"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Back, "Bksp", "Back"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::SaveAndReturn, "S", "Save & Return"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action. Mode bindings win over global ones.
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Main => vec![
                KeyAction::Toggle,
                KeyAction::Decide,
                KeyAction::Customize,
                KeyAction::ToggleFilters,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Filters => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::ClearCuisine,
                KeyAction::Dismiss,
            ],
            AppMode::CustomizeDiet => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Next,
                KeyAction::Dismiss,
            ],
            AppMode::CustomizeFoodType => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::SaveAndReturn,
                KeyAction::Dismiss,
            ],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown) {
                if !has_nav {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                }
                continue;
            }

            if action == KeyAction::Toggle {
                items.push(NavBarItem {
                    key_display: "Tab".to_string(),
                    action_label: "Switch".to_string(),
                });
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();
        let bindings = self.get_bindings(mode);

        let section = |title: &str, pick: &dyn Fn(KeyAction) -> bool| -> Option<HelpSection> {
            let items: Vec<(String, String)> = bindings
                .iter()
                .filter(|b| pick(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            (!items.is_empty()).then(|| HelpSection {
                title: title.to_string(),
                items,
            })
        };

        sections.extend(section("Navigation", &|a: KeyAction| {
            matches!(
                a,
                KeyAction::NavigateUp | KeyAction::NavigateDown | KeyAction::Toggle
            )
        }));

        sections.extend(section("Actions", &|a: KeyAction| {
            matches!(
                a,
                KeyAction::Select
                    | KeyAction::Decide
                    | KeyAction::Customize
                    | KeyAction::ToggleFilters
                    | KeyAction::Next
                    | KeyAction::SaveAndReturn
                    | KeyAction::Cancel
            )
        }));

        sections.extend(section("Filters", &|a: KeyAction| {
            matches!(
                a,
                KeyAction::ClearCuisine
                    | KeyAction::ClearDiet
                    | KeyAction::ClearFoodType
                    | KeyAction::ResetCriteria
            )
        }));

        sections.extend(section("General", &|a: KeyAction| {
            matches!(
                a,
                KeyAction::Back | KeyAction::Dismiss | KeyAction::Help | KeyAction::Quit
            )
        }));

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_binding_resolves() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Main, &key(KeyCode::Char('d'))),
            Some(KeyAction::Decide)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Filters, &key(KeyCode::Esc)),
            Some(KeyAction::Dismiss)
        );
    }

    #[test]
    fn test_same_key_differs_by_mode() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Main, &key(KeyCode::Char('f'))),
            Some(KeyAction::ToggleFilters)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Filters, &key(KeyCode::Char('f'))),
            Some(KeyAction::Dismiss)
        );
    }

    #[test]
    fn test_global_bindings_everywhere() {
        let ctx = KeybindingContext::new();
        for mode in [
            AppMode::Main,
            AppMode::Filters,
            AppMode::CustomizeDiet,
            AppMode::CustomizeFoodType,
        ] {
            assert_eq!(
                ctx.action_for(&mode, &key(KeyCode::Char('?'))),
                Some(KeyAction::Help)
            );
        }
    }

    #[test]
    fn test_shifted_question_mark_is_help() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.action_for(&AppMode::Main, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_ctrl_c_quits_not_customize() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(&AppMode::Main, &event), Some(KeyAction::Quit));
    }

    #[test]
    fn test_unbound_key() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.action_for(&AppMode::Main, &key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_nav_items_collapse_up_down() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::Filters);
        let nav: Vec<_> = items.iter().filter(|i| i.action_label == "Navigate").collect();
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn test_help_content_has_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Main);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "Filters", "General"]);
    }
}
