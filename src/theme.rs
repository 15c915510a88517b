//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles. The palette is built around
//! two accents: ketchup (titles, primary action) and mustard (secondary
//! action, highlights).
//!
//! # Usage
//! ```rust
//! use lunch_decider::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::KETCHUP);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Card background
    pub const BG_PRIMARY: Color = Color::Rgb(28, 24, 22);

    /// Result panel background
    pub const BG_RESULT: Color = Color::Rgb(44, 34, 28);

    /// Dialog backdrop
    pub const BG_DIALOG: Color = Color::Rgb(36, 30, 28);

    pub const FG_PRIMARY: Color = Color::White;

    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent: titles, the decide button, chip clear markers
    pub const KETCHUP: Color = Color::Rgb(214, 48, 49);

    /// Secondary accent: customize button, filter chips, selection marks
    pub const MUSTARD: Color = Color::Rgb(240, 180, 40);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    pub const INFO: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Colors::MUSTARD;

    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item text (for contrast on mustard bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (ketchup, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header inside panels
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn dialog_bg() -> Style {
        Style::default().bg(Colors::BG_DIALOG)
    }

    // -------------------------------------------------------------------------
    // Result Panel
    // -------------------------------------------------------------------------

    /// Placeholder text before the first pick
    pub fn result_placeholder() -> Style {
        Style::default().fg(Colors::MUSTARD)
    }

    /// Committed pick
    pub fn result_committed() -> Style {
        Style::default()
            .fg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD)
    }

    /// Intermediate pick while the reveal is spinning
    pub fn result_spinning() -> Style {
        Style::default()
            .fg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }

    // -------------------------------------------------------------------------
    // Selection Styles
    // -------------------------------------------------------------------------

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::MUSTARD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Currently chosen value (not necessarily under the cursor)
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::MUSTARD)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Primary button (decide) with focus
    pub fn button_primary_active() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_primary() -> Style {
        Style::default()
            .fg(Colors::KETCHUP)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary button (customize, back) with focus
    pub fn button_secondary_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::MUSTARD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_secondary() -> Style {
        Style::default().fg(Colors::MUSTARD)
    }

    /// Disabled button (deciding, next without a diet, ...)
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    // -------------------------------------------------------------------------
    // Status/Feedback Styles
    // -------------------------------------------------------------------------

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn info() -> Style {
        Style::default().fg(Colors::INFO)
    }

    /// Active criteria chip
    pub fn chip() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::MUSTARD)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Semantic style lookups
pub struct Theme;

impl Theme {
    pub fn severity_style(severity: Severity) -> Style {
        match severity {
            Severity::Info => Styles::info(),
            Severity::Success => Styles::success(),
            Severity::Warning => Styles::warning(),
            Severity::Error => Styles::error().add_modifier(Modifier::BOLD),
        }
    }

    /// Button style given focus and enabled state
    pub fn button_style(primary: bool, focused: bool, enabled: bool) -> Style {
        match (enabled, primary, focused) {
            (false, _, _) => Styles::button_disabled(),
            (true, true, true) => Styles::button_primary_active(),
            (true, true, false) => Styles::button_primary(),
            (true, false, true) => Styles::button_secondary_active(),
            (true, false, false) => Styles::button_secondary(),
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Main card width
    pub const CARD_WIDTH: u16 = 56;

    pub const DIALOG_WIDTH: u16 = 48;

    pub const DIALOG_HEIGHT: u16 = 14;

    /// Help overlay size as a percentage of the screen
    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_HEIGHT_PCT: u16 = 70;

    pub const NAV_BAR_HEIGHT: u16 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_ignores_focus() {
        assert_eq!(
            Theme::button_style(true, true, false),
            Theme::button_style(false, false, false)
        );
    }

    #[test]
    fn test_primary_and_secondary_differ() {
        assert_ne!(
            Theme::button_style(true, true, true),
            Theme::button_style(false, true, true)
        );
    }

    #[test]
    fn test_error_severity_is_bold() {
        let style = Theme::severity_style(Severity::Error);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
