//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, status line, nav bar and help overlay hook
//! - `screens` - Result panel, buttons, chips and cuisine filter panel
//! - `dialogs` - Customize wizard dialog

mod dialogs;
mod header;
pub mod screens;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),                             // Main content area
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT), // Navigation bar
            ])
            .split(f.area());

        let card = card_area(main_chunks[0]);
        self.render_card(f, state, card);

        header::render_nav_bar(f, state, keybinding_ctx, main_chunks[1]);

        if state.mode.is_customizing() {
            dialogs::render_customize_dialog(f, state);
        }

        // Help overlay on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_card(&self, f: &mut Frame, state: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_inactive())
            .style(Styles::panel_bg());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let filter_height = if state.mode == AppMode::Filters {
            screens::filter_panel_height(state)
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // title
                Constraint::Length(filter_height), // cuisine panel
                Constraint::Length(5),             // result
                Constraint::Length(3),             // buttons
                Constraint::Length(2),             // chips
                Constraint::Min(0),
                Constraint::Length(1),             // status
            ])
            .split(inner);

        self.header.render_header(f, chunks[0], state.mode);
        if filter_height > 0 {
            screens::render_filter_panel(f, state, chunks[1]);
        }
        screens::render_result_panel(f, state, chunks[2]);
        screens::render_buttons(f, state, chunks[3]);
        screens::render_chips(f, state, chunks[4]);
        header::render_status_bar(f, state, chunks[6]);
    }
}

/// Center the card horizontally, full height
fn card_area(area: Rect) -> Rect {
    let width = UiConstants::CARD_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
