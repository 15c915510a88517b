//! Header and common widget rendering
//!
//! Title bar, status line, navigation bar and the help overlay hook.

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the title line
pub struct HeaderRenderer {
    title_line: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title_line: Line::from(vec![
                Span::raw("🍴 "),
                Span::styled("Lunch Decider", Styles::title()),
            ]),
        }
    }

    /// Render the title bar with the filter toggle hint on the right
    pub fn render_header(&self, f: &mut Frame, area: Rect, mode: AppMode) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border_inactive());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(18)])
            .split(inner);

        f.render_widget(Paragraph::new(self.title_line.clone()), chunks[0]);

        let filter_style = if mode == AppMode::Filters {
            Styles::chosen()
        } else {
            Styles::button_secondary()
        };
        let hint = Line::from(vec![
            Span::styled("[f] ", Styles::nav_key()),
            Span::styled("Filter cuisines", filter_style),
        ]);
        f.render_widget(Paragraph::new(hint).alignment(Alignment::Right), chunks[1]);
    }
}

/// Render the status line
pub fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str())
        .style(Theme::severity_style(state.status_severity))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode) {
        spans.push(Span::styled(item.key_display, Styles::nav_key()));
        spans.push(Span::styled(format!(" {}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
