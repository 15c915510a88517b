//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Lunch Decider Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(mode.title().to_string(), Style::default().fg(Colors::MUSTARD)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::nav_key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(
            UiConstants::HELP_WIDTH_PCT,
            UiConstants::HELP_HEIGHT_PCT,
            parent,
        );

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_active())
            .style(Styles::dialog_bg());

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    /// Number of content lines
    pub fn line_count(&self) -> usize {
        self.content.len()
    }
}

/// Rect of `percent_x` by `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Rect of fixed size centered in `r`, clamped to fit
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_clamps() {
        let outer = Rect::new(0, 0, 20, 10);
        let inner = centered_fixed(40, 4, outer);
        assert_eq!(inner.width, 20);
        assert_eq!(inner.height, 4);
        assert_eq!(inner.y, 3);
    }

    #[test]
    fn test_centered_rect_inside_parent() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }

    #[test]
    fn test_content_lists_bindings() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Main, &ctx);
        // title, blank, current, blank, footer plus at least one section
        assert!(overlay.line_count() > 6);
    }
}
