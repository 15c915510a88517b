//! Main card screens
//!
//! The result panel, the Customize/Decide buttons, the active-criteria chips
//! and the cuisine filter panel.

use crate::app::{AppMode, AppState, MainButton};
use crate::criteria::SelectionCriteria;
use crate::engine::SelectionState;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Result panel text before the first pick
pub const PLACEHOLDER: &str = "Roll the dice to decide what's for lunch! 🎲";

/// Decide button label
pub fn decide_label(is_selecting: bool) -> &'static str {
    if is_selecting {
        "Deciding... 🎲"
    } else {
        "Decide Lunch! 🎲"
    }
}

/// Text and style for the result panel
pub fn result_text(selection: &SelectionState) -> (&str, Style) {
    match (&selection.current_display, selection.is_selecting) {
        (Some(name), true) => (name.as_str(), Styles::result_spinning()),
        (Some(name), false) => (name.as_str(), Styles::result_committed()),
        (None, _) => (PLACEHOLDER, Styles::result_placeholder()),
    }
}

/// Active criteria as `(clear key, label)` pairs, in display order
pub fn criteria_chips(criteria: &SelectionCriteria) -> Vec<(char, String)> {
    let mut chips = Vec::new();
    if let Some(cuisine) = &criteria.cuisine {
        chips.push(('1', format!("Cuisine: {} 🌎", cuisine)));
    }
    if let Some(diet) = criteria.dietary_preference {
        chips.push(('2', format!("Diet: {} {}", diet.label(), diet.emoji())));
    }
    if let Some(food_type) = criteria.food_type {
        chips.push(('3', format!("Type: {} {}", food_type.label(), food_type.emoji())));
    }
    chips
}

/// Render the result panel
pub fn render_result_panel(f: &mut Frame, state: &AppState, area: Rect) {
    let selection = state.engine.state();
    let (text, style) = result_text(selection);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_inactive())
        .style(Style::default().bg(Colors::BG_RESULT));

    let mut lines = Vec::new();
    // Vertically center a single line inside the bordered box
    let pad = area.height.saturating_sub(3) / 2;
    lines.extend((0..pad).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled(text.to_string(), style)));

    if !selection.is_selecting {
        if let Some(pick) = &selection.last_pick {
            if selection.current_display.as_deref() == Some(pick.name.as_str()) {
                lines.push(Line::from(Span::styled(
                    pick.cuisine.clone(),
                    Styles::text_secondary(),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the Customize and Decide buttons
pub fn render_buttons(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let on_main = state.mode == AppMode::Main;
    let is_selecting = state.engine.is_selecting();

    let customize_style = Theme::button_style(
        false,
        on_main && state.main_focus == MainButton::Customize,
        true,
    );
    let decide_style = Theme::button_style(
        true,
        on_main && state.main_focus == MainButton::Decide,
        !is_selecting,
    );

    render_button(f, chunks[0], "Customize 🎯", customize_style);
    render_button(f, chunks[1], decide_label(is_selecting), decide_style);
}

/// Render one bordered button
pub fn render_button(f: &mut Frame, area: Rect, label: &str, style: Style) {
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    f.render_widget(button, area);
}

/// Render the active criteria chips
pub fn render_chips(f: &mut Frame, state: &AppState, area: Rect) {
    let chips = criteria_chips(state.engine.criteria());
    if chips.is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for (key, label) in chips {
        spans.push(Span::styled(label, Styles::chip()));
        spans.push(Span::styled(format!(" [{}✕]   ", key), Styles::title()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Height the filter panel wants (rows plus borders)
pub fn filter_panel_height(state: &AppState) -> u16 {
    u16::try_from(state.cuisine_rows() + 2).unwrap_or(u16::MAX)
}

/// Render the cuisine filter panel
pub fn render_filter_panel(f: &mut Frame, state: &AppState, area: Rect) {
    let selected = state.engine.criteria().cuisine.as_deref();

    let mut rows = vec![("Any cuisine".to_string(), selected.is_none())];
    rows.extend(
        state
            .engine
            .cuisines()
            .into_iter()
            .map(|c| (c.to_string(), selected == Some(c))),
    );

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|(label, chosen)| {
            let marker = if chosen { "✓ " } else { "  " };
            let style = if chosen {
                Styles::chosen()
            } else {
                Styles::unselected()
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, label), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Filter by Cuisine 🌎 ", Styles::header()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::border_active()),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cuisine_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}
