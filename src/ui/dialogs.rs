//! Customize wizard dialog
//!
//! Step 1 picks a diet, step 2 a food type. Choices are applied to the
//! engine as soon as they are made; the forward buttons stay disabled until
//! the step has a value.

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::centered_fixed;
use crate::theme::{Styles, Theme, UiConstants};
use crate::types::{DietaryPreference, FoodType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::screens::render_button;

/// One selectable row of a wizard step
struct ChoiceRow {
    label: String,
    highlighted: bool,
    chosen: bool,
}

/// Render the customize dialog on top of the main card
pub fn render_customize_dialog(f: &mut Frame, state: &AppState) {
    let Some(step) = state.mode.step_number() else {
        return;
    };

    let area = centered_fixed(UiConstants::DIALOG_WIDTH, UiConstants::DIALOG_HEIGHT, f.area());
    let block = Block::default()
        .title(Span::styled(
            format!(" Step {} of {} ", step, AppMode::WIZARD_STEPS),
            Styles::text_muted(),
        ))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_active())
        .style(Styles::dialog_bg());
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Min(3),    // choices
            Constraint::Length(3), // buttons
        ])
        .split(inner);

    let criteria = state.engine.criteria();
    let (heading, rows) = match state.mode {
        AppMode::CustomizeDiet => (
            "Choose Your Diet 🍽️",
            DietaryPreference::all()
                .iter()
                .enumerate()
                .map(|(i, diet)| ChoiceRow {
                    label: format!("{} {}", diet.label(), diet.emoji()),
                    highlighted: i == state.diet_cursor,
                    chosen: criteria.dietary_preference == Some(*diet),
                })
                .collect::<Vec<_>>(),
        ),
        _ => (
            "Choose Food Type 🍳",
            FoodType::all()
                .iter()
                .enumerate()
                .map(|(i, food_type)| ChoiceRow {
                    label: format!("{} {}", food_type.label(), food_type.emoji()),
                    highlighted: i == state.food_type_cursor,
                    chosen: criteria.food_type == Some(*food_type),
                })
                .collect::<Vec<_>>(),
        ),
    };

    f.render_widget(
        Paragraph::new(Span::styled(heading, Styles::header())).alignment(Alignment::Center),
        chunks[0],
    );
    render_choices(f, &rows, chunks[1]);

    match state.mode {
        AppMode::CustomizeDiet => {
            let ready = criteria.dietary_preference.is_some();
            render_button(f, chunks[2], "Next [n]", Theme::button_style(true, ready, ready));
        }
        _ => {
            let ready = criteria.food_type.is_some();
            let buttons = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[2]);
            render_button(f, buttons[0], "Back [b]", Theme::button_style(false, false, true));
            render_button(
                f,
                buttons[1],
                "Save & Return [s]",
                Theme::button_style(true, ready, ready),
            );
        }
    }
}

fn render_choices(f: &mut Frame, rows: &[ChoiceRow], area: Rect) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let style = match (row.highlighted, row.chosen) {
                (true, _) => Styles::selected(),
                (false, true) => Styles::chosen(),
                (false, false) => Styles::unselected(),
            };
            let marker = if row.chosen { " ›" } else { "" };
            Line::from(Span::styled(format!("  {}{}  ", row.label, marker), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}
