//! Button row buttons

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    /// Cursor is on this button
    pub selected: bool,
    /// A request started by this button is still in flight
    pub busy: bool,
}

impl ButtonState {
    pub fn new(selected: bool, busy: bool) -> Self {
        Self { selected, busy }
    }

    fn accent(&self) -> Option<Color> {
        match (self.busy, self.selected) {
            (true, _) => Some(Color::Yellow),
            (false, true) => Some(Color::Cyan),
            (false, false) => None,
        }
    }
}

/// Render a bordered button. A busy button shows `busy_label` instead of
/// `label`; pressing it again is still allowed.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    busy_label: &str,
    state: ButtonState,
) {
    let text = if state.busy { busy_label } else { label };

    let border_style = Style::default().fg(state.accent().unwrap_or(Color::DarkGray));
    let mut text_style = match state.accent() {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    if state.selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(format!(" {text} ")).style(text_style).block(block),
        area,
    );
}
