//! Profile form view: fields, button row and result container

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::{App, BUTTONS};
use crate::state::{Banner, BannerKind, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the profile page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.form() else {
        let missing = Paragraph::new("Profile form not found")
            .style(Style::default().fg(Color::Red))
            .block(Block::default().title(" Profile ").borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let visible: Vec<_> = form.visible_fields().collect();

    let mut constraints = vec![Constraint::Length(1)]; // Heading
    constraints.extend(visible.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(3)); // Result container

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let heading = Paragraph::new(Line::from(format!(" Edit referral links (#{})", form.id)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[0]);

    for (index, field) in visible.iter().enumerate() {
        draw_field(frame, chunks[index + 1], field, form.active_field() == index);
    }

    draw_buttons(
        frame,
        chunks[visible.len() + 1],
        app,
        form.is_buttons_row_active(),
    );
    draw_result(frame, chunks[visible.len() + 2], app);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, row_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, label) in BUTTONS.iter().enumerate() {
        let selected = row_active && app.selected_button == index;
        let busy = index == 0 && app.is_submitting();
        render_button(
            frame,
            chunks[index],
            label,
            "Saving",
            ButtonState::new(selected, busy),
        );
    }
}

/// Draw the result container
fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let html = app.document.container_html();
    if html.is_empty() {
        return;
    }

    let (text, color) = match app.document.banner() {
        Some(Banner {
            kind: BannerKind::Success,
            message,
        }) => (message, Color::Green),
        Some(Banner {
            kind: BannerKind::Danger,
            message,
        }) => (message, Color::Red),
        None => (html.to_string(), Color::Gray),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockSubmitTransport;
    use crate::interceptor::{EndpointPolicy, FeedbackPolicy, Interceptor};
    use crate::state::{Document, ProfileForm};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use url::Url;

    fn app() -> App {
        let document = Document::default();
        let interceptor = Interceptor::bind(
            &document,
            "#profileform",
            Url::parse("http://127.0.0.1:8000").unwrap(),
            EndpointPolicy::default(),
            FeedbackPolicy::default(),
        )
        .unwrap();
        App::with_transport(document, interceptor, Arc::new(MockSubmitTransport::new()))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, app)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_every_service_field() {
        let screen = render(&app());
        assert!(screen.contains("SoFi Money"));
        assert!(screen.contains("DoorDash"));
        assert!(screen.contains("Save"));
    }

    #[test]
    fn test_renders_success_banner() {
        let mut app = app();
        app.document.set_container_html(Banner::success().to_html());
        let screen = render(&app);
        assert!(screen.contains("Success! Profile updated."));
    }

    #[test]
    fn test_save_button_shows_saving_while_in_flight() {
        let mut transport = MockSubmitTransport::new();
        transport
            .expect_post_form()
            .returning(|_, _| Ok(String::new()));
        let mut document = Document::default();
        let mut interceptor = Interceptor::bind(
            &document,
            "#profileform",
            Url::parse("http://127.0.0.1:8000").unwrap(),
            EndpointPolicy::default(),
            FeedbackPolicy::default(),
        )
        .unwrap();
        interceptor.submit(&mut document).unwrap().unwrap();
        let app = App::with_transport(document, interceptor, Arc::new(transport));

        let screen = render(&app);
        assert!(screen.contains("Saving"));
        assert!(screen.contains("Clear"));
    }

    #[test]
    fn test_renders_missing_form() {
        let mut app = app();
        app.document.remove_form("profileform");
        assert!(render(&app).contains("Profile form not found"));
    }

    #[test]
    fn test_custom_form_fields() {
        let mut document = Document::new("/profile");
        document.add_form(ProfileForm::new(
            "profileform",
            vec![crate::state::FormField::text("name", "Display name")],
        ));
        let interceptor = Interceptor::bind(
            &document,
            "#profileform",
            Url::parse("http://127.0.0.1:8000").unwrap(),
            EndpointPolicy::default(),
            FeedbackPolicy::default(),
        )
        .unwrap();
        let app = App::with_transport(document, interceptor, Arc::new(MockSubmitTransport::new()));
        assert!(render(&app).contains("Display name"));
    }
}
