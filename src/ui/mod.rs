//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;
mod profile;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    profile::draw(frame, main_area, app);
    layout::draw_status_bar(frame, app);

    // Popup overlays everything
    if let Some(message) = app.document.current_popup() {
        components::render_popup_dialog(frame, message);
    }
}
