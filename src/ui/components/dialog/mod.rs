//! Dialog components for TUI

mod base;
mod popup_dialog;

pub use popup_dialog::render_popup_dialog;
