//! Rendering functions for the TUI.
//!
//! The screen is a category tab bar, the project grid and a status line. An
//! open project draws as a modal on top.

mod grid;
mod helpers;
mod modal;
mod tabs;

pub use grid::render_project_grid;
pub use helpers::{asset_icon, truncate_text};
pub use modal::render_project_modal;
pub use tabs::render_category_tabs;

use crate::app::App;
use crate::colors;
use helpers::help_line;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Render the whole gallery screen.
pub fn render_gallery(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);

    let [tabs_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_category_tabs(f, app, tabs_area);
    render_project_grid(f, app, grid_area);
    render_status_bar(f, app, status_area);

    if app.gallery.is_open() {
        render_project_modal(f, app);
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::WARNING),
        )),
        None => help_line(&[
            ("Tab/1-9", "category"),
            ("<>^v/hjkl", "nav"),
            ("Enter", "open"),
            ("q", "quit"),
        ]),
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::SURFACE)),
        area,
    );
}
