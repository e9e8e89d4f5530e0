//! Category tab bar.

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

pub fn render_category_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line<'static>> = app
        .gallery
        .catalog()
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| Line::from(format!("{} {}", i + 1, category.label)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Portfolio ")
                .title_style(
                    Style::default()
                        .fg(colors::ON_SURFACE)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(colors::OUTLINE)),
        )
        .style(Style::default().fg(colors::SUBTEXT).bg(colors::SURFACE))
        .highlight_style(
            Style::default()
                .fg(colors::BG)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.active_category_index())
        .divider(" ");

    f.render_widget(tabs, area);
}
