//! Project card grid.

use crate::app::App;
use crate::colors;
use crate::render::helpers::{badge, truncate_text};
use folio_core::Project;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CARD_HEIGHT: u16 = 7;

/// Build the content lines of a single card.
fn card_lines(app: &App, project: &Project, width: usize) -> Vec<Line<'static>> {
    let category = app.gallery.catalog().category_label(&project.category);
    let kind = project.kind().label();
    let category_width = width.saturating_sub(kind.len() + 4).max(4);

    vec![
        Line::from(vec![
            badge(
                &truncate_text(category, category_width.saturating_sub(2)),
                colors::ON_SURFACE,
                colors::PRIMARY_CONTAINER,
            ),
            Span::raw(" "),
            badge(kind, colors::SECONDARY, colors::SECONDARY_CONTAINER),
        ]),
        Line::from(Span::styled(
            truncate_text(&project.title, width),
            Style::default()
                .fg(colors::ON_SURFACE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(colors::SUBTEXT),
        )),
    ]
}

fn render_card(f: &mut Frame, app: &App, project: &Project, selected: bool, area: Rect) {
    let border = if selected {
        colors::PRIMARY
    } else {
        colors::OUTLINE
    };
    let bg = if selected {
        colors::SURFACE_HIGH
    } else {
        colors::SURFACE
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" #{} ", project.id))
        .style(Style::default().bg(bg))
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = card_lines(app, project, inner.width as usize);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        inner,
    );
}

/// Render the filtered projects as a grid of cards, scrolled so the cursor
/// stays visible.
// Grid math: usize indices to u16 terminal coords
#[allow(clippy::cast_possible_truncation)]
pub fn render_project_grid(f: &mut Frame, app: &App, area: Rect) {
    let projects = app.visible_projects();
    let label = app
        .gallery
        .catalog()
        .category(app.gallery.active_category())
        .map_or(app.gallery.active_category(), |c| c.label.as_str());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({} projects) ", label, projects.len()))
        .style(Style::default().bg(colors::BG))
        .border_style(Style::default().fg(colors::OUTLINE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if projects.is_empty() {
        let empty = Paragraph::new("No projects in this category")
            .style(Style::default().fg(colors::SUBTEXT));
        f.render_widget(empty, inner);
        return;
    }

    let columns = app.cursor.columns;
    let cell_width = inner.width / columns as u16;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.cursor.row();
    let scroll_offset = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    for (row_pos, row) in (scroll_offset..scroll_offset + visible_rows).enumerate() {
        let y = inner.y + row_pos as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        for col in 0..columns {
            let idx = row * columns + col;
            let Some(project) = projects.get(idx) else {
                return;
            };
            let card_area = Rect::new(
                inner.x + col as u16 * cell_width,
                y,
                cell_width,
                CARD_HEIGHT,
            );
            render_card(f, app, project, idx == app.cursor.selected, card_area);
        }
    }
}
