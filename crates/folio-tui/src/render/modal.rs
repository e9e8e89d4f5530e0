//! Project modal rendering.

use crate::app::App;
use crate::colors;
use crate::render::helpers::{asset_icon, badge, centered_rect, help_line, truncate_text};
use folio_core::{ContentKind, DisplayContent, DocumentLink, MediaKind, Project};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Document tabs for a multi-pdf project.
fn document_tabs(documents: &[DocumentLink], selected: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(documents.len() * 2);
    for (i, doc) in documents.iter().enumerate() {
        let style = if Some(i) == selected {
            Style::default()
                .fg(colors::BG)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, doc.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn open_button(media: MediaKind) -> Line<'static> {
    let label = match media {
        MediaKind::Pdf => " [ Open PDF ] ",
        MediaKind::Image => " [ Open Image ] ",
    };
    Line::from(Span::styled(
        label,
        Style::default()
            .fg(colors::BG)
            .bg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Labelled list of gallery images with the highlighted entry marked.
fn gallery_lines(images: &[DocumentLink], selected: usize, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(images.len() * 2);
    for (i, image) in images.iter().enumerate() {
        let is_selected = i == selected;
        let marker = if is_selected { "> " } else { "  " };
        let name_style = if is_selected {
            Style::default()
                .fg(colors::ON_SURFACE)
                .bg(colors::SURFACE_HIGH)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::ON_SURFACE)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(colors::PRIMARY)),
            Span::styled(
                format!("{} ", asset_icon(&image.url)),
                Style::default().fg(colors::PRIMARY),
            ),
            Span::styled(image.label.clone(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("        {}", truncate_text(&image.url, width.saturating_sub(8))),
            Style::default().fg(colors::SUBTEXT),
        )));
    }
    lines
}

/// Content lines describing what the display surface shows.
fn content_lines(app: &App, project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            badge(
                app.gallery.catalog().category_label(&project.category),
                colors::ON_SURFACE,
                colors::PRIMARY_CONTAINER,
            ),
            Span::raw(" "),
            badge(
                project.kind().label(),
                colors::SECONDARY,
                colors::SECONDARY_CONTAINER,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(colors::ON_SURFACE),
        )),
        Line::from(""),
    ];

    if project.kind() == ContentKind::MultiPdf {
        lines.push(document_tabs(
            project.documents(),
            app.gallery.selected_document_index(),
        ));
        lines.push(Line::from(""));
    }

    match app.gallery.display() {
        Some(DisplayContent::Single(target)) => {
            let resolved = app.resolver.resolve(target.url);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", asset_icon(target.url)),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(
                    truncate_text(target.url, width.saturating_sub(6)),
                    Style::default().fg(colors::ON_SURFACE),
                ),
            ]));
            let location_style = if resolved.is_available() {
                Style::default().fg(colors::SUBTEXT)
            } else {
                Style::default().fg(colors::WARNING)
            };
            lines.push(Line::from(Span::styled(
                truncate_text(&resolved.to_string(), width),
                location_style,
            )));
            lines.push(Line::from(""));
            lines.push(open_button(target.media));
        }
        Some(DisplayContent::Gallery(images)) => {
            lines.extend(gallery_lines(images, app.modal.selected_image, width));
        }
        None => {}
    }

    lines
}

fn modal_hints(kind: ContentKind) -> Line<'static> {
    match kind {
        ContentKind::Pdf => help_line(&[("o", "open"), ("f", "full screen"), ("Esc", "close")]),
        ContentKind::MultiPdf => help_line(&[
            ("</>", "document"),
            ("o", "open"),
            ("f", "full screen"),
            ("Esc", "close"),
        ]),
        ContentKind::Image => help_line(&[("o", "open"), ("Esc", "close")]),
        ContentKind::ImageGallery => {
            help_line(&[("^v/jk", "image"), ("o", "open"), ("Esc", "close")])
        }
    }
}

/// Render the open project as a centred modal, or over the whole screen in
/// full-screen mode.
pub fn render_project_modal(f: &mut Frame, app: &App) {
    let Some(project) = app.gallery.selected_project() else {
        return;
    };

    let area = if app.gallery.is_full_screen() {
        f.area()
    } else {
        centered_rect(80, 80, f.area())
    };
    f.render_widget(Clear, area);

    let title = if app.gallery.is_full_screen() {
        format!(" {} [full screen] ", project.title)
    } else {
        format!(" {} ", project.title)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(
            Style::default()
                .fg(colors::ON_SURFACE)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [content_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = content_lines(app, project, content_area.width as usize);
    let scroll = u16::try_from(app.modal.scroll_offset).unwrap_or(u16::MAX);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        content_area,
    );

    render_modal_help(f, project.kind(), help_area);
}

fn render_modal_help(f: &mut Frame, kind: ContentKind, area: Rect) {
    f.render_widget(
        Paragraph::new(modal_hints(kind)).style(Style::default().bg(colors::SURFACE_HIGH)),
        area,
    );
}
