//! Helper rendering functions shared across views.

use crate::colors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Truncate text to `max_len` characters with a trailing ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let head: String = text.chars().take(max_len - 3).collect();
    format!("{head}...")
}

/// Short file type tag for an asset URL, based on its extension.
pub fn asset_icon(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        "pdf" => "[PDF]",
        "jpg" | "jpeg" => "[JPG]",
        "png" => "[PNG]",
        "gif" => "[GIF]",
        "webp" => "[WEB]",
        "svg" => "[SVG]",
        _ => "[...]",
    }
}

/// Key hint line: each pair renders as `key: action`.
pub fn help_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(colors::PRIMARY),
        ));
        spans.push(Span::styled(
            format!(": {action}{sep}"),
            Style::default().fg(colors::SUBTEXT),
        ));
    }
    Line::from(spans)
}

/// Pill-shaped badge span.
pub fn badge(text: &str, fg: ratatui::style::Color, bg: ratatui::style::Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}

/// Rect of `percent_x` by `percent_y` centred in `area`.
// Terminal dimensions are u16, the product stays below u16::MAX * 100
#[allow(clippy::cast_possible_truncation)]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Attention & Multitasking", 12), "Attention...");
        assert_eq!(truncate_text("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("Café Crème", 10), "Café Crème");
        assert_eq!(truncate_text("Café Crème", 7), "Café...");
    }

    #[test]
    fn test_asset_icon() {
        assert_eq!(asset_icon("/assets/MoodTales_Presentation.pdf"), "[PDF]");
        assert_eq!(asset_icon("/assets/CDC.PNG"), "[PNG]");
        assert_eq!(asset_icon("https://x.io/a.jpeg?w=200"), "[JPG]");
        assert_eq!(asset_icon("/assets/noext"), "[...]");
    }

    #[test]
    fn test_help_line_spans() {
        let line = help_line(&[("Enter", "open"), ("Esc", "quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter: open  Esc: quit");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(80, 50, area), Rect::new(10, 10, 80, 20));
        assert_eq!(centered_rect(150, 100, area), area);
    }
}
