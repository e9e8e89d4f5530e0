//! Key handling, one handler per view. Each returns true if it consumed the key.

use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::ContentKind;

/// Dispatch a key press to the modal or the grid.
pub fn handle_key(app: &mut App, key_code: KeyCode, modifiers: KeyModifiers) {
    tracing::debug!("KEY EVENT: code={:?}, modifiers={:?}", key_code, modifiers);

    if modifiers.contains(KeyModifiers::CONTROL) && key_code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    if handle_modal_key(app, key_code) {
        return;
    }
    handle_grid_key(app, key_code);
}

/// Digit keys 1-9 as a zero-based index.
fn digit_index(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| *d > 0)
        .and_then(|d| usize::try_from(d - 1).ok())
}

/// Handles key events while a project modal is open.
pub fn handle_modal_key(app: &mut App, key_code: KeyCode) -> bool {
    let Some(kind) = app.gallery.selected_project().map(folio_core::Project::kind) else {
        return false;
    };

    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_document(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cycle_document(true),
        KeyCode::BackTab => app.cycle_document(false),
        KeyCode::Up | KeyCode::Char('k') => {
            if kind == ContentKind::ImageGallery {
                app.select_previous_image();
            } else {
                app.modal.scroll_offset = app.modal.scroll_offset.saturating_sub(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if kind == ContentKind::ImageGallery {
                app.select_next_image();
            } else {
                app.modal.scroll_offset = app.modal.scroll_offset.saturating_add(1);
            }
        }
        KeyCode::Char('f') => app.toggle_full_screen(),
        KeyCode::Char('o') | KeyCode::Enter => app.open_current(),
        KeyCode::Char(c) if kind == ContentKind::MultiPdf => {
            let url = digit_index(c).and_then(|idx| {
                app.gallery
                    .selected_project()
                    .and_then(|p| p.documents().get(idx))
                    .map(|d| d.url.clone())
            });
            if let Some(url) = url {
                app.gallery.select_document(&url);
            }
        }
        _ => {}
    }
    true
}

/// Handles key events on the category tabs and project grid.
pub fn handle_grid_key(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.previous_category(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char(c) => {
            if let Some(idx) = digit_index(c) {
                app.set_category_index(idx);
            }
        }
        _ => return false,
    }
    true
}
