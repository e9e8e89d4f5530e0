//! Application state for the TUI.

use crate::state::{GridCursor, ModalState};
use folio_core::{
    AssetResolver, DisplayContent, DisplayTarget, GalleryController, MediaKind, Opener, Project,
};
use tracing::{debug, warn};

/// Main application state
pub struct App {
    pub gallery: GalleryController,
    pub resolver: AssetResolver,
    pub opener: Opener,
    pub cursor: GridCursor,
    pub modal: ModalState,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        gallery: GalleryController,
        resolver: AssetResolver,
        opener: Opener,
        columns: usize,
    ) -> Self {
        Self {
            gallery,
            resolver,
            opener,
            cursor: GridCursor::new(columns),
            modal: ModalState::default(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.gallery.filtered_projects()
    }

    pub fn selected_card(&self) -> Option<&Project> {
        self.visible_projects().get(self.cursor.selected).copied()
    }

    /// Index of the active category in the catalog's category list.
    pub fn active_category_index(&self) -> Option<usize> {
        self.gallery
            .catalog()
            .categories()
            .iter()
            .position(|c| c.id == self.gallery.active_category())
    }

    pub fn set_category_index(&mut self, idx: usize) {
        let Some(category) = self.gallery.catalog().categories().get(idx) else {
            return;
        };
        let id = category.id.clone();
        self.gallery.set_category(&id);
        self.cursor.reset();
    }

    pub fn next_category(&mut self) {
        let count = self.gallery.catalog().categories().len();
        let next = self.active_category_index().map_or(0, |i| (i + 1) % count);
        self.set_category_index(next);
    }

    pub fn previous_category(&mut self) {
        let count = self.gallery.catalog().categories().len();
        let prev = match self.active_category_index() {
            Some(0) | None => count.saturating_sub(1),
            Some(i) => i - 1,
        };
        self.set_category_index(prev);
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left();
    }

    pub fn move_right(&mut self) {
        let len = self.visible_projects().len();
        self.cursor.move_right(len);
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up();
    }

    pub fn move_down(&mut self) {
        let len = self.visible_projects().len();
        self.cursor.move_down(len);
    }

    /// Open the project under the cursor.
    pub fn open_selected(&mut self) {
        let Some(id) = self.selected_card().map(|p| p.id.clone()) else {
            return;
        };
        if self.gallery.select_project(&id) {
            self.modal.reset();
            self.status_message = None;
        }
    }

    pub fn close_modal(&mut self) {
        self.gallery.close();
        self.modal.reset();
    }

    /// Step to the neighbouring document of an open multi-pdf project.
    pub fn cycle_document(&mut self, forward: bool) {
        let Some(current) = self.gallery.selected_document_index() else {
            return;
        };
        let Some(project) = self.gallery.selected_project() else {
            return;
        };
        let documents = project.documents();
        if documents.is_empty() {
            return;
        }
        let next = if forward {
            (current + 1) % documents.len()
        } else if current == 0 {
            documents.len() - 1
        } else {
            current - 1
        };
        let url = documents[next].url.clone();
        self.gallery.select_document(&url);
    }

    pub fn toggle_full_screen(&mut self) {
        if !self.gallery.toggle_full_screen() {
            self.status_message = Some("Full screen is only available for PDFs".to_string());
        }
    }

    pub fn select_next_image(&mut self) {
        if let Some(DisplayContent::Gallery(images)) = self.gallery.display() {
            let len = images.len();
            self.modal.select_next_image(len);
        }
    }

    pub fn select_previous_image(&mut self) {
        self.modal.select_previous_image();
    }

    /// The target `o` would open: the shown document, the image, or the
    /// highlighted gallery image.
    pub fn current_target(&self) -> Option<DisplayTarget<'_>> {
        match self.gallery.display()? {
            DisplayContent::Single(target) => Some(target),
            DisplayContent::Gallery(images) => {
                images
                    .get(self.modal.selected_image)
                    .map(|image| DisplayTarget {
                        url: &image.url,
                        media: MediaKind::Image,
                    })
            }
        }
    }

    /// Hand the current target to the external viewer.
    pub fn open_current(&mut self) {
        let Some(target) = self.current_target() else {
            return;
        };
        let resolved = self.resolver.resolve(target.url);
        debug!("Opening {:?} target {}", target.media, resolved);

        if !resolved.is_available() {
            warn!("Asset not found: {resolved}");
            self.status_message = Some(format!("Not found: {resolved}"));
            return;
        }

        self.status_message = Some(match self.opener.open(&resolved) {
            Ok(()) => format!("Opened {resolved}"),
            Err(e) => {
                warn!("Failed to open {resolved}: {e}");
                e.to_string()
            }
        });
    }
}
