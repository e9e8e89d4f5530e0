//! Gallery view-state machine.
//!
//! `GalleryController` owns the catalog and the session's view state: the
//! active category filter, and the modal, which is either closed or holds an
//! open project. A multi-pdf project additionally tracks which of its documents
//! is shown. Full-screen applies only to PDF-bearing projects.
//!
//! Transitions that do not apply to the current state are no-ops and report
//! `false`; none of them fail.

use crate::catalog::Catalog;
use folio_types::{
    ALL_CATEGORY_ID, ContentKind, DocumentLink, MediaKind, Project, ProjectContent, ProjectId,
};
use serde::Serialize;
use tracing::debug;

/// Coarse modal state, as seen by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryState {
    Closed,
    /// A pdf, image or image-gallery project is open
    OpenSingle,
    /// A multi-pdf project is open with one of its documents selected
    OpenMulti,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Modal {
    #[default]
    Closed,
    OpenSingle {
        project: usize,
        full_screen: bool,
    },
    OpenMulti {
        project: usize,
        document: usize,
        full_screen: bool,
    },
}

/// Serializable snapshot of the session view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_category: String,
    pub selected_project: Option<ProjectId>,
    pub selected_document_url: Option<String>,
    pub is_full_screen: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY_ID.to_string(),
            selected_project: None,
            selected_document_url: None,
            is_full_screen: false,
        }
    }
}

/// A URL plus how the display surface should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayTarget<'a> {
    pub url: &'a str,
    pub media: MediaKind,
}

/// What the open modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayContent<'a> {
    /// One document or image
    Single(DisplayTarget<'a>),
    /// Every gallery image, in declared order
    Gallery(&'a [DocumentLink]),
}

impl<'a> DisplayContent<'a> {
    /// Flatten into display targets; a gallery yields one image target per entry.
    #[must_use]
    pub fn targets(&self) -> Vec<DisplayTarget<'a>> {
        match *self {
            DisplayContent::Single(target) => vec![target],
            DisplayContent::Gallery(images) => images
                .iter()
                .map(|image| DisplayTarget {
                    url: image.url.as_str(),
                    media: MediaKind::Image,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryController {
    catalog: Catalog,
    active_category: String,
    modal: Modal,
}

impl GalleryController {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_category: ALL_CATEGORY_ID.to_string(),
            modal: Modal::Closed,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Set the category filter. Unknown ids are accepted and match nothing.
    /// The open project, if any, is left alone.
    pub fn set_category(&mut self, category_id: &str) {
        if self.catalog.category(category_id).is_none() {
            debug!("Filtering by undeclared category '{category_id}'");
        }
        category_id.clone_into(&mut self.active_category);
    }

    /// Projects visible under the active category, in catalog order.
    #[must_use]
    pub fn filtered_projects(&self) -> Vec<&Project> {
        if self.active_category == ALL_CATEGORY_ID {
            return self.catalog.list().iter().collect();
        }
        self.catalog
            .list()
            .iter()
            .filter(|p| p.category == self.active_category)
            .collect()
    }

    /// Open a project. A multi-pdf project starts on its first document.
    /// Returns `false` if the id is not in the catalog.
    pub fn select_project(&mut self, id: &ProjectId) -> bool {
        let Some(idx) = self.catalog.position(id) else {
            debug!("select_project ignored: unknown project {id}");
            return false;
        };
        self.modal = match self.catalog.list()[idx].kind() {
            ContentKind::MultiPdf => Modal::OpenMulti {
                project: idx,
                document: 0,
                full_screen: false,
            },
            ContentKind::Pdf | ContentKind::Image | ContentKind::ImageGallery => {
                Modal::OpenSingle {
                    project: idx,
                    full_screen: false,
                }
            }
        };
        debug!("Opened project {id} -> {:?}", self.state());
        true
    }

    /// Switch the shown document of the open multi-pdf project. Leaves
    /// full-screen mode. No-op unless a multi-pdf project is open and `url`
    /// is one of its documents.
    pub fn select_document(&mut self, url: &str) -> bool {
        let Modal::OpenMulti { project, .. } = self.modal else {
            debug!("select_document ignored: no multi-pdf project open");
            return false;
        };
        let Some(document) = self.catalog.list()[project]
            .documents()
            .iter()
            .position(|d| d.url == url)
        else {
            debug!("select_document ignored: {url} is not a document of the open project");
            return false;
        };
        self.modal = Modal::OpenMulti {
            project,
            document,
            full_screen: false,
        };
        true
    }

    /// Flip full-screen mode for an open PDF-bearing project. No-op otherwise.
    pub fn toggle_full_screen(&mut self) -> bool {
        let supported = self
            .selected_project()
            .is_some_and(|p| p.kind().is_pdf());
        if !supported {
            debug!("toggle_full_screen ignored: no pdf project open");
            return false;
        }
        match &mut self.modal {
            Modal::OpenSingle { full_screen, .. } | Modal::OpenMulti { full_screen, .. } => {
                *full_screen = !*full_screen;
            }
            Modal::Closed => {}
        }
        true
    }

    /// Close the modal, clearing the selected project, document and full-screen.
    pub fn close(&mut self) {
        if self.modal != Modal::Closed {
            debug!("Closed project modal");
        }
        self.modal = Modal::Closed;
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        match self.modal {
            Modal::Closed => GalleryState::Closed,
            Modal::OpenSingle { .. } => GalleryState::OpenSingle,
            Modal::OpenMulti { .. } => GalleryState::OpenMulti,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.modal != Modal::Closed
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        match self.modal {
            Modal::Closed => None,
            Modal::OpenSingle { project, .. } | Modal::OpenMulti { project, .. } => {
                self.catalog.list().get(project)
            }
        }
    }

    /// Index of the shown document within the open multi-pdf project.
    #[must_use]
    pub fn selected_document_index(&self) -> Option<usize> {
        match self.modal {
            Modal::OpenMulti { document, .. } => Some(document),
            Modal::Closed | Modal::OpenSingle { .. } => None,
        }
    }

    #[must_use]
    pub fn selected_document_url(&self) -> Option<&str> {
        let document = self.selected_document_index()?;
        self.selected_project()?
            .documents()
            .get(document)
            .map(|d| d.url.as_str())
    }

    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        match self.modal {
            Modal::Closed => false,
            Modal::OpenSingle { full_screen, .. } | Modal::OpenMulti { full_screen, .. } => {
                full_screen
            }
        }
    }

    /// What the open modal displays, `None` when closed.
    #[must_use]
    pub fn display(&self) -> Option<DisplayContent<'_>> {
        let project = self.selected_project()?;
        let content = match &project.content {
            ProjectContent::Pdf { content_url } => DisplayContent::Single(DisplayTarget {
                url: content_url,
                media: MediaKind::Pdf,
            }),
            ProjectContent::MultiPdf { .. } => DisplayContent::Single(DisplayTarget {
                url: self.selected_document_url()?,
                media: MediaKind::Pdf,
            }),
            ProjectContent::Image { image_url } => DisplayContent::Single(DisplayTarget {
                url: image_url,
                media: MediaKind::Image,
            }),
            ProjectContent::ImageGallery { images } => DisplayContent::Gallery(images),
        };
        Some(content)
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState {
            active_category: self.active_category.clone(),
            selected_project: self.selected_project().map(|p| p.id.clone()),
            selected_document_url: self.selected_document_url().map(str::to_string),
            is_full_screen: self.is_full_screen(),
        }
    }
}
