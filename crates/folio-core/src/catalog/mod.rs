//! The static, ordered list of portfolio projects and categories.
//!
//! A catalog is built once (compiled-in, or read from a JSON file with the
//! same shape) and never mutated afterwards. The `"all"` sentinel category is
//! always first.

mod builtin;

use crate::config::{Config, Directories};
use crate::{Error, Result};
use folio_types::{ALL_CATEGORY_ID, Category, Project, ProjectContent, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Badge text for projects whose category is not declared
pub const OTHER_CATEGORY_LABEL: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    projects: Vec<Project>,
}

impl Catalog {
    /// The compiled-in portfolio.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_parts(builtin::categories(), builtin::projects())
    }

    /// Build and validate a catalog from its parts.
    ///
    /// # Errors
    ///
    /// Returns `Error::Catalog` if the parts violate a catalog invariant
    /// (see [`Catalog::validate`]).
    pub fn new(categories: Vec<Category>, projects: Vec<Project>) -> Result<Self> {
        let catalog = Self::from_parts(categories, projects);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Assemble without validation. The canonical `"all"` sentinel always
    /// comes first and replaces a declared `"all"` entry.
    fn from_parts(mut categories: Vec<Category>, projects: Vec<Project>) -> Self {
        if let Some(idx) = categories.iter().position(Category::is_all) {
            let declared = categories.remove(idx);
            if declared != Category::all() {
                debug!(
                    "Replacing declared category '{}' with the built-in one",
                    declared.label
                );
            }
        }
        categories.insert(0, Category::all());
        Self {
            categories,
            projects,
        }
    }

    /// Parse a catalog from JSON text of the form `{categories, projects}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the catalog is invalid.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.categories, file.projects)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or the
    /// catalog is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded catalog from {}: {} projects, {} categories",
            path.display(),
            catalog.projects.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Pick the catalog for a session: the configured path, then the user
    /// catalog file, then the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured or present catalog file cannot be loaded.
    pub fn from_config(config: &Config, dirs: &Directories) -> Result<Self> {
        if let Some(path) = &config.catalog.path {
            return Self::load(path);
        }
        if dirs.catalog_file.exists() {
            return Self::load(&dirs.catalog_file);
        }
        debug!("Using built-in catalog");
        Ok(Self::builtin())
    }

    /// Check catalog invariants.
    ///
    /// Undeclared project categories only produce a warning: such projects
    /// still show under "all".
    ///
    /// # Errors
    ///
    /// Returns `Error::Catalog` on duplicate ids, a second `"all"` category,
    /// an empty document/image list, or a multi-pdf document URL listed twice.
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for (idx, category) in self.categories.iter().enumerate() {
            if idx > 0 && category.is_all() {
                return Err(Error::Catalog(format!(
                    "category id '{ALL_CATEGORY_ID}' is reserved"
                )));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(&project.id) {
                return Err(Error::Catalog(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            if let Some(missing) = missing_payload(project) {
                return Err(Error::Catalog(format!(
                    "{} project {} has no {missing}",
                    project.kind().as_str(),
                    project.id
                )));
            }
            if let Some(url) = duplicate_document(project) {
                return Err(Error::Catalog(format!(
                    "project {} lists document {url} more than once",
                    project.id
                )));
            }
            if !category_ids.contains(project.category.as_str()) {
                warn!(
                    "Project {} uses undeclared category '{}'",
                    project.id, project.category
                );
            }
        }
        Ok(())
    }

    /// All projects in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// All categories, `"all"` first.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub(crate) fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| &p.id == id)
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display label for a category id, "Other" when undeclared.
    #[must_use]
    pub fn category_label(&self, id: &str) -> &str {
        self.category(id)
            .map_or(OTHER_CATEGORY_LABEL, |c| c.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn missing_payload(project: &Project) -> Option<&'static str> {
    match &project.content {
        ProjectContent::MultiPdf { content_urls } if content_urls.is_empty() => Some("documents"),
        ProjectContent::ImageGallery { images } if images.is_empty() => Some("images"),
        _ => None,
    }
}

/// Documents are selected by URL, so each must be unique within a multi-pdf.
fn duplicate_document(project: &Project) -> Option<&str> {
    let ProjectContent::MultiPdf { content_urls } = &project.content else {
        return None;
    };
    let mut seen = HashSet::new();
    content_urls
        .iter()
        .map(|d| d.url.as_str())
        .find(|url| !seen.insert(*url))
}
