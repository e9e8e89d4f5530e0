//! Shared types for Folio gallery components.
//!
//! This crate provides the portfolio data model used by folio-core and
//! folio-tui. All types serialize to the catalog JSON shape, where the content
//! variant is selected by a `type` tag and carries only its own payload.

use serde::{Deserialize, Serialize};

/// Reserved category id meaning "no filter".
pub const ALL_CATEGORY_ID: &str = "all";

/// Display label of the reserved "no filter" category.
pub const ALL_CATEGORY_LABEL: &str = "All Projects";

/// Project identifier. The built-in catalog uses integers; catalog files may
/// use either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    String(String),
}

impl ProjectId {
    /// Parse a command-line style id: digits become `Number`, anything else
    /// stays a `String`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<u64>()
            .map_or_else(|_| ProjectId::String(raw.to_string()), ProjectId::Number)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(n: u64) -> Self {
        ProjectId::Number(n)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        ProjectId::String(s.to_string())
    }
}

/// Filter tag with a stable identifier and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The "all" sentinel that heads every category list.
    #[must_use]
    pub fn all() -> Self {
        Self::new(ALL_CATEGORY_ID, ALL_CATEGORY_LABEL)
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

/// A labelled asset inside a multi-document or gallery project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub label: String,
    pub url: String,
}

impl DocumentLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Content variant of a project.
///
/// Each variant carries only the payload relevant to it, so a `pdf` project
/// can never expose gallery images and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ProjectContent {
    /// A single PDF document
    Pdf { content_url: String },
    /// Several PDF documents; the first one is shown by default
    MultiPdf { content_urls: Vec<DocumentLink> },
    /// A single image
    Image { image_url: String },
    /// Labelled images shown in declared order
    ImageGallery { images: Vec<DocumentLink> },
}

impl ProjectContent {
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            ProjectContent::Pdf { .. } => ContentKind::Pdf,
            ProjectContent::MultiPdf { .. } => ContentKind::MultiPdf,
            ProjectContent::Image { .. } => ContentKind::Image,
            ProjectContent::ImageGallery { .. } => ContentKind::ImageGallery,
        }
    }
}

/// Discriminator of [`ProjectContent`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Pdf,
    MultiPdf,
    Image,
    ImageGallery,
}

impl ContentKind {
    /// Identifier used in the catalog `type` field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Pdf => "pdf",
            ContentKind::MultiPdf => "multi-pdf",
            ContentKind::Image => "image",
            ContentKind::ImageGallery => "image-gallery",
        }
    }

    /// Badge text shown on project cards
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Pdf => "PDF",
            ContentKind::MultiPdf => "Multiple PDFs",
            ContentKind::Image => "Image",
            ContentKind::ImageGallery => "Image Gallery",
        }
    }

    /// Whether the content is PDF-bearing. Only these views have a
    /// full-screen mode.
    #[must_use]
    pub fn is_pdf(self) -> bool {
        matches!(self, ContentKind::Pdf | ContentKind::MultiPdf)
    }
}

/// How the display surface should render a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Pdf,
    Image,
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub thumbnail_url: String,
    #[serde(flatten)]
    pub content: ProjectContent,
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        thumbnail_url: impl Into<String>,
        content: ProjectContent,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            thumbnail_url: thumbnail_url.into(),
            content,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }

    /// Documents of a multi-pdf project, images of a gallery, empty otherwise.
    #[must_use]
    pub fn documents(&self) -> &[DocumentLink] {
        match &self.content {
            ProjectContent::MultiPdf { content_urls } => content_urls,
            ProjectContent::ImageGallery { images } => images,
            ProjectContent::Pdf { .. } | ProjectContent::Image { .. } => &[],
        }
    }

    /// Every asset URL the project references, thumbnail first.
    pub fn asset_urls(&self) -> impl Iterator<Item = &str> {
        let primary = match &self.content {
            ProjectContent::Pdf { content_url } => Some(content_url.as_str()),
            ProjectContent::Image { image_url } => Some(image_url.as_str()),
            ProjectContent::MultiPdf { .. } | ProjectContent::ImageGallery { .. } => None,
        };
        std::iter::once(self.thumbnail_url.as_str())
            .chain(primary)
            .chain(self.documents().iter().map(|d| d.url.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pdf_project() {
        let json = r#"{
            "id": 1,
            "title": "Mood Tales",
            "description": "Emotion Aware Interactive storytelling AI for children",
            "category": "ai",
            "type": "pdf",
            "thumbnailUrl": "/assets/thumbnail/mood_tales.png",
            "contentUrl": "/assets/MoodTales_Presentation.pdf"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, ProjectId::Number(1));
        assert_eq!(project.kind(), ContentKind::Pdf);
        assert_eq!(
            project.content,
            ProjectContent::Pdf {
                content_url: "/assets/MoodTales_Presentation.pdf".to_string()
            }
        );
        assert!(project.documents().is_empty());
    }

    #[test]
    fn test_parse_multi_pdf_project() {
        let json = r#"{
            "id": 7,
            "title": "Attention",
            "description": "d",
            "category": "ux & cognition",
            "type": "multi-pdf",
            "thumbnailUrl": "/t.png",
            "contentUrls": [
                {"label": "Presentation", "url": "/p.pdf"},
                {"label": "Report", "url": "/r.pdf"}
            ]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind(), ContentKind::MultiPdf);
        assert_eq!(project.documents().len(), 2);
        assert_eq!(project.documents()[0].label, "Presentation");
        assert_eq!(project.documents()[1].url, "/r.pdf");
    }

    #[test]
    fn test_parse_image_gallery_project() {
        let json = r#"{
            "id": "cdc",
            "title": "CDC",
            "description": "d",
            "category": "ai",
            "type": "image-gallery",
            "thumbnailUrl": "/w.png",
            "images": [{"label": "Workflow Diagram", "url": "/w.png"}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, ProjectId::String("cdc".to_string()));
        assert_eq!(project.kind(), ContentKind::ImageGallery);
        assert_eq!(project.documents()[0].label, "Workflow Diagram");
    }

    #[test]
    fn test_payload_must_match_type() {
        // A pdf project carrying only a gallery payload is rejected
        let json = r#"{
            "id": 1, "title": "t", "description": "d", "category": "ai",
            "type": "pdf", "thumbnailUrl": "/t.png",
            "images": [{"label": "a", "url": "/a.png"}]
        }"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{
            "id": 1, "title": "t", "description": "d", "category": "ai",
            "type": "video", "thumbnailUrl": "/t.png"
        }"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_type_tag_and_camel_case() {
        let project = Project::new(
            3u64,
            "Image",
            "d",
            "other",
            "/t.png",
            ProjectContent::Image {
                image_url: "/i.png".to_string(),
            },
        );
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["type"], "image");
        assert_eq!(value["imageUrl"], "/i.png");
        assert_eq!(value["thumbnailUrl"], "/t.png");
        assert_eq!(value["id"], 3);
        assert!(value.get("contentUrl").is_none());
    }

    #[test]
    fn test_content_kind_labels() {
        assert_eq!(ContentKind::Pdf.label(), "PDF");
        assert_eq!(ContentKind::MultiPdf.label(), "Multiple PDFs");
        assert_eq!(ContentKind::Image.label(), "Image");
        assert_eq!(ContentKind::ImageGallery.label(), "Image Gallery");
        assert_eq!(ContentKind::MultiPdf.as_str(), "multi-pdf");
        assert_eq!(ContentKind::ImageGallery.as_str(), "image-gallery");
    }

    #[test]
    fn test_content_kind_is_pdf() {
        assert!(ContentKind::Pdf.is_pdf());
        assert!(ContentKind::MultiPdf.is_pdf());
        assert!(!ContentKind::Image.is_pdf());
        assert!(!ContentKind::ImageGallery.is_pdf());
    }

    #[test]
    fn test_project_id_parse_and_display() {
        assert_eq!(ProjectId::parse("10"), ProjectId::Number(10));
        assert_eq!(
            ProjectId::parse("cdc"),
            ProjectId::String("cdc".to_string())
        );
        assert_eq!(ProjectId::Number(10).to_string(), "10");
        assert_eq!(ProjectId::from("x").to_string(), "x");
    }

    #[test]
    fn test_category_all_sentinel() {
        let all = Category::all();
        assert!(all.is_all());
        assert_eq!(all.label, "All Projects");
        assert!(!Category::new("ai", "AI Projects").is_all());
    }

    #[test]
    fn test_asset_urls_lists_thumbnail_then_payload() {
        let project = Project::new(
            7u64,
            "Multi",
            "d",
            "ux",
            "/t.png",
            ProjectContent::MultiPdf {
                content_urls: vec![
                    DocumentLink::new("Presentation", "/p.pdf"),
                    DocumentLink::new("Report", "/r.pdf"),
                ],
            },
        );
        let urls: Vec<&str> = project.asset_urls().collect();
        assert_eq!(urls, vec!["/t.png", "/p.pdf", "/r.pdf"]);
    }
}
