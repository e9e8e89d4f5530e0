//! Shared fixtures for TUI tests

use crate::app::App;
use folio_core::{
    AssetResolver, Catalog, Category, DocumentLink, GalleryController, Opener, Project,
    ProjectContent,
};

/// Two categories: a pdf and a gallery under "ai", a multi-pdf under "ux".
pub fn test_catalog() -> Catalog {
    Catalog::new(
        vec![
            Category::new("ai", "AI Projects"),
            Category::new("ux", "UX"),
        ],
        vec![
            Project::new(
                1u64,
                "Mood Tales",
                "Storytelling",
                "ai",
                "/t1.png",
                ProjectContent::Pdf {
                    content_url: "/mood.pdf".to_string(),
                },
            ),
            Project::new(
                7u64,
                "Attention",
                "Two documents",
                "ux",
                "/t7.png",
                ProjectContent::MultiPdf {
                    content_urls: vec![
                        DocumentLink::new("Presentation", "/p.pdf"),
                        DocumentLink::new("Report", "/r.pdf"),
                    ],
                },
            ),
            Project::new(
                10u64,
                "CDC",
                "Diagrams",
                "ai",
                "/t10.png",
                ProjectContent::ImageGallery {
                    images: vec![
                        DocumentLink::new("Architecture", "/arch.png"),
                        DocumentLink::new("Workflow", "/flow.png"),
                    ],
                },
            ),
        ],
    )
    .unwrap()
}

pub fn test_app() -> App {
    App::new(
        GalleryController::new(test_catalog()),
        AssetResolver::default(),
        Opener::default(),
        2,
    )
}
