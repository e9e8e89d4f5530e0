//! Tests for catalog construction, validation and loading

use super::fixtures::*;
use crate::{Catalog, Error};
use folio_types::{Category, ContentKind, ProjectId};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    catalog.validate().unwrap();
    assert_eq!(catalog.len(), 9);
}

#[test]
fn test_builtin_catalog_contents() {
    let catalog = Catalog::builtin();
    let ids: Vec<String> = catalog.list().iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "10"]);

    let multi = catalog.get(&ProjectId::Number(7)).unwrap();
    assert_eq!(multi.kind(), ContentKind::MultiPdf);
    assert_eq!(multi.documents()[0].label, "Presentation");
    assert_eq!(multi.documents()[1].label, "Report");

    let gallery = catalog.get(&ProjectId::Number(10)).unwrap();
    assert_eq!(gallery.kind(), ContentKind::ImageGallery);
    assert_eq!(gallery.documents().len(), 2);
}

#[test]
fn test_builtin_categories_start_with_all() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["all", "ai", "ux-cognition"]);
    assert_eq!(catalog.categories()[0].label, "All Projects");
}

#[test]
fn test_builtin_projects_use_declared_categories() {
    let catalog = Catalog::builtin();
    for project in catalog.list() {
        assert!(
            catalog.category(&project.category).is_some(),
            "project {} has undeclared category {}",
            project.id,
            project.category
        );
    }
}

#[test]
fn test_all_category_inserted_when_missing() {
    let catalog = sample_catalog();
    assert!(catalog.categories()[0].is_all());
    assert_eq!(catalog.categories().len(), 3);
}

#[test]
fn test_declared_all_category_replaced_by_canonical() {
    let catalog = Catalog::new(
        vec![
            Category::new("ai", "AI"),
            Category::new("all", "Everything"),
        ],
        vec![make_pdf(1, "ai", "/a.pdf")],
    )
    .unwrap();
    assert_eq!(catalog.categories()[0].id, "all");
    assert_eq!(catalog.categories()[0], Category::all());
    assert_eq!(catalog.categories()[0].label, "All Projects");
    assert_eq!(catalog.categories()[1].id, "ai");
    assert_eq!(catalog.categories().len(), 2);
}

#[test]
fn test_from_json_relabelled_all_category() {
    let json = r#"{
        "categories": [
            {"id": "ai", "label": "AI"},
            {"id": "all", "label": "Everything"}
        ],
        "projects": []
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.categories()[0], Category::all());
    assert_eq!(catalog.category_label("all"), "All Projects");
}

#[test]
fn test_duplicate_project_id_rejected() {
    let result = Catalog::new(
        vec![Category::new("ai", "AI")],
        vec![make_pdf(1, "ai", "/a.pdf"), make_pdf(1, "ai", "/b.pdf")],
    );
    assert!(matches!(result, Err(Error::Catalog(msg)) if msg.contains("duplicate project id 1")));
}

#[test]
fn test_duplicate_document_url_rejected() {
    let result = Catalog::new(
        vec![Category::new("ux", "UX")],
        vec![make_multi_pdf(
            7,
            "ux",
            &[("Presentation", "/x.pdf"), ("Report", "/x.pdf")],
        )],
    );
    assert!(
        matches!(result, Err(Error::Catalog(msg)) if msg.contains("/x.pdf more than once"))
    );
}

#[test]
fn test_duplicate_category_id_rejected() {
    let result = Catalog::new(
        vec![Category::new("ai", "AI"), Category::new("ai", "AI again")],
        vec![],
    );
    assert!(matches!(result, Err(Error::Catalog(_))));
}

#[test]
fn test_second_all_category_rejected() {
    let result = Catalog::new(
        vec![Category::all(), Category::new("all", "Also all")],
        vec![],
    );
    assert!(matches!(result, Err(Error::Catalog(msg)) if msg.contains("reserved")));
}

#[test]
fn test_empty_document_list_rejected() {
    let result = Catalog::new(
        vec![Category::new("ai", "AI")],
        vec![make_multi_pdf(3, "ai", &[])],
    );
    assert!(matches!(result, Err(Error::Catalog(msg)) if msg.contains("no documents")));

    let result = Catalog::new(
        vec![Category::new("ai", "AI")],
        vec![make_gallery(4, "ai", &[])],
    );
    assert!(matches!(result, Err(Error::Catalog(msg)) if msg.contains("no images")));
}

#[test]
fn test_undeclared_category_is_allowed() {
    let catalog = sample_catalog();
    let image = catalog.get(&ProjectId::Number(9)).unwrap();
    assert_eq!(image.category, "other");
    assert_eq!(catalog.category_label("other"), "Other");
    assert_eq!(catalog.category_label("ai"), "AI Projects");
}

#[test]
fn test_list_preserves_insertion_order() {
    let catalog = sample_catalog();
    let ids: Vec<String> = catalog.list().iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "7", "9", "10"]);
}

#[test]
fn test_from_json_camel_case_catalog() {
    let json = r#"{
        "categories": [
            {"id": "all", "label": "All Projects"},
            {"id": "ai", "label": "AI Projects"}
        ],
        "projects": [
            {
                "id": 1,
                "title": "Mood Tales",
                "description": "Storytelling AI",
                "category": "ai",
                "type": "pdf",
                "thumbnailUrl": "/assets/thumbnail/mood_tales.png",
                "contentUrl": "/assets/MoodTales_Presentation.pdf"
            },
            {
                "id": "yoga",
                "title": "Self Growth - Yoga",
                "description": "Yoga poster design",
                "category": "other",
                "type": "image",
                "thumbnailUrl": "/assets/SelfGrowth_Yoga.png",
                "imageUrl": "/assets/SelfGrowth_Yoga.png"
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories().len(), 2);
    assert_eq!(
        catalog.get(&ProjectId::from("yoga")).unwrap().kind(),
        ContentKind::Image
    );
}

#[test]
fn test_from_json_without_categories() {
    let json = r#"{"projects": []}"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.categories(), &[Category::all()]);
}

#[test]
fn test_from_json_invalid() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_load_catalog_file() {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&sample_catalog()).unwrap();
    write!(file, "{json}").unwrap();

    let loaded = Catalog::load(file.path()).unwrap();
    assert_eq!(loaded, sample_catalog());
}

#[test]
fn test_load_missing_file() {
    let result = Catalog::load(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
