//! Non-interactive subcommands. Each returns the text to print so the output
//! can be tested without a terminal.

use anyhow::{Result, bail};
use folio_core::{
    AssetResolver, Catalog, DisplayTarget, Error, GalleryController, Opener, Project, ProjectId,
};
use serde_json::json;
use std::fmt::Write as _;

/// Projects in the given category (all of them when `None`).
pub fn list_projects(
    gallery: &mut GalleryController,
    category: Option<&str>,
    json: bool,
) -> Result<String> {
    if let Some(category) = category {
        gallery.set_category(category);
    }
    let projects = gallery.filtered_projects();

    if json {
        return Ok(serde_json::to_string_pretty(&projects)?);
    }

    let catalog = gallery.catalog();
    let mut out = String::new();
    if projects.is_empty() {
        out.push_str("No projects found.\n");
        return Ok(out);
    }
    for project in projects {
        writeln!(
            out,
            "  {:<4} {:<40} {:<14} {}",
            project.id.to_string(),
            project.title,
            project.kind().label(),
            catalog.category_label(&project.category)
        )?;
    }
    Ok(out)
}

pub fn list_categories(catalog: &Catalog, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(catalog.categories())?);
    }

    let mut out = String::new();
    for category in catalog.categories() {
        let count = if category.is_all() {
            catalog.len()
        } else {
            catalog
                .list()
                .iter()
                .filter(|p| p.category == category.id)
                .count()
        };
        let plural = if count == 1 { "project" } else { "projects" };
        writeln!(
            out,
            "  {:<16} {:<32} {count} {plural}",
            category.id, category.label
        )?;
    }
    Ok(out)
}

/// Map a command-line id onto a catalog id. Digits are tried as a numeric
/// id first, then as a string id.
pub fn project_id(catalog: &Catalog, raw: &str) -> ProjectId {
    let id = ProjectId::parse(raw);
    if catalog.get(&id).is_none() && matches!(id, ProjectId::Number(_)) {
        let fallback = ProjectId::String(raw.to_string());
        if catalog.get(&fallback).is_some() {
            return fallback;
        }
    }
    id
}

/// Open the project (and document, for multi-pdf projects) in the gallery.
fn select(gallery: &mut GalleryController, id: &ProjectId, document: Option<&str>) -> Result<()> {
    if !gallery.select_project(id) {
        return Err(Error::ProjectNotFound(id.to_string()).into());
    }
    if let Some(url) = document
        && !gallery.select_document(url)
    {
        bail!("Project {id} has no document {url}");
    }
    Ok(())
}

fn describe(
    project: &Project,
    catalog: &Catalog,
    targets: &[DisplayTarget<'_>],
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{} (#{})", project.title, project.id)?;
    writeln!(
        out,
        "  {} | {}",
        catalog.category_label(&project.category),
        project.kind().label()
    )?;
    writeln!(out, "  {}", project.description)?;
    out.push('\n');

    let documents = project.documents();
    if documents.is_empty() {
        for target in targets {
            writeln!(out, "  > {}", target.url)?;
        }
    } else {
        for doc in documents {
            let marker = if targets.iter().any(|t| t.url == doc.url) {
                ">"
            } else {
                " "
            };
            writeln!(out, "  {marker} {:<28} {}", doc.label, doc.url)?;
        }
    }
    Ok(out)
}

/// Show what the display surface renders for a project.
pub fn show_project(
    gallery: &mut GalleryController,
    id: &ProjectId,
    document: Option<&str>,
    json: bool,
) -> Result<String> {
    select(gallery, id, document)?;
    let Some(project) = gallery.selected_project() else {
        return Err(Error::ProjectNotFound(id.to_string()).into());
    };
    let targets = gallery.display().map(|d| d.targets()).unwrap_or_default();

    if json {
        let value = json!({
            "project": project,
            "viewState": gallery.view_state(),
            "display": targets,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    describe(project, gallery.catalog(), &targets)
}

/// Open a project's current target with the external viewer. A gallery opens
/// its first image.
pub fn open_project(
    gallery: &mut GalleryController,
    resolver: &AssetResolver,
    opener: &Opener,
    id: &ProjectId,
    document: Option<&str>,
) -> Result<String> {
    select(gallery, id, document)?;
    let Some(target) = gallery
        .display()
        .and_then(|d| d.targets().first().copied())
    else {
        bail!("Project {id} has nothing to open");
    };

    let resolved = resolver.resolve(target.url);
    if !resolved.is_available() {
        bail!("Asset not found: {resolved}");
    }
    opener.open(&resolved)?;
    Ok(format!("Opened {resolved}"))
}
