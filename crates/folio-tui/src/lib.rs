//! Terminal viewer for the Folio portfolio gallery.
//!
//! This crate wraps a `GalleryController` in terminal UI state, maps key
//! presses onto gallery transitions, and renders category tabs, the project
//! grid and the project modal with ratatui.

pub mod app;
pub mod colors;
pub mod commands;
pub mod keys;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;
