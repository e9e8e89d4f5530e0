pub mod assets;
pub mod catalog;
pub mod config;
pub mod gallery;

pub(crate) mod platform;

mod error;

#[cfg(test)]
mod tests;

pub use assets::{AssetResolver, Opener, ResolvedAsset};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use gallery::{DisplayContent, DisplayTarget, GalleryController, GalleryState, ViewState};

pub use folio_types::*;
