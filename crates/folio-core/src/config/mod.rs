mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{AppConfig, AssetConfig, CatalogConfig, Config, UiConfig};
pub use validation::warn_unknown_fields;
