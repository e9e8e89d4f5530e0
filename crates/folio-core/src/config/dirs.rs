use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following the XDG base directory layout
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/folio)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// User catalog file, used instead of the built-in catalog when present
    pub catalog_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Panics
    ///
    /// Panics if the system's project directories cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let project =
            ProjectDirs::from("", "", "folio").expect("Failed to determine project directories");

        Self::with_base(project.config_dir().to_path_buf())
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            catalog_file: base.join("catalog.json"),
            config: base,
        }
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_sets_all_paths() {
        let base = PathBuf::from("/tmp/test-folio");
        let dirs = Directories::with_base(base.clone());

        assert_eq!(dirs.config, base);
        assert_eq!(dirs.config_file, base.join("config.json"));
        assert_eq!(dirs.catalog_file, base.join("catalog.json"));
    }

    #[test]
    fn test_new_returns_valid_xdg_paths() {
        let dirs = Directories::new();

        assert!(dirs.config.to_string_lossy().contains("folio"));
        assert!(dirs.config_file.starts_with(&dirs.config));
        assert!(dirs.config_file.to_string_lossy().ends_with("config.json"));
        assert!(dirs.catalog_file.to_string_lossy().ends_with("catalog.json"));
    }
}
