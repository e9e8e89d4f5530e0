use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Open error: {0}")]
    Open(String),
}

pub type Result<T> = std::result::Result<T, Error>;
