use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecgenError {
    #[error("catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("record not found: SPEC-{0}")]
    RecordNotFound(String),

    #[error("template '{template}' references unknown variable '{name}'")]
    MissingTemplateVariable { template: String, name: String },

    #[error("invalid write mode '{0}': expected 'overwrite' or 'skip-existing'")]
    InvalidWriteMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecgenError>;
