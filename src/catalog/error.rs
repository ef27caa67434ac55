use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read station catalog '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Station catalog '{0}' is not a valid region mapping")]
    Parse(PathBuf, #[source] serde_json::Error),
}
