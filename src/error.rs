use crate::catalog::error::CatalogError;
use crate::types::ranked::StatusClass;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LowTideError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl LowTideError {
    /// Classification for the user; `None` for configuration problems, which are
    /// for the operator rather than the person searching.
    pub fn status(&self) -> Option<StatusClass> {
        match self {
            LowTideError::Validation(e) => Some(e.status()),
            LowTideError::Catalog(_) | LowTideError::HttpClient(_) => None,
        }
    }
}
