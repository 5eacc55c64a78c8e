use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response from registry: {0}")]
    InvalidResponse(String),

    #[error("No latest tag for {0} found")]
    MissingLatestTag(String),
}
