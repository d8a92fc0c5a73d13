use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile not found for user: {0}")]
    NotFound(String),

    #[error("Profile save failed: {0}")]
    SaveFailed(String),
}
