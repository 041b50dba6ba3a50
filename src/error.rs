use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a valid array of book records.
    #[error("Malformed catalog data: {0}")]
    MalformedData(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
