use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CatalogError> for sillage_core::Error {
    fn from(e: CatalogError) -> Self {
        sillage_core::Error::CatalogLoad(e.to_string())
    }
}
