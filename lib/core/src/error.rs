use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid top_n: expected a positive integer, got {0}")]
    InvalidTopN(i64),

    #[error("Invalid note selection: {0}")]
    InvalidNotes(String),

    #[error("Catalog is empty: no vocabulary can be derived")]
    EmptyCatalog,

    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    #[error("Invalid perfume record {name:?}: {reason}")]
    InvalidRecord { name: String, reason: String },
}

impl Error {
    /// True for errors caused by the request rather than by the catalog.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidTopN(_) | Error::InvalidNotes(_))
    }
}
