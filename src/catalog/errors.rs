use thiserror::Error;
use crate::database::errors::StorageError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<StorageError> for CatalogError {
    fn from(error: StorageError) -> Self {
        CatalogError::Unavailable(error.to_string())
    }
}
