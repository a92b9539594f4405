use thiserror::Error;

use crate::catalogue::CatalogueError;
use crate::model::{AgeBandError, CategoryError, ResponseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    AgeBand(#[from] AgeBandError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}
