#![forbid(unsafe_code)]

pub mod catalogue;
pub mod error;
pub mod model;
pub mod progress;
pub mod time;

pub use catalogue::{Catalogue, CatalogueError};
pub use error::Error;
pub use progress::{BandProgress, CategoryProgress, ProgressReport};
pub use time::Clock;
