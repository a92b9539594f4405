mod age_band;
mod category;
mod response;

pub use age_band::{AgeBand, AgeBandError};
pub use category::{Category, CategoryError};
pub use response::{ResponseError, ResponseKey, ResponseRecord};
