use milestone_core::model::{AgeBand, Category, ResponseRecord};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn age_band_to_i64(band: AgeBand) -> i64 {
    i64::from(band.value())
}

pub(crate) fn age_band_from_i64(v: i64) -> Result<AgeBand, StorageError> {
    AgeBand::try_from(v).map_err(ser)
}

pub(crate) fn parse_category(s: &str) -> Result<Category, StorageError> {
    match s {
        "motor" => Ok(Category::Motor),
        "sensory" => Ok(Category::Sensory),
        "communication" => Ok(Category::Communication),
        "feeding" => Ok(Category::Feeding),
        _ => Err(StorageError::Serialization(format!("invalid category: {s}"))),
    }
}

pub(crate) fn answer_from_i64(v: i64) -> Result<bool, StorageError> {
    match v {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(StorageError::Serialization(format!(
            "invalid answer flag: {other}"
        ))),
    }
}

pub(crate) fn map_response_row(row: &sqlx::sqlite::SqliteRow) -> Result<ResponseRecord, StorageError> {
    let band = age_band_from_i64(row.try_get::<i64, _>("age_band").map_err(ser)?)?;
    let category_str: String = row.try_get("category").map_err(ser)?;
    let category = parse_category(category_str.as_str())?;
    let question: String = row.try_get("question").map_err(ser)?;
    let answer = answer_from_i64(row.try_get::<i64, _>("answer").map_err(ser)?)?;
    let answered_at: chrono::DateTime<chrono::Utc> = row.try_get("answered_at").map_err(ser)?;

    ResponseRecord::new(band, category, question, answer, answered_at).map_err(ser)
}
