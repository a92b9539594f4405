use milestone_core::model::{AgeBand, Category, ResponseRecord};
use tokio::sync::watch;

use super::{
    SqliteRepository,
    mapping::{age_band_to_i64, map_response_row},
};
use crate::repository::{ResponseRepository, StorageError, sort_records};

const SELECT_COLUMNS: &str = "SELECT age_band, category, question, answer, answered_at FROM milestone_responses";

fn map_rows(rows: Vec<sqlx::sqlite::SqliteRow>) -> Result<Vec<ResponseRecord>, StorageError> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(map_response_row(&row)?);
    }
    // Category codes sort alphabetically in SQL; reorder to walk order.
    sort_records(&mut out);
    Ok(out)
}

#[async_trait::async_trait]
impl ResponseRepository for SqliteRepository {
    async fn save_response(&self, record: &ResponseRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO milestone_responses (age_band, category, question, answer, answered_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(age_band, category, question) DO UPDATE SET
                answer = excluded.answer,
                answered_at = excluded.answered_at
            ",
        )
        .bind(age_band_to_i64(record.age_band()))
        .bind(record.category().as_str())
        .bind(record.question())
        .bind(i64::from(record.answer()))
        .bind(record.answered_at())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        self.changes.bump();
        tracing::debug!(
            band = %record.age_band(),
            category = %record.category(),
            answer = record.answer(),
            "saved milestone response"
        );
        Ok(())
    }

    async fn all_responses(&self) -> Result<Vec<ResponseRecord>, StorageError> {
        let rows = sqlx::query(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        map_rows(rows)
    }

    async fn responses_for_band(&self, band: AgeBand) -> Result<Vec<ResponseRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE age_band = ?1");
        let rows = sqlx::query(&sql)
            .bind(age_band_to_i64(band))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        map_rows(rows)
    }

    async fn responses_for_band_category(
        &self,
        band: AgeBand,
        category: Category,
    ) -> Result<Vec<ResponseRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE age_band = ?1 AND category = ?2");
        let rows = sqlx::query(&sql)
            .bind(age_band_to_i64(band))
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        map_rows(rows)
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        let res = sqlx::query("DELETE FROM milestone_responses")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        self.changes.bump();
        tracing::info!(removed = res.rows_affected(), "cleared milestone responses");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}
