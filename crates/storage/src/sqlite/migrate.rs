use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "milestone_responses",
    sql: r"
        CREATE TABLE IF NOT EXISTS milestone_responses (
            age_band INTEGER NOT NULL CHECK (age_band BETWEEN 1 AND 10),
            category TEXT NOT NULL
                CHECK (category IN ('motor', 'sensory', 'communication', 'feeding')),
            question TEXT NOT NULL CHECK (length(trim(question)) > 0),
            answer INTEGER NOT NULL CHECK (answer IN (0, 1)),
            answered_at TEXT NOT NULL,
            PRIMARY KEY (age_band, category, question)
        );
    ",
}];

/// Applies pending schema versions in order, each in its own transaction.
pub(super) async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
        ",
    )
    .execute(pool)
    .await?;

    let current = schema_version(pool).await?;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        apply(pool, migration)
            .await
            .map_err(|source| SqliteInitError::Migration {
                version: migration.version,
                source,
            })?;
        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applied schema migration"
        );
    }

    Ok(())
}

async fn apply(pool: &SqlitePool, migration: &Migration) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(migration.sql).execute(&mut *tx).await?;
    sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)")
        .bind(migration.version)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}

/// Highest applied schema version, 0 for a fresh database.
pub(super) async fn schema_version(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let version: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM schema_migrations")
        .fetch_one(pool)
        .await?;
    Ok(version.unwrap_or(0))
}
