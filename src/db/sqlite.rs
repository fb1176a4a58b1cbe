use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::RegistryError;
use crate::models::{Athlete, AthleteFilter};

/// Registry backed by SQLite. Uniqueness of `national_id` is enforced by the schema.
#[derive(Debug, Clone)]
pub struct SqliteRegistry {
    pool: SqlitePool,
}

impl SqliteRegistry {
    pub async fn connect(database_url: &str) -> Result<Self, RegistryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(5);
        if database_url.contains(":memory:") {
            // Every connection to an in-memory database gets its own empty database
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        let registry = Self { pool };
        registry.create_schema().await?;

        Ok(registry)
    }

    async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS athletes (
                   id INTEGER PRIMARY KEY AUTOINCREMENT,
                   name TEXT NOT NULL,
                   national_id TEXT NOT NULL UNIQUE,
                   training_center TEXT NOT NULL,
                   category TEXT NOT NULL
               )"#
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>, sqlx::Error> {
        sqlx::query_as::<_, Athlete>(
            r#"SELECT name, national_id, training_center, category
               FROM athletes
               WHERE (? IS NULL OR name = ?)
                 AND (? IS NULL OR national_id = ?)
               ORDER BY id"#
        )
        .bind(filter.name.as_deref())
        .bind(filter.name.as_deref())
        .bind(filter.national_id.as_deref())
        .bind(filter.national_id.as_deref())
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_page(
        &self,
        filter: &AthleteFilter,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<Athlete>, usize), sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*)
               FROM athletes
               WHERE (? IS NULL OR name = ?)
                 AND (? IS NULL OR national_id = ?)"#
        )
        .bind(filter.name.as_deref())
        .bind(filter.name.as_deref())
        .bind(filter.national_id.as_deref())
        .bind(filter.national_id.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let athletes = sqlx::query_as::<_, Athlete>(
            r#"SELECT name, national_id, training_center, category
               FROM athletes
               WHERE (? IS NULL OR name = ?)
                 AND (? IS NULL OR national_id = ?)
               ORDER BY id
               LIMIT ? OFFSET ?"#
        )
        .bind(filter.name.as_deref())
        .bind(filter.name.as_deref())
        .bind(filter.national_id.as_deref())
        .bind(filter.national_id.as_deref())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok((athletes, usize::try_from(total).unwrap_or_default()))
    }

    pub async fn create(&self, athlete: Athlete) -> Result<(), RegistryError> {
        let result = sqlx::query(
            r#"INSERT INTO athletes (name, national_id, training_center, category)
               VALUES (?, ?, ?, ?)"#
        )
        .bind(&athlete.name)
        .bind(&athlete.national_id)
        .bind(&athlete.training_center)
        .bind(&athlete.category)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(RegistryError::DuplicateKey {
                    national_id: athlete.national_id,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> Result<usize, RegistryError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM athletes"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
