// src/store/mysql.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use super::ScoreStore;
use crate::{config::MySqlSettings, error::StorageResult, models::score::ScoreRecord};

/// Score store backed by a MySQL connection pool.
#[derive(Clone)]
pub struct MySqlScoreStore {
    pool: MySqlPool,
}

impl MySqlScoreStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without opening a connection; connections are
    /// checked out on first query, so startup never waits on MySQL.
    pub fn connect_lazy(settings: &MySqlSettings) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user);

        if let Some(password) = &settings.password {
            options = options.password(password);
        }
        if let Some(database) = &settings.database {
            options = options.database(database);
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy_with(options);

        Self::new(pool)
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ScoreStore for MySqlScoreStore {
    async fn insert_score(&self, email: &str, name: &str, score: f64) -> StorageResult<()> {
        sqlx::query("INSERT INTO studentscores (email, name, score) VALUES (?, ?, ?)")
            .bind(email)
            .bind(name)
            .bind(score)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_scores(&self) -> StorageResult<Vec<ScoreRecord>> {
        // `id` breaks ties between rows stamped within the same instant.
        let scores = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT email, name, score, submitted_at
            FROM studentscores
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(scores)
    }
}
