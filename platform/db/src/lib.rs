//! Database primitives for the HR slice: settings, connection and the
//! `EMPLOYEE` table bootstrap.

use entity::employee;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (env `{0}` not set)")]
    MissingUrl(String),
    #[error("failed to connect: {0}")]
    Connection(#[source] DbErr),
    #[error("failed to create table: {0}")]
    Schema(#[source] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

/// Environment-driven connection settings. An explicit `url` wins over
/// the environment.
#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_url_key")]
    env_key: String,
    #[serde(default)]
    url: Option<String>,
}

fn default_url_key() -> String {
    "DATABASE_URL".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::new(default_url_key())
    }
}

impl DatabaseSettings {
    pub fn new(env_key: impl Into<String>) -> Self {
        Self {
            env_key: env_key.into(),
            url: None,
        }
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            env_key: default_url_key(),
            url: Some(url.into()),
        }
    }

    pub fn env_key(&self) -> &str {
        &self.env_key
    }

    pub fn database_url(&self) -> DbResult<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        std::env::var(&self.env_key).map_err(|_| DbError::MissingUrl(self.env_key.clone()))
    }
}

pub async fn connect(settings: &DatabaseSettings) -> DbResult<DatabaseConnection> {
    let url = settings.database_url()?;
    let conn = Database::connect(&url).await.map_err(DbError::Connection)?;
    tracing::info!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}

/// Create the `EMPLOYEE` table from its entity definition if it does not
/// exist yet.
pub async fn ensure_employee_table<C>(conn: &C) -> DbResult<()>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(employee::Entity);
    stmt.if_not_exists();
    conn.execute(backend.build(&stmt))
        .await
        .map_err(DbError::Schema)?;
    tracing::info!(table = "EMPLOYEE", "employee table ensured");
    Ok(())
}
