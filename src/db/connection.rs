use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;

#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Open the database named by `DATABASE_URL` (default `sqlite:workforce.db`),
    /// creating the file and the schema when missing.
    pub async fn new() -> Result<Self> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:workforce.db".to_string());
        let conn = Self::connect(&url).await?;

        tracing::info!("Connected to SQLite at {}", url);

        Ok(conn)
    }

    /// Open a fresh in-memory database. A single pooled connection keeps
    /// every query on the same in-memory instance.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        create_schema(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        create_schema(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Schema is applied on every startup; the statements are idempotent.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            designation TEXT NOT NULL,
            payroll     REAL NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employee_projects (
            employee_id INTEGER NOT NULL REFERENCES employees(id),
            project_id  INTEGER NOT NULL REFERENCES projects(id),
            PRIMARY KEY (employee_id, project_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
