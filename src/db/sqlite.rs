use crate::db::models::DbSecret;
use crate::db::schema::SQLITE_INIT;
use crate::error::ForgeError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SecretsStorage {
    pool: SqlitePool,
}

impl SecretsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, ForgeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ForgeError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Append a row and echo back the stored state, id assigned by SQLite.
    pub async fn insert(
        &self,
        secret: &str,
        template: Option<&str>,
        created_at: &str,
    ) -> Result<DbSecret, ForgeError> {
        let result = sqlx::query("INSERT INTO secrets (secret, template, created_at) VALUES (?, ?, ?)")
            .bind(secret)
            .bind(template)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<DbSecret, ForgeError> {
        sqlx::query_as::<_, DbSecret>(
            "SELECT id, secret, template, created_at FROM secrets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ForgeError::SecretNotFound)
    }

    /// All rows, ordered by ascending id so listings are stable.
    pub async fn list_all(&self) -> Result<Vec<DbSecret>, ForgeError> {
        let rows = sqlx::query_as::<_, DbSecret>(
            "SELECT id, secret, template, created_at FROM secrets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Replace `secret` on the matching row; `template` and `created_at`
    /// are left untouched.
    pub async fn update_secret(&self, id: i64, new_secret: &str) -> Result<DbSecret, ForgeError> {
        let result = sqlx::query("UPDATE secrets SET secret = ? WHERE id = ?")
            .bind(new_secret)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ForgeError::SecretNotFound);
        }

        self.get_by_id(id).await
    }

    pub async fn delete_one(&self, id: i64) -> Result<(), ForgeError> {
        let result = sqlx::query("DELETE FROM secrets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ForgeError::SecretNotFound);
        }
        Ok(())
    }

    /// Remove every row. Succeeds on an already-empty table.
    pub async fn delete_all(&self) -> Result<(), ForgeError> {
        sqlx::query("DELETE FROM secrets").execute(&self.pool).await?;
        Ok(())
    }
}
