//! SQL DDL for initializing the secret storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (identities are never reused)
/// - `secret` NOT NULL
/// - `template` nullable; absent for randomly generated secrets
/// - `created_at` NOT NULL, `YYYY-MM-DD HH:MM:SS`, written once at insert
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS secrets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    secret TEXT NOT NULL,
    template TEXT,
    created_at TEXT NOT NULL
);
"#;
