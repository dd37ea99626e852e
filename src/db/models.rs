use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored secret row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSecret {
    pub id: i64,
    pub secret: String,
    pub template: Option<String>,
    pub created_at: String,
}
