use crate::db::DbSecret;
use crate::{ForgeError, router::ForgeState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
pub struct CreateSecretRequest {
    pub template: Option<String>,
    pub length: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSecretRequest {
    pub secret: String,
}

/// Wire shape shared by create, list and update responses. The row id stays
/// internal to the store.
#[derive(Debug, Clone, Serialize)]
pub struct SecretResponse {
    pub template: Option<String>,
    pub secret: String,
    pub created_at: String,
}

impl From<DbSecret> for SecretResponse {
    fn from(row: DbSecret) -> Self {
        Self {
            template: row.template,
            secret: row.secret,
            created_at: row.created_at,
        }
    }
}

/// POST /secrets/ -> generates a secret and stores it.
pub async fn create_secret(
    State(state): State<ForgeState>,
    Json(req): Json<CreateSecretRequest>,
) -> Result<(StatusCode, Json<SecretResponse>), ForgeError> {
    let secret = state.generator.generate(req.template.as_deref(), req.length)?;
    let created_at = Local::now().format(TIMESTAMP_FORMAT).to_string();

    let row = state
        .storage
        .insert(&secret, req.template.as_deref(), &created_at)
        .await?;

    info!(id = row.id, templated = row.template.is_some(), "stored new secret");
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /secrets/ -> every stored secret.
pub async fn list_secrets(
    State(state): State<ForgeState>,
) -> Result<Json<Vec<SecretResponse>>, ForgeError> {
    let rows = state.storage.list_all().await?;
    Ok(Json(rows.into_iter().map(SecretResponse::from).collect()))
}

/// PUT /secrets/{id} -> replaces the stored secret value.
pub async fn update_secret(
    State(state): State<ForgeState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSecretRequest>,
) -> Result<Json<SecretResponse>, ForgeError> {
    if req.secret.is_empty() {
        return Err(ForgeError::Validation(
            "`secret` must be non-empty".to_string(),
        ));
    }

    let row = state.storage.update_secret(id, &req.secret).await?;
    Ok(Json(row.into()))
}

/// DELETE /secrets/{id}
pub async fn delete_secret(
    State(state): State<ForgeState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ForgeError> {
    state.storage.delete_one(id).await?;
    info!(id, "deleted secret");
    Ok(Json(json!({ "message": "secret deleted" })))
}

/// DELETE /secrets/ -> clears the table; succeeds even when already empty.
pub async fn delete_all_secrets(
    State(state): State<ForgeState>,
) -> Result<Json<Value>, ForgeError> {
    state.storage.delete_all().await?;
    info!("deleted all secrets");
    Ok(Json(json!({ "message": "all secrets deleted" })))
}
