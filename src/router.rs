use crate::db::SecretsStorage;
use crate::handlers::secrets;
use crate::service::SecretGenerator;
use axum::{
    Router,
    routing::{post, put},
};

/// Shared per-request state: the storage pool plus the immutable
/// generator configuration.
#[derive(Clone)]
pub struct ForgeState {
    pub storage: SecretsStorage,
    pub generator: SecretGenerator,
}

impl ForgeState {
    pub fn new(storage: SecretsStorage, generator: SecretGenerator) -> Self {
        Self { storage, generator }
    }
}

pub fn forge_router(state: ForgeState) -> Router {
    Router::new()
        .route(
            "/secrets/",
            post(secrets::create_secret)
                .get(secrets::list_secrets)
                .delete(secrets::delete_all_secrets),
        )
        .route(
            "/secrets/{id}",
            put(secrets::update_secret).delete(secrets::delete_secret),
        )
        .with_state(state)
}
