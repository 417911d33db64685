use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use pawhaven_core::health::{healthz, readyz};
use pawhaven_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, me, signup},
    pet::{create_pet, delete_pet, get_pet, list_pets, update_pet},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // Pets
        .route("/api/pets", get(list_pets))
        .route("/api/pets", post(create_pet))
        .route("/api/pets/{id}", get(get_pet))
        .route("/api/pets/{id}", put(update_pet))
        .route("/api/pets/{id}", delete(delete_pet))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
