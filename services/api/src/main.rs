use sea_orm::Database;
use tracing::info;

use pawhaven_api::config::ApiConfig;
use pawhaven_api::router::build_router;
use pawhaven_api::state::AppState;

#[tokio::main]
async fn main() {
    pawhaven_core::tracing::init_tracing();

    // Missing DATABASE_URL/JWT_SECRET is fatal before any socket is bound.
    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
