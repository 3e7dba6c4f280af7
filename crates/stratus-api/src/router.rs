//! Route definitions for the Stratus HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use stratus_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(share_routes())
        .merge(permission_routes())
        .merge(search_routes())
        .merge(payment_routes())
        .merge(public_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders", get(handlers::folder::list_folders))
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::file::upload_file))
        .route("/files", get(handlers::file::list_files))
        .route("/files/{id}/rename", put(handlers::file::rename_file))
        .route("/files/{id}/trash", delete(handlers::file::trash_file))
        .route("/files/{id}/restore", put(handlers::file::restore_file))
        .route(
            "/files/{id}/permanent",
            delete(handlers::file::delete_permanent),
        )
        .route("/files/{id}/signed-url", get(handlers::file::signed_url))
        .route("/files/{id}/download", get(handlers::file::download_file))
        .route("/trash", get(handlers::file::list_trash))
}

fn share_routes() -> Router<AppState> {
    Router::new()
        // The access route is unauthenticated; token possession is the
        // credential.
        .route("/share/access/{token}", get(handlers::share::access_share))
        // POST takes a file ID, DELETE a share ID.
        .route(
            "/share/{id}",
            post(handlers::share::create_share).delete(handlers::share::revoke_share),
        )
}

fn permission_routes() -> Router<AppState> {
    Router::new()
        .route("/permissions/add", post(handlers::permission::add_permission))
        .route(
            "/permissions/update",
            put(handlers::permission::update_permission),
        )
        .route(
            "/permissions/remove",
            delete(handlers::permission::remove_permission),
        )
}

fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search/files", get(handlers::search::search_files))
        .route("/search/folders", get(handlers::search::search_folders))
        .route("/search/fulltext", get(handlers::search::search_fulltext))
}

fn payment_routes() -> Router<AppState> {
    Router::new().route(
        "/payment/create-checkout-session",
        post(handlers::payment::create_checkout_session),
    )
}

fn public_routes() -> Router<AppState> {
    Router::new().route("/public/files/{*key}", get(handlers::public::serve_file))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration. A literal `*` origin means
/// a permissive development policy.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
