//! Application builder: wires repositories, services, and the router
//! into a runnable Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use stratus_auth::guard::OwnershipGuard;
use stratus_auth::jwt::{JwtDecoder, JwtEncoder};
use stratus_auth::password::PasswordHasher;
use stratus_core::config::AppConfig;
use stratus_core::{AppError, AppResult};
use stratus_database::repositories::{
    FileRepository, FolderRepository, PermissionRepository, ShareRepository, UserRepository,
};
use stratus_service::account::AccountService;
use stratus_service::file::{DownloadService, FileService, SearchService, UploadService};
use stratus_service::folder::FolderService;
use stratus_service::payment::CheckoutService;
use stratus_service::permission::PermissionService;
use stratus_service::share::{AccessService, ShareService};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state: repositories, auth components,
/// object store, and services, all sharing the given pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> AppResult<AppState> {
    let public_base_url = config.server.public_base_url.clone();

    let object_store = stratus_storage::from_config(&config.storage, &public_base_url).await?;
    tracing::info!(provider = object_store.provider_type(), "object store ready");

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let share_repo = Arc::new(ShareRepository::new(db_pool.clone()));
    let permission_repo = Arc::new(PermissionRepository::new(db_pool.clone()));

    let password_hasher = PasswordHasher::new();
    let jwt_encoder = JwtEncoder::new(&config.auth);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let guard = Arc::new(OwnershipGuard::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
    ));

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        password_hasher,
        jwt_encoder,
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&guard),
        Arc::clone(&file_repo),
        Arc::clone(&object_store),
    ));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&guard),
        Arc::clone(&file_repo),
        Arc::clone(&object_store),
    ));
    let download_service = Arc::new(DownloadService::new(
        Arc::clone(&guard),
        Arc::clone(&object_store),
    ));
    let search_service = Arc::new(SearchService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&guard),
        Arc::clone(&folder_repo),
    ));
    let share_service = Arc::new(ShareService::new(
        Arc::clone(&guard),
        Arc::clone(&share_repo),
        &public_base_url,
    ));
    let access_service = Arc::new(AccessService::new(
        Arc::clone(&share_repo),
        Arc::clone(&file_repo),
    ));
    let permission_service = Arc::new(PermissionService::new(
        Arc::clone(&guard),
        Arc::clone(&permission_repo),
        Arc::clone(&user_repo),
    ));
    let checkout_service = Arc::new(CheckoutService::new(config.payment.clone()));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        object_store,
        jwt_decoder,
        account_service,
        file_service,
        upload_service,
        download_service,
        search_service,
        folder_service,
        share_service,
        access_service,
        permission_service,
        checkout_service,
    })
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Stratus server until interrupted.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Stratus server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
