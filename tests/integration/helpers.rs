//! Shared test helpers for integration tests.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use stratus_core::config::app::ServerConfig;
use stratus_core::config::auth::AuthConfig;
use stratus_core::config::database::DatabaseConfig;
use stratus_core::config::logging::LoggingConfig;
use stratus_core::config::payment::PaymentConfig;
use stratus_core::config::storage::StorageConfig;
use stratus_core::config::AppConfig;

pub const MULTIPART_BOUNDARY: &str = "stratus-test-boundary";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let database_url = match std::env::var("STRATUS_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("STRATUS_TEST_DATABASE_URL not set; skipping");
                return None;
            }
        };

        let storage_root = std::env::temp_dir()
            .join(format!("stratus-it-{}", Uuid::new_v4()))
            .to_string_lossy()
            .into_owned();

        let mut storage = StorageConfig::default();
        storage.local.root_path = storage_root;
        storage.local.url_signing_secret = "integration-test-secret".to_string();

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: database_url,
                max_connections: 5,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-jwt-secret".to_string(),
                jwt_ttl_hours: 1,
            },
            storage,
            payment: PaymentConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = stratus_database::pool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        stratus_database::pool::migrate(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = stratus_api::app::build_state(config, db_pool.clone())
            .await
            .expect("Failed to build app state");
        let router = stratus_api::app::build_app(state);

        Some(Self { router, db_pool })
    }

    /// Register a fresh user and return their bearer token.
    ///
    /// Emails are randomized so concurrently running tests cannot
    /// collide; everything in the API is owner-scoped.
    pub async fn register_user(&self) -> (String, Uuid) {
        let email = format!("user-{}@test.example", Uuid::new_v4());
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": "password123" })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "registration failed: {:?}",
            response.body
        );

        let token = response.body["token"].as_str().expect("token").to_string();
        let user_id: Uuid = response.body["user"]["id"]
            .as_str()
            .expect("user id")
            .parse()
            .expect("uuid");
        (token, user_id)
    }

    /// Make a JSON request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_bytes = body
            .map(|b| serde_json::to_vec(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_bytes, "application/json", token)
            .await
    }

    /// Make a request with an arbitrary content type (multipart uploads).
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw: body_bytes.to_vec(),
            headers,
        }
    }

    /// Upload a small file and return the response.
    pub async fn upload(&self, token: &str, file_name: &str, content: &[u8]) -> TestResponse {
        let body = multipart_body(file_name, content);
        let content_type = format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}");
        self.request_raw("POST", "/api/upload", body, &content_type, Some(token))
            .await
    }
}

/// Build a multipart body with a single "file" field.
pub fn multipart_body(file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when not JSON).
    pub body: Value,
    /// Raw response bytes.
    pub raw: Vec<u8>,
    /// Response headers.
    pub headers: http::HeaderMap,
}
