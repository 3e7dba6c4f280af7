//! Account registration and login.

use std::sync::Arc;

use stratus_auth::jwt::JwtEncoder;
use stratus_auth::password::PasswordHasher;
use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::UserRepository;
use stratus_entity::user::{CreateUser, User};
use uuid::Uuid;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// A logged-in user together with a fresh access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Registers users and verifies credentials.
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: PasswordHasher, encoder: JwtEncoder) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new account and issues its first access token.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let email = normalize_email(email)?;
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
            })
            .await?;

        let token = self.encoder.generate_token(user.id, &user.email)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(AuthenticatedUser { user, token })
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// login endpoint cannot be used to probe for accounts.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let email = normalize_email(email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = self.encoder.generate_token(user.id, &user.email)?;
        Ok(AuthenticatedUser { user, token })
    }

    /// Fetches the profile behind an authenticated user ID.
    pub async fn current_user(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
    }
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_ascii_lowercase();
    // Coarse shape check; real validation happens when mail is sent.
    if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::validation("A valid email address is required"));
    }
    Ok(email)
}
