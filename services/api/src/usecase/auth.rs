use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use pawhaven_auth_types::token::{SessionClaims, validate_session_token};
use pawhaven_domain::address::Address;
use pawhaven_domain::email::validate_email;

use crate::domain::repository::{CredentialHasher, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;

/// Session-token lifetime in seconds (7 days). Logout is client-side token
/// discard; there is no server-side revocation before expiry.
pub const SESSION_TOKEN_EXP: u64 = 7 * 24 * 60 * 60;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a session JWT bound to `user_id`. Returns the token and its expiry
/// (seconds since epoch).
pub fn issue_session_token(user_id: Uuid, secret: &str) -> Result<(String, u64), ApiError> {
    let exp = now_secs() + SESSION_TOKEN_EXP;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))?;
    Ok((token, exp))
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug)]
pub struct SessionOutput {
    pub user: User,
    pub token: String,
    pub expires_at: u64,
}

pub struct SignupUseCase<R: UserRepository, H: CredentialHasher> {
    pub users: R,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<R: UserRepository, H: CredentialHasher> SignupUseCase<R, H> {
    pub async fn execute(&self, input: SignupInput) -> Result<SessionOutput, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".into()));
        }
        if !validate_email(&input.email) {
            return Err(ApiError::Validation("email is malformed".into()));
        }
        if input.password.is_empty() {
            return Err(ApiError::Validation("password must not be empty".into()));
        }
        // Fast-path duplicate check; the unique index on email settles races.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_hash,
            phone: input.phone,
            address: input.address.filter(|a| !a.is_empty()),
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        let (token, expires_at) = issue_session_token(user.id, &self.jwt_secret)?;
        Ok(SessionOutput {
            user,
            token,
            expires_at,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository, H: CredentialHasher> {
    pub users: R,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<R: UserRepository, H: CredentialHasher> LoginUseCase<R, H> {
    pub async fn execute(&self, input: LoginInput) -> Result<SessionOutput, ApiError> {
        // Unknown email and wrong password collapse into one error kind so
        // responses cannot be used to enumerate accounts.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await?;
        if !verified {
            return Err(ApiError::InvalidCredentials);
        }

        let (token, expires_at) = issue_session_token(user.id, &self.jwt_secret)?;
        Ok(SessionOutput {
            user,
            token,
            expires_at,
        })
    }
}

// ── CurrentUser ──────────────────────────────────────────────────────────────

pub struct CurrentUserUseCase<R: UserRepository> {
    pub users: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> CurrentUserUseCase<R> {
    /// Resolve the user behind a bearer token. Any token fault — bad
    /// signature, expiry, or a user row that no longer exists — is
    /// `Unauthenticated`.
    pub async fn execute(&self, token: &str) -> Result<User, ApiError> {
        let info = validate_session_token(token, &self.jwt_secret)
            .map_err(|_| ApiError::Unauthenticated)?;
        self.users
            .find_by_id(info.user_id)
            .await?
            .ok_or(ApiError::Unauthenticated)
    }
}
