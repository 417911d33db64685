use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use pawhaven_auth_types::bearer::Bearer;
use pawhaven_domain::address::Address;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::usecase::auth::{
    CurrentUserUseCase, LoginInput, LoginUseCase, SignupInput, SignupUseCase,
};

/// User as serialized in responses. Deliberately has no password field.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(serialize_with = "pawhaven_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "pawhaven_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: u64,
    pub user: UserResponse,
}

// ── POST /api/auth/signup ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

pub async fn signup(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let usecase = SignupUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(SignupInput {
            name: body.name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            address: body.address,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: out.token,
            expires_at: out.expires_at,
            user: out.user.into(),
        }),
    ))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(SessionResponse {
        token: out.token,
        expires_at: out.expires_at,
        user: out.user.into(),
    }))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

pub async fn me(
    Bearer(token): Bearer,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, ApiError> {
    let usecase = CurrentUserUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let user = usecase.execute(&token).await?;
    Ok(Json(MeResponse { user: user.into() }))
}
