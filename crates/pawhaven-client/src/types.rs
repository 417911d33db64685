//! Wire models mirroring the API's JSON bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pawhaven_domain::address::Address;
use pawhaven_domain::species::Species;

/// User as returned by the API — never carries a password field.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: u64,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub species: Species,
    pub color: Option<String>,
    pub age: Option<String>,
    pub nature: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub vaccinated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Pet fields sent on create and full-replace update. Optionals left `None`
/// on an update are wiped server-side — that is the PUT contract.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PetPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    pub color: Option<String>,
    pub age: Option<String>,
    pub nature: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}
