use chrono::{DateTime, Utc};
use uuid::Uuid;

use pawhaven_domain::address::Address;
use pawhaven_domain::species::Species;

/// User account. The password hash never leaves the service boundary;
/// handlers build explicit response structs without it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pet record. `owner_id` is set at creation and immutable.
#[derive(Debug, Clone)]
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

/// The mutable fields of a pet, shared by create and full-replace update.
/// An update writes every field here; omitted optionals are wiped.
#[derive(Debug, Clone, Default)]
pub struct PetDraft {
    pub name: String,
    pub email: String,
    pub species: Species,
    pub color: Option<String>,
    pub age: Option<String>,
    pub nature: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub vaccinated: bool,
}

/// Validate the required fields of a pet draft.
pub fn validate_pet_draft(draft: &PetDraft) -> Result<(), String> {
    if draft.name.trim().is_empty() {
        return Err("name must not be empty".to_owned());
    }
    if !pawhaven_domain::email::validate_email(&draft.email) {
        return Err("contact email is malformed".to_owned());
    }
    Ok(())
}
