#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{Pet, PetDraft, User};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new user. A unique-constraint violation on email surfaces as
    /// [`ApiError::DuplicateEmail`] so concurrent signups lose cleanly.
    async fn create(&self, user: &User) -> Result<(), ApiError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for pet records.
pub trait PetRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, ApiError>;

    /// List pets in insertion order; `owner_id` restricts to that owner's
    /// records. Filtering happens in the query, never post-fetch.
    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Pet>, ApiError>;

    async fn create(&self, pet: &Pet) -> Result<(), ApiError>;

    /// Full-replace of the mutable fields. Returns `false` if no row matched.
    async fn replace(
        &self,
        id: Uuid,
        draft: &PetDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, ApiError>;

    /// Delete a pet. Returns `false` if no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Port for password hashing and verification. Implementations are CPU-bound
/// and must not block the async runtime.
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, ApiError>;
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError>;
}
