use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use pawhaven_api::domain::repository::{CredentialHasher, PetRepository, UserRepository};
use pawhaven_api::domain::types::{Pet, PetDraft, User};
use pawhaven_api::error::ApiError;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        // Emulates the unique index on email.
        if users.iter().any(|u| u.email == user.email) {
            return Err(ApiError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.id == id))
    }
}

// ── MockHasher ───────────────────────────────────────────────────────────────

/// Deterministic stand-in for argon2 — fast and assertable.
pub struct MockHasher;

impl CredentialHasher for MockHasher {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError> {
        Ok(password_hash == format!("hashed:{password}"))
    }
}

// ── MockPetRepo ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPetRepo {
    pub pets: Arc<Mutex<Vec<Pet>>>,
}

impl MockPetRepo {
    pub fn empty() -> Self {
        Self {
            pets: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl PetRepository for MockPetRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, ApiError> {
        Ok(self.pets.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Pet>, ApiError> {
        let pets = self.pets.lock().unwrap();
        Ok(pets
            .iter()
            .filter(|p| owner_id.is_none_or(|o| p.owner_id == o))
            .cloned()
            .collect())
    }

    async fn create(&self, pet: &Pet) -> Result<(), ApiError> {
        self.pets.lock().unwrap().push(pet.clone());
        Ok(())
    }

    async fn replace(
        &self,
        id: Uuid,
        draft: &PetDraft,
        updated_at: DateTime<chrono::Utc>,
    ) -> Result<bool, ApiError> {
        let mut pets = self.pets.lock().unwrap();
        let Some(pet) = pets.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        pet.name = draft.name.clone();
        pet.email = draft.email.clone();
        pet.species = draft.species;
        pet.color = draft.color.clone();
        pet.age = draft.age.clone();
        pet.nature = draft.nature.clone();
        pet.likes = draft.likes.clone();
        pet.dislikes = draft.dislikes.clone();
        pet.vaccinated = draft.vaccinated;
        pet.updated_at = updated_at;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut pets = self.pets.lock().unwrap();
        let before = pets.len();
        pets.retain(|p| p.id != id);
        Ok(pets.len() < before)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(email: &str, password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        name: "Ana".into(),
        email: email.into(),
        password_hash: format!("hashed:{password}"),
        phone: None,
        address: None,
        created_at: now,
        updated_at: now,
    }
}
