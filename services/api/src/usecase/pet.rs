use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{PetRepository, UserRepository};
use crate::domain::types::{Pet, PetDraft, validate_pet_draft};
use crate::error::ApiError;

// ── CreatePet ────────────────────────────────────────────────────────────────

pub struct CreatePetUseCase<P: PetRepository, U: UserRepository> {
    pub pets: P,
    pub users: U,
}

impl<P: PetRepository, U: UserRepository> CreatePetUseCase<P, U> {
    pub async fn execute(&self, owner_id: Uuid, draft: PetDraft) -> Result<Pet, ApiError> {
        validate_pet_draft(&draft).map_err(ApiError::Validation)?;
        if !self.users.exists(owner_id).await? {
            return Err(ApiError::UnknownOwner);
        }
        let now = Utc::now();
        let pet = Pet {
            id: Uuid::now_v7(),
            owner_id,
            name: draft.name,
            email: draft.email,
            species: draft.species,
            color: draft.color,
            age: draft.age,
            nature: draft.nature,
            likes: draft.likes,
            dislikes: draft.dislikes,
            vaccinated: draft.vaccinated,
            created_at: now,
            updated_at: now,
        };
        self.pets.create(&pet).await?;
        Ok(pet)
    }
}

// ── ListPets ─────────────────────────────────────────────────────────────────

pub struct ListPetsUseCase<P: PetRepository> {
    pub pets: P,
}

impl<P: PetRepository> ListPetsUseCase<P> {
    pub async fn execute(&self, owner_id: Option<Uuid>) -> Result<Vec<Pet>, ApiError> {
        self.pets.list(owner_id).await
    }
}

// ── GetPet ───────────────────────────────────────────────────────────────────

pub struct GetPetUseCase<P: PetRepository> {
    pub pets: P,
}

impl<P: PetRepository> GetPetUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<Pet, ApiError> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or(ApiError::PetNotFound)
    }
}

// ── UpdatePet (full replace) ─────────────────────────────────────────────────

pub struct UpdatePetUseCase<P: PetRepository> {
    pub pets: P,
}

impl<P: PetRepository> UpdatePetUseCase<P> {
    /// Replace every mutable field of the pet; `id`, `owner_id`, and
    /// `created_at` stay as stored. Omitted optionals in the draft wipe the
    /// stored value.
    pub async fn execute(&self, id: Uuid, draft: PetDraft) -> Result<Pet, ApiError> {
        validate_pet_draft(&draft).map_err(ApiError::Validation)?;
        let existing = self
            .pets
            .find_by_id(id)
            .await?
            .ok_or(ApiError::PetNotFound)?;

        let updated_at = Utc::now();
        let replaced = self.pets.replace(id, &draft, updated_at).await?;
        if !replaced {
            // Deleted between the read and the write.
            return Err(ApiError::PetNotFound);
        }

        Ok(Pet {
            id: existing.id,
            owner_id: existing.owner_id,
            name: draft.name,
            email: draft.email,
            species: draft.species,
            color: draft.color,
            age: draft.age,
            nature: draft.nature,
            likes: draft.likes,
            dislikes: draft.dislikes,
            vaccinated: draft.vaccinated,
            created_at: existing.created_at,
            updated_at,
        })
    }
}

// ── DeletePet ────────────────────────────────────────────────────────────────

pub struct DeletePetUseCase<P: PetRepository> {
    pub pets: P,
}

impl<P: PetRepository> DeletePetUseCase<P> {
    /// Delete by id. A second delete of the same id reports `PetNotFound`
    /// just like an id that never existed.
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        let deleted = self.pets.delete(id).await?;
        if !deleted {
            return Err(ApiError::PetNotFound);
        }
        Ok(())
    }
}
