use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use pawhaven_domain::address::Address;
use pawhaven_domain::species::Species;
use pawhaven_schema::{pets, users};

use crate::domain::repository::{PetRepository, UserRepository};
use crate::domain::types::{Pet, PetDraft, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let address = user.address.clone().unwrap_or_default();
        let result = users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            phone: Set(user.phone.clone()),
            address_line1: Set(address.line1),
            address_city: Set(address.city),
            address_state: Set(address.state),
            address_zip: Set(address.zip),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique index on email settles signup races.
            Err(e) if matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) => {
                Err(ApiError::DuplicateEmail)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError> {
        use sea_orm::PaginatorTrait;
        let count = users::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check user exists")?;
        Ok(count > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    let address = Address {
        line1: model.address_line1,
        city: model.address_city,
        state: model.address_state,
        zip: model.address_zip,
    };
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        address: (!address.is_empty()).then_some(address),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Pet repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPetRepository {
    pub db: DatabaseConnection,
}

impl PetRepository for DbPetRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, ApiError> {
        let model = pets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find pet by id")?;
        Ok(model.map(pet_from_model))
    }

    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Pet>, ApiError> {
        let mut query = pets::Entity::find();
        if let Some(owner) = owner_id {
            query = query.filter(pets::Column::OwnerId.eq(owner));
        }
        let models = query
            .order_by_asc(pets::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list pets")?;
        Ok(models.into_iter().map(pet_from_model).collect())
    }

    async fn create(&self, pet: &Pet) -> Result<(), ApiError> {
        pets::ActiveModel {
            id: Set(pet.id),
            owner_id: Set(pet.owner_id),
            name: Set(pet.name.clone()),
            email: Set(pet.email.clone()),
            species: Set(pet.species.as_str().to_owned()),
            color: Set(pet.color.clone()),
            age: Set(pet.age.clone()),
            nature: Set(pet.nature.clone()),
            likes: Set(pet.likes.clone()),
            dislikes: Set(pet.dislikes.clone()),
            vaccinated: Set(pet.vaccinated),
            created_at: Set(pet.created_at),
            updated_at: Set(pet.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create pet")?;
        Ok(())
    }

    async fn replace(
        &self,
        id: Uuid,
        draft: &PetDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, ApiError> {
        // Every mutable column is written; id, owner_id, and created_at stay
        // NotSet and keep their stored values.
        let am = pets::ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            species: Set(draft.species.as_str().to_owned()),
            color: Set(draft.color.clone()),
            age: Set(draft.age.clone()),
            nature: Set(draft.nature.clone()),
            likes: Set(draft.likes.clone()),
            dislikes: Set(draft.dislikes.clone()),
            vaccinated: Set(draft.vaccinated),
            updated_at: Set(updated_at),
            ..Default::default()
        };
        match am.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("replace pet").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = pets::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete pet")?;
        Ok(result.rows_affected > 0)
    }
}

fn pet_from_model(model: pets::Model) -> Pet {
    Pet {
        id: model.id,
        owner_id: model.owner_id,
        name: model.name,
        email: model.email,
        // Unknown stored value should be impossible; fall back to Other
        // rather than failing the whole read.
        species: Species::from_str_opt(&model.species).unwrap_or_default(),
        color: model.color,
        age: model.age,
        nature: model.nature,
        likes: model.likes,
        dislikes: model.dislikes,
        vaccinated: model.vaccinated,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
