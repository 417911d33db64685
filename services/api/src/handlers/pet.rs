use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pawhaven_auth_types::bearer::Bearer;
use pawhaven_auth_types::token::validate_session_token;
use pawhaven_domain::species::Species;

use crate::domain::types::{Pet, PetDraft};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use crate::usecase::pet::{
    CreatePetUseCase, DeletePetUseCase, GetPetUseCase, ListPetsUseCase, UpdatePetUseCase,
};

#[derive(Serialize)]
pub struct PetResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub email: String,
    pub species: Species,
    pub color: Option<String>,
    pub age: Option<String>,
    pub nature: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub vaccinated: bool,
    #[serde(serialize_with = "pawhaven_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "pawhaven_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id.to_string(),
            owner_id: pet.owner_id.to_string(),
            name: pet.name,
            email: pet.email,
            species: pet.species,
            color: pet.color,
            age: pet.age,
            nature: pet.nature,
            likes: pet.likes,
            dislikes: pet.dislikes,
            vaccinated: pet.vaccinated,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

/// Request body shared by create and full-replace update. `species` arrives
/// as a string and is checked here rather than trusted to serde, so unknown
/// values produce a 400 with the standard error body.
#[derive(Deserialize)]
pub struct PetRequest {
    pub name: String,
    pub email: String,
    pub species: Option<String>,
    pub color: Option<String>,
    pub age: Option<String>,
    pub nature: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
    pub vaccinated: Option<bool>,
    /// Create only: defaults to the authenticated caller. Ignored on update —
    /// ownership is immutable.
    pub owner_id: Option<Uuid>,
}

fn draft_from_request(body: &PetRequest) -> Result<PetDraft, ApiError> {
    let species = match body.species.as_deref() {
        None => Species::default(),
        Some(s) => Species::from_str_opt(s)
            .ok_or_else(|| ApiError::Validation(format!("unknown species: {s}")))?,
    };
    Ok(PetDraft {
        name: body.name.clone(),
        email: body.email.clone(),
        species,
        color: body.color.clone(),
        age: body.age.clone(),
        nature: body.nature.clone(),
        likes: body.likes.clone(),
        dislikes: body.dislikes.clone(),
        vaccinated: body.vaccinated.unwrap_or(false),
    })
}

fn authenticate(state: &AppState, token: &str) -> Result<Uuid, ApiError> {
    let info =
        validate_session_token(token, &state.jwt_secret).map_err(|_| ApiError::Unauthenticated)?;
    Ok(info.user_id)
}

// ── GET /api/pets ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListPetsQuery {
    /// Owner id to scope the listing to; absent means all pets.
    pub owner: Option<Uuid>,
}

pub async fn list_pets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPetsQuery>,
) -> Result<Json<Vec<PetResponse>>, ApiError> {
    let usecase = ListPetsUseCase {
        pets: state.pet_repo(),
    };
    let pets = usecase.execute(query.owner).await?;
    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

// ── GET /api/pets/{id} ───────────────────────────────────────────────────────

pub async fn get_pet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<PetResponse>, ApiError> {
    let usecase = GetPetUseCase {
        pets: state.pet_repo(),
    };
    let pet = usecase.execute(id).await?;
    Ok(Json(pet.into()))
}

// ── POST /api/pets ───────────────────────────────────────────────────────────

pub async fn create_pet(
    Bearer(token): Bearer,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PetRequest>,
) -> Result<(StatusCode, Json<PetResponse>), ApiError> {
    let caller = authenticate(&state, &token)?;
    let draft = draft_from_request(&body)?;
    let owner_id = body.owner_id.unwrap_or(caller);

    let usecase = CreatePetUseCase {
        pets: state.pet_repo(),
        users: state.user_repo(),
    };
    let pet = usecase.execute(owner_id, draft).await?;
    Ok((StatusCode::CREATED, Json(pet.into())))
}

// ── PUT /api/pets/{id} ───────────────────────────────────────────────────────

pub async fn update_pet(
    Bearer(token): Bearer,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<PetRequest>,
) -> Result<Json<PetResponse>, ApiError> {
    authenticate(&state, &token)?;
    let draft = draft_from_request(&body)?;

    let usecase = UpdatePetUseCase {
        pets: state.pet_repo(),
    };
    let pet = usecase.execute(id, draft).await?;
    Ok(Json(pet.into()))
}

// ── DELETE /api/pets/{id} ────────────────────────────────────────────────────

pub async fn delete_pet(
    Bearer(token): Bearer,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    authenticate(&state, &token)?;
    let usecase = DeletePetUseCase {
        pets: state.pet_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
