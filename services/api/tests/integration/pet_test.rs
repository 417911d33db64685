use uuid::Uuid;

use pawhaven_api::domain::types::PetDraft;
use pawhaven_api::error::ApiError;
use pawhaven_api::usecase::pet::{
    CreatePetUseCase, DeletePetUseCase, GetPetUseCase, ListPetsUseCase, UpdatePetUseCase,
};
use pawhaven_domain::species::Species;

use crate::helpers::{MockPetRepo, MockUserRepo, test_user};

fn rex_draft() -> PetDraft {
    PetDraft {
        name: "Rex".into(),
        email: "r@x.com".into(),
        species: Species::Dog,
        ..Default::default()
    }
}

#[tokio::test]
async fn created_pet_appears_only_in_owner_scoped_listing() {
    let owner = test_user("u1@x.com", "pw");
    let other = test_user("u2@x.com", "pw");
    let (owner_id, other_id) = (owner.id, other.id);
    let users = MockUserRepo::new(vec![owner, other]);
    let pets = MockPetRepo::empty();

    let create = CreatePetUseCase {
        pets: pets.clone(),
        users,
    };
    let rex = create.execute(owner_id, rex_draft()).await.unwrap();

    let list = ListPetsUseCase { pets };
    let mine = list.execute(Some(owner_id)).await.unwrap();
    assert!(mine.iter().any(|p| p.id == rex.id));

    let theirs = list.execute(Some(other_id)).await.unwrap();
    assert!(theirs.iter().all(|p| p.id != rex.id));
}

#[tokio::test]
async fn scoped_listing_is_exact_subset_of_full_listing() {
    let u1 = test_user("u1@x.com", "pw");
    let u2 = test_user("u2@x.com", "pw");
    let (id1, id2) = (u1.id, u2.id);
    let users = MockUserRepo::new(vec![u1, u2]);
    let pets = MockPetRepo::empty();

    let create = CreatePetUseCase {
        pets: pets.clone(),
        users,
    };
    for (owner, name) in [(id1, "Rex"), (id2, "Mia"), (id1, "Bubbles")] {
        let draft = PetDraft {
            name: name.into(),
            ..rex_draft()
        };
        create.execute(owner, draft).await.unwrap();
    }

    let list = ListPetsUseCase { pets };
    let all = list.execute(None).await.unwrap();
    let scoped = list.execute(Some(id1)).await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(scoped.len(), 2);
    // Exactly the owner's pets, each present in the full listing.
    assert!(scoped.iter().all(|p| p.owner_id == id1));
    assert!(
        scoped
            .iter()
            .all(|p| all.iter().any(|q| q.id == p.id))
    );
    assert_eq!(
        all.iter().filter(|p| p.owner_id == id1).count(),
        scoped.len()
    );
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let owner = test_user("u1@x.com", "pw");
    let owner_id = owner.id;
    let users = MockUserRepo::new(vec![owner]);
    let pets = MockPetRepo::empty();

    let create = CreatePetUseCase {
        pets: pets.clone(),
        users,
    };
    let rex = create.execute(owner_id, rex_draft()).await.unwrap();

    let delete = DeletePetUseCase { pets: pets.clone() };
    delete.execute(rex.id).await.unwrap();

    let get = GetPetUseCase { pets };
    let result = get.execute(rex.id).await;
    assert!(matches!(result, Err(ApiError::PetNotFound)));
}

#[tokio::test]
async fn update_then_get_reflects_replaced_fields() {
    let owner = test_user("u1@x.com", "pw");
    let owner_id = owner.id;
    let users = MockUserRepo::new(vec![owner]);
    let pets = MockPetRepo::empty();

    let create = CreatePetUseCase {
        pets: pets.clone(),
        users,
    };
    let draft = PetDraft {
        color: Some("brown".into()),
        likes: Some("fetch".into()),
        ..rex_draft()
    };
    let rex = create.execute(owner_id, draft).await.unwrap();

    let update = UpdatePetUseCase { pets: pets.clone() };
    let replacement = PetDraft {
        name: "Rex II".into(),
        email: "rex2@x.com".into(),
        species: Species::Dog,
        vaccinated: true,
        ..Default::default()
    };
    update.execute(rex.id, replacement).await.unwrap();

    let get = GetPetUseCase { pets };
    let stored = get.execute(rex.id).await.unwrap();
    assert_eq!(stored.name, "Rex II");
    assert!(stored.vaccinated);
    // Full-replace semantics: optionals absent from the replacement are wiped.
    assert_eq!(stored.color, None);
    assert_eq!(stored.likes, None);
    assert_eq!(stored.owner_id, owner_id);
}

#[tokio::test]
async fn create_rejects_owner_that_does_not_exist() {
    let create = CreatePetUseCase {
        pets: MockPetRepo::empty(),
        users: MockUserRepo::empty(),
    };
    let result = create.execute(Uuid::now_v7(), rex_draft()).await;
    assert!(matches!(result, Err(ApiError::UnknownOwner)));
}
