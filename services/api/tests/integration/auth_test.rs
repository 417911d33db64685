use pawhaven_api::error::ApiError;
use pawhaven_api::usecase::auth::{
    CurrentUserUseCase, LoginInput, LoginUseCase, SignupInput, SignupUseCase, issue_session_token,
};

use crate::helpers::{MockHasher, MockUserRepo, TEST_JWT_SECRET, test_user};

fn signup_input(name: &str, email: &str, password: &str) -> SignupInput {
    SignupInput {
        name: name.into(),
        email: email.into(),
        password: password.into(),
        phone: None,
        address: None,
    }
}

// ── Signup ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_signup_fresh_email_exactly_once() {
    let repo = MockUserRepo::empty();
    let usecase = SignupUseCase {
        users: repo.clone(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };

    let out = usecase
        .execute(signup_input("Ana", "ana@x.com", "pw123"))
        .await
        .unwrap();
    assert!(!out.token.is_empty());
    assert_eq!(out.user.email, "ana@x.com");
    // Stored form is the hash, never the plaintext.
    assert_eq!(out.user.password_hash, "hashed:pw123");

    let second = usecase
        .execute(signup_input("Ana Again", "ana@x.com", "other"))
        .await;
    assert!(matches!(second, Err(ApiError::DuplicateEmail)));
}

#[tokio::test]
async fn should_reject_signup_with_malformed_email() {
    let usecase = SignupUseCase {
        users: MockUserRepo::empty(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let result = usecase.execute(signup_input("Ana", "not-an-email", "pw")).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn should_reject_signup_with_empty_name_or_password() {
    let usecase = SignupUseCase {
        users: MockUserRepo::empty(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let no_name = usecase.execute(signup_input("  ", "a@x.com", "pw")).await;
    assert!(matches!(no_name, Err(ApiError::Validation(_))));

    let no_password = usecase.execute(signup_input("Ana", "a@x.com", "")).await;
    assert!(matches!(no_password, Err(ApiError::Validation(_))));
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_matching_password() {
    let user = test_user("ana@x.com", "pw123");
    let user_id = user.id;
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };

    let out = usecase
        .execute(LoginInput {
            email: "ana@x.com".into(),
            password: "pw123".into(),
        })
        .await
        .unwrap();
    assert_eq!(out.user.id, user_id);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![test_user("ana@x.com", "pw123")]),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };

    let unknown = usecase
        .execute(LoginInput {
            email: "nobody@x.com".into(),
            password: "pw123".into(),
        })
        .await
        .unwrap_err();
    let wrong = usecase
        .execute(LoginInput {
            email: "ana@x.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(unknown, ApiError::InvalidCredentials));
    assert!(matches!(wrong, ApiError::InvalidCredentials));
    // Same kind and same message — no account enumeration.
    assert_eq!(unknown.kind(), wrong.kind());
    assert_eq!(unknown.to_string(), wrong.to_string());
}

// ── Current user ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_user_behind_issued_token() {
    let user = test_user("ana@x.com", "pw123");
    let user_id = user.id;
    let (token, _) = issue_session_token(user_id, TEST_JWT_SECRET).unwrap();

    let usecase = CurrentUserUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let resolved = usecase.execute(&token).await.unwrap();
    assert_eq!(resolved.id, user_id);
}

#[tokio::test]
async fn should_reject_token_for_deleted_user() {
    let (token, _) = issue_session_token(uuid::Uuid::now_v7(), TEST_JWT_SECRET).unwrap();
    let usecase = CurrentUserUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let result = usecase.execute(&token).await;
    assert!(matches!(result, Err(ApiError::Unauthenticated)));
}

#[tokio::test]
async fn should_reject_garbage_and_foreign_tokens() {
    let usecase = CurrentUserUseCase {
        users: MockUserRepo::new(vec![test_user("ana@x.com", "pw123")]),
        jwt_secret: TEST_JWT_SECRET.into(),
    };

    let garbage = usecase.execute("not-a-jwt").await;
    assert!(matches!(garbage, Err(ApiError::Unauthenticated)));

    let (foreign, _) = issue_session_token(uuid::Uuid::now_v7(), "other-secret").unwrap();
    let wrong_secret = usecase.execute(&foreign).await;
    assert!(matches!(wrong_secret, Err(ApiError::Unauthenticated)));
}

// ── End-to-end scenario ──────────────────────────────────────────────────────

#[tokio::test]
async fn signup_then_login_round_trip() {
    let repo = MockUserRepo::empty();
    let signup = SignupUseCase {
        users: repo.clone(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let created = signup
        .execute(signup_input("Ana", "ana@x.com", "pw123"))
        .await
        .unwrap();

    let login = LoginUseCase {
        users: repo.clone(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let session = login
        .execute(LoginInput {
            email: "ana@x.com".into(),
            password: "pw123".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.user.id, created.user.id);

    let me = CurrentUserUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.into(),
    };
    let resolved = me.execute(&session.token).await.unwrap();
    assert_eq!(resolved.id, created.user.id);
}
