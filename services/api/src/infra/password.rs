use anyhow::Context as _;
use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::repository::CredentialHasher;
use crate::error::ApiError;

/// argon2id hasher producing PHC-format strings.
///
/// Hashing and verification are CPU-bound; both run on `spawn_blocking` so a
/// burst of logins cannot stall the reactor.
#[derive(Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| anyhow::anyhow!("hash password: {e}"))
        })
        .await
        .context("join password hashing task")??;
        Ok(hash)
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        let verified = tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("parse stored password hash: {e}"))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(anyhow::anyhow!("verify password: {e}")),
            }
        })
        .await
        .context("join password verification task")??;
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_verify_correct_password() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("pw123").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("pw123").await.unwrap();
        assert!(!hasher.verify("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn should_salt_hashes_uniquely() {
        let hasher = Argon2Hasher;
        let a = hasher.hash("pw123").await.unwrap();
        let b = hasher.hash("pw123").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn should_error_on_malformed_stored_hash() {
        let hasher = Argon2Hasher;
        let result = hasher.verify("pw123", "not-a-phc-string").await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
