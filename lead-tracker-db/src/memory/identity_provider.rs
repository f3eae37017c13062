use async_trait::async_trait;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_api::service::identity_provider::{IdentityProvider, ProviderAccount};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::utils::{hash_password, verify_password};

struct Credential {
    subject_id: Uuid,
    password_hash: String,
}

/// In-process identity provider keyed by lower-cased email.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Credential>>,
    sign_ups: AtomicUsize,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts created through `sign_up`.
    pub fn sign_up_count(&self) -> usize {
        self.sign_ups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ProviderAccount> {
        let email = email.trim().to_lowercase();
        let (subject_id, password_hash) = {
            let accounts = self.accounts.read();
            let credential = accounts.get(&email).ok_or(ApiError::AuthError)?;
            (credential.subject_id, credential.password_hash.clone())
        };

        if verify_password(password, &password_hash).map_err(ApiError::StoreError)? {
            Ok(ProviderAccount { subject_id, email })
        } else {
            Err(ApiError::AuthError)
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> ApiResult<ProviderAccount> {
        let email = email.trim().to_lowercase();
        let password_hash = hash_password(password).map_err(ApiError::StoreError)?;

        let mut accounts = self.accounts.write();
        if accounts.contains_key(&email) {
            return Err(ApiError::DuplicateAccountError(email));
        }
        let subject_id = Uuid::new_v4();
        accounts.insert(
            email.clone(),
            Credential {
                subject_id,
                password_hash,
            },
        );
        self.sign_ups.fetch_add(1, Ordering::SeqCst);
        Ok(ProviderAccount { subject_id, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let provider = MemoryIdentityProvider::new();
        let created = provider.sign_up("Ana@Example.com", "s3cret!").await.unwrap();
        assert_eq!(created.email, "ana@example.com");

        let signed_in = provider.sign_in("ana@example.com", "s3cret!").await.unwrap();
        assert_eq!(signed_in.subject_id, created.subject_id);
        assert_eq!(provider.sign_up_count(), 1);
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let provider = MemoryIdentityProvider::new();
        provider.sign_up("ana@example.com", "s3cret!").await.unwrap();

        assert_eq!(provider.sign_in("ana@example.com", "nope").await, Err(ApiError::AuthError));
        assert_eq!(provider.sign_in("bob@example.com", "s3cret!").await, Err(ApiError::AuthError));
    }

    #[tokio::test]
    async fn test_duplicate_sign_up() {
        let provider = MemoryIdentityProvider::new();
        provider.sign_up("ana@example.com", "s3cret!").await.unwrap();

        let err = provider.sign_up("ANA@example.com", "other1").await.unwrap_err();
        assert!(matches!(err, ApiError::DuplicateAccountError(_)));
        assert_eq!(provider.sign_up_count(), 1);
    }
}
