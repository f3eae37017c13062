use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiResult;

/// Account as known to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAccount {
    /// Stable subject id, also the key of the matching entry in the `users` collection
    pub subject_id: Uuid,
    pub email: String,
}

/// Email and password authentication backend.
///
/// Implementations classify failures themselves:
/// * `sign_in` fails with `ApiError::AuthError` on unknown email or wrong password
/// * `sign_up` fails with `ApiError::DuplicateAccountError` when the email is taken
/// * anything else surfaces as `ApiError::StoreError`
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ProviderAccount>;

    async fn sign_up(&self, email: &str, password: &str) -> ApiResult<ProviderAccount>;
}
