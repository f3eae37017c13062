use async_trait::async_trait;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_api::service::{IdentityProvider, ProviderAccount};
use lead_tracker_db::utils::password::{hash_password, verify_password};
use sqlx::postgres::PgPool;
use sqlx::Row;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Email and password accounts kept in the `identities` table.
pub struct PgIdentityProvider {
    pool: Arc<PgPool>,
}

impl PgIdentityProvider {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> ApiError {
    ApiError::StoreError(err.to_string())
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ProviderAccount> {
        let email = email.trim().to_lowercase();
        let row = sqlx::query(r#"SELECT subject_id, password_hash FROM identities WHERE email = $1"#)
            .bind(&email)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(store_error)?;

        let Some(row) = row else {
            debug!(%email, "sign in for unknown email");
            return Err(ApiError::AuthError);
        };

        let subject_id: Uuid = row.try_get("subject_id").map_err(store_error)?;
        let password_hash: String = row.try_get("password_hash").map_err(store_error)?;
        if !verify_password(password, &password_hash).map_err(ApiError::StoreError)? {
            return Err(ApiError::AuthError);
        }

        Ok(ProviderAccount { subject_id, email })
    }

    async fn sign_up(&self, email: &str, password: &str) -> ApiResult<ProviderAccount> {
        let email = email.trim().to_lowercase();
        let subject_id = Uuid::new_v4();
        let password_hash = hash_password(password).map_err(ApiError::StoreError)?;

        let result = sqlx::query(
            r#"
            INSERT INTO identities (subject_id, email, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(subject_id)
        .bind(&email)
        .bind(&password_hash)
        .execute(self.pool.as_ref())
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::DuplicateAccountError(email));
        }

        Ok(ProviderAccount { subject_id, email })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use lead_tracker_api::error::ApiError;
    use lead_tracker_api::service::IdentityProvider;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_sign_up_then_sign_in() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let provider = ctx.repos().identity_provider();
        let email = format!("{}@Example.com", Uuid::new_v4().simple());

        let account = provider.sign_up(&email, "hunter22").await?;
        assert_eq!(account.email, email.to_lowercase());

        let signed_in = provider.sign_in(&email.to_lowercase(), "hunter22").await?;
        assert_eq!(signed_in.subject_id, account.subject_id);

        assert_eq!(
            provider.sign_in(&email, "wrong-password").await,
            Err(ApiError::AuthError)
        );
        assert!(matches!(
            provider.sign_up(&email, "another1").await,
            Err(ApiError::DuplicateAccountError(_))
        ));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_sign_in_unknown_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let provider = ctx.repos().identity_provider();

        assert_eq!(
            provider.sign_in("nobody@nowhere.test", "whatever").await,
            Err(ApiError::AuthError)
        );

        Ok(())
    }
}
