use lead_tracker_api::Settings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::repository::client_repository::ClientRepositoryImpl;
use crate::repository::db_init::init_database;
use crate::repository::identity_repository::PgIdentityProvider;
use crate::repository::user_repository::UserRepositoryImpl;

/// Hands out the PostgreSQL-backed collections and identity provider, all sharing one pool.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a pool against `settings.database_url` and brings the schema up to date.
    pub async fn connect(settings: &Settings) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&settings.database_url)
            .await?;

        init_database(&pool).await?;
        info!(max_connections = settings.max_connections, "connected to document store");

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    pub fn client_repository(&self) -> Arc<ClientRepositoryImpl> {
        Arc::new(ClientRepositoryImpl::new(self.pool.clone()))
    }

    pub fn user_repository(&self) -> Arc<UserRepositoryImpl> {
        Arc::new(UserRepositoryImpl::new(self.pool.clone()))
    }

    pub fn identity_provider(&self) -> Arc<PgIdentityProvider> {
        Arc::new(PgIdentityProvider::new(self.pool.clone()))
    }
}
