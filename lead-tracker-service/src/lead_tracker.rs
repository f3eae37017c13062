//! Wiring of the services onto a store back-end.

use lead_tracker_api::service::{IdentityProvider, SessionCache};
use lead_tracker_api::Settings;
use lead_tracker_db::memory::{MemoryIdentityProvider, MemoryStore};
use lead_tracker_db::repository::{ClientRepository, UserRepository};
use lead_tracker_postgres::PostgresRepositories;
use std::sync::Arc;

use crate::client_registry::ClientRegistry;
use crate::follow_up::FollowUpWorkflow;
use crate::identity_gate::IdentityGate;
use crate::session_cache::{FileSessionCache, MemorySessionCache};
use crate::shell::Shell;
use crate::user_admin::UserAdministration;

/// All components of the application sharing one store and one identity provider.
pub struct LeadTracker {
    pub identity_gate: Arc<IdentityGate>,
    pub client_registry: ClientRegistry,
    pub follow_up: FollowUpWorkflow,
    pub user_admin: UserAdministration,
}

impl LeadTracker {
    pub fn new(
        settings: Settings,
        provider: Arc<dyn IdentityProvider>,
        clients: Arc<dyn ClientRepository>,
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn SessionCache>,
    ) -> Self {
        Self {
            identity_gate: Arc::new(IdentityGate::new(
                settings.clone(),
                provider,
                users.clone(),
                cache,
            )),
            client_registry: ClientRegistry::new(clients.clone()),
            follow_up: FollowUpWorkflow::new(clients),
            user_admin: UserAdministration::new(settings, users),
        }
    }

    /// Process-local store, identity provider and session cache.
    pub fn in_memory(settings: Settings) -> Self {
        let store = MemoryStore::new();
        Self::new(
            settings,
            Arc::new(MemoryIdentityProvider::new()),
            store.clients(),
            store.users(),
            Arc::new(MemorySessionCache::new()),
        )
    }

    /// PostgreSQL store and identity provider with the session cached at
    /// `settings.session_cache_path`.
    pub async fn with_postgres(
        settings: Settings,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let repos = PostgresRepositories::connect(&settings).await?;
        let cache = Arc::new(FileSessionCache::new(settings.session_cache_path.clone()));
        Ok(Self::new(
            settings,
            repos.identity_provider(),
            repos.client_repository(),
            repos.user_repository(),
            cache,
        ))
    }

    pub fn shell(&self) -> Shell {
        Shell::new(self.identity_gate.clone())
    }
}
