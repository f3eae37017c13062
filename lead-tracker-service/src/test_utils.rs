use lead_tracker_api::domain::client_fields::NewClientFields;
use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::Settings;
use lead_tracker_db::memory::{MemoryIdentityProvider, MemoryStore};
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use std::sync::Arc;

use crate::identity_gate::IdentityGate;
use crate::session_cache::MemorySessionCache;
use crate::user_admin::UserAdministration;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const MASTER_PIN: &str = "202500";

/// Memory-backed collaborators shared by the service tests.
pub struct TestBackend {
    pub settings: Settings,
    pub store: MemoryStore,
    pub provider: Arc<MemoryIdentityProvider>,
    pub cache: Arc<MemorySessionCache>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            store: MemoryStore::new(),
            provider: Arc::new(MemoryIdentityProvider::new()),
            cache: Arc::new(MemorySessionCache::new()),
        }
    }

    pub fn identity_gate(&self) -> IdentityGate {
        IdentityGate::new(
            self.settings.clone(),
            self.provider.clone(),
            self.store.users(),
            self.cache.clone(),
        )
    }

    pub fn user_admin(&self) -> UserAdministration {
        UserAdministration::new(self.settings.clone(), self.store.users())
    }
}

pub fn admin_session() -> ActiveSession {
    ActiveSession::new(ADMIN_EMAIL, "Admin", true)
}

pub fn member_session() -> ActiveSession {
    ActiveSession::new("ana@example.com", "Ana", false)
}

pub fn client_fields(company: &str) -> NewClientFields {
    let mut fields = NewClientFields::new(company, "Jo Doe", "jo@acme.test");
    fields.industry = Some("Retail".to_string());
    fields
}

/// An unsaved record created by `ana@example.com` at a fixed time.
pub fn client_record(company: &str) -> ClientRecordModel {
    ClientRecordModel::from_fields(&client_fields(company), "ana@example.com", "2024-05-02 10:00:00".into())
        .unwrap()
}
