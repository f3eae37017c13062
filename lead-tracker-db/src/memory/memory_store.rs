use std::sync::Arc;

use crate::memory::memory_collection::MemoryCollection;
use crate::models::client::client_record::ClientRecordModel;
use crate::models::user::user_account::UserAccountModel;

/// In-memory document store holding the `clients` and `users` collections.
///
/// Cloning shares the underlying collections.
#[derive(Clone)]
pub struct MemoryStore {
    clients: Arc<MemoryCollection<ClientRecordModel>>,
    users: Arc<MemoryCollection<UserAccountModel>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(MemoryCollection::new("clients")),
            users: Arc::new(MemoryCollection::new("users")),
        }
    }

    pub fn clients(&self) -> Arc<MemoryCollection<ClientRecordModel>> {
        self.clients.clone()
    }

    pub fn users(&self) -> Arc<MemoryCollection<UserAccountModel>> {
        self.users.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
