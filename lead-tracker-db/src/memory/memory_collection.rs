use async_trait::async_trait;
use parking_lot::RwLock;
use std::error::Error;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::client::client_record::{ClientRecordModel, ClientUpdate};
use crate::models::identifiable::Identifiable;
use crate::models::user::user_account::{UserAccountModel, UserUpdate};
use crate::repository::{
    ChangeCallback, Create, DeleteById, FindById, LoadAll, Subscribe, Subscription, UpdateById,
};

/// One in-process collection with document-store semantics.
///
/// Items keep creation order. Every successful write publishes the full collection to the
/// subscribers.
pub struct MemoryCollection<T> {
    name: &'static str,
    items: RwLock<Vec<T>>,
    changes: watch::Sender<Arc<Vec<T>>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl<T> MemoryCollection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        let (changes, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            name,
            items: RwLock::new(Vec::new()),
            changes,
            unavailable: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Makes every following call fail as if the backend were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(format!("Collection '{}' is unavailable", self.name).into());
        }
        Ok(())
    }

    /// Runs `mutate` under the write lock and publishes the result if it changed anything.
    ///
    /// The snapshot is published before the lock is released, so snapshots reach the
    /// watch channel in write order and the last one always matches the collection.
    fn write<R>(&self, mutate: impl FnOnce(&mut Vec<T>) -> (R, bool)) -> R {
        let mut items = self.items.write();
        let (result, changed) = mutate(&mut *items);
        if changed {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.changes.send_replace(Arc::new((*items).clone()));
        }
        result
    }

    fn update_with(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut T),
    ) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.write(|items| match items.iter_mut().find(|item| item.get_id() == id) {
            Some(item) => {
                apply(item);
                (Some(item.clone()), true)
            }
            None => (None, false),
        }))
    }
}

#[async_trait]
impl Create<ClientRecordModel> for MemoryCollection<ClientRecordModel> {
    async fn create(
        &self,
        mut item: ClientRecordModel,
    ) -> Result<ClientRecordModel, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        item.id = Uuid::new_v4();
        let created = item.clone();
        self.write(|items| {
            items.push(item);
            ((), true)
        });
        Ok(created)
    }
}

#[async_trait]
impl Create<UserAccountModel> for MemoryCollection<UserAccountModel> {
    async fn create(
        &self,
        item: UserAccountModel,
    ) -> Result<UserAccountModel, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        let created = item.clone();
        let inserted = self.write(|items| {
            if items.iter().any(|u| u.id == item.id || u.email == item.email) {
                (false, false)
            } else {
                items.push(item);
                (true, true)
            }
        });
        if !inserted {
            return Err(format!("User {} already exists", created.email.as_str()).into());
        }
        Ok(created)
    }
}

#[async_trait]
impl<T> LoadAll<T> for MemoryCollection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.items.read().clone())
    }
}

#[async_trait]
impl<T> FindById<T> for MemoryCollection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.items.read().iter().find(|item| item.get_id() == id).cloned())
    }
}

#[async_trait]
impl UpdateById<ClientRecordModel, ClientUpdate> for MemoryCollection<ClientRecordModel> {
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ClientUpdate,
    ) -> Result<Option<ClientRecordModel>, Box<dyn Error + Send + Sync>> {
        self.update_with(id, |record| patch.apply_to(record))
    }
}

#[async_trait]
impl UpdateById<UserAccountModel, UserUpdate> for MemoryCollection<UserAccountModel> {
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UserUpdate,
    ) -> Result<Option<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        self.update_with(id, |account| patch.apply_to(account))
    }
}

#[async_trait]
impl<T> DeleteById<T> for MemoryCollection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.write(|items| {
            let before = items.len();
            items.retain(|item| item.get_id() != id);
            let removed = items.len() != before;
            (removed, removed)
        }))
    }
}

#[async_trait]
impl<T> Subscribe<T> for MemoryCollection<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    async fn subscribe(
        &self,
        on_change: ChangeCallback<T>,
    ) -> Result<Subscription, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(Subscription::watch(self.name, self.changes.subscribe(), on_change))
    }
}
