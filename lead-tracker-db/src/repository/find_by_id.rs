use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a single entity by its key
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Some(T))` - The entity if it exists
    /// * `Ok(None)` - If no entity is stored under `id`
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
