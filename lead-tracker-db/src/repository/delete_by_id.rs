use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for removing one entity by its key
#[async_trait]
pub trait DeleteById<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The entity existed and was removed
    /// * `Ok(false)` - Nothing was stored under `id`
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
