use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for applying a partial update to one entity
///
/// The patch type `P` names the fields being written; everything else is left as stored.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
/// * `P` - The patch describing the fields to change
#[async_trait]
pub trait UpdateById<T: Identifiable, P: Send + 'static>: Send + Sync {
    /// # Returns
    /// * `Ok(Some(T))` - The entity as stored after the update
    /// * `Ok(None)` - If no entity is stored under `id`
    /// * `Err` - An error if the update could not be executed
    async fn update_by_id(&self, id: Uuid, patch: P) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
