use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for adding one entity to a collection
///
/// Collections with store-assigned keys (`clients`) ignore the incoming id and return the
/// entity carrying its new key. Collections keyed by an external id (`users`) keep the id
/// the caller provided and reject a key that is already present.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<ClientRecordModel> for MemoryStore {
///     async fn create(&self, item: ClientRecordModel) -> Result<ClientRecordModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    /// Persist a new entity
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity with generated fields populated
    /// * `Err` - An error if the write could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
