use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for fetching a whole collection
///
/// Entities come back in creation order. There is no paging: callers filter in memory.
#[async_trait]
pub trait LoadAll<T: Identifiable>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
