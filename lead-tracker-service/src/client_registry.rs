use lead_tracker_api::domain::client_fields::NewClientFields;
use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::repository::{ClientRepository, Create, DeleteById, LoadAll, Subscribe, Subscription};
use lead_tracker_db::utils::now_timestamp;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Creation, listing and deletion of client records.
pub struct ClientRegistry {
    clients: Arc<dyn ClientRepository>,
}

impl ClientRegistry {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Stores a new Pending record without notes, created by the session's user.
    ///
    /// Nothing is written when a required field is blank or a field is too long.
    pub async fn create(
        &self,
        session: &ActiveSession,
        fields: NewClientFields,
    ) -> ApiResult<ClientRecordModel> {
        let fields = fields.validated()?;
        let record = ClientRecordModel::from_fields(&fields, &session.email, now_timestamp())
            .map_err(ApiError::ValidationError)?;

        let created = self.clients.create(record).await?;
        info!(client_id = %created.id, company = %created.company, created_by = %session.email, "client created");
        Ok(created)
    }

    /// Whole collection in creation order.
    pub async fn list(&self) -> ApiResult<Vec<ClientRecordModel>> {
        Ok(self.clients.load_all().await?)
    }

    pub async fn subscribe<F>(&self, on_change: F) -> ApiResult<Subscription>
    where
        F: Fn(Vec<ClientRecordModel>) + Send + Sync + 'static,
    {
        Ok(self.clients.subscribe(Arc::new(on_change)).await?)
    }

    /// Removes a record. The caller has already confirmed the deletion with the user.
    pub async fn delete(&self, session: &ActiveSession, id: Uuid) -> ApiResult<()> {
        if let Err(e) = session.require_can_delete("Deleting a client") {
            warn!(client_id = %id, email = %session.email, "client deletion rejected");
            return Err(e);
        }

        if !self.clients.delete_by_id(id).await? {
            return Err(ApiError::NotFound(format!("Client {id}")));
        }
        info!(client_id = %id, deleted_by = %session.email, "client deleted");
        Ok(())
    }
}
