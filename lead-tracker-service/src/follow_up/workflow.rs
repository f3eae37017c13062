use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_db::models::client::client_record::{ClientRecordModel, ClientUpdate};
use lead_tracker_db::models::client::common_enums::ClientStatus;
use lead_tracker_db::models::client::follow_up_note::FollowUpNote;
use lead_tracker_db::repository::{ClientRepository, Subscribe, Subscription, UpdateById};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::board::FollowUpBoard;

/// Appends follow-up notes and moves records between Pending and Closed.
pub struct FollowUpWorkflow {
    clients: Arc<dyn ClientRepository>,
}

impl FollowUpWorkflow {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Appends a note stamped with the current time and applies `new_status` if given.
    pub async fn add_note(
        &self,
        record: &ClientRecordModel,
        text: &str,
        new_status: Option<ClientStatus>,
    ) -> ApiResult<ClientRecordModel> {
        let update = ClientUpdate::note(Self::note(text)?, new_status);
        self.persist(record.id, update).await
    }

    /// Submits a note through `board`: applied locally first, then confirmed or rolled
    /// back once the store answers.
    pub async fn submit_note(
        &self,
        board: &Mutex<FollowUpBoard>,
        record_id: Uuid,
        text: &str,
        new_status: Option<ClientStatus>,
    ) -> ApiResult<ClientRecordModel> {
        let update = ClientUpdate::note(Self::note(text)?, new_status);
        let mutation = board.lock().begin(record_id, &update)?;

        match self.persist(record_id, update).await {
            Ok(persisted) => {
                board.lock().commit(mutation, persisted.clone());
                Ok(persisted)
            }
            Err(e) => {
                board.lock().fail(mutation, e.to_string());
                Err(e)
            }
        }
    }

    /// Keeps `board` in sync with the `clients` collection until the subscription is released.
    pub async fn attach(&self, board: Arc<Mutex<FollowUpBoard>>) -> ApiResult<Subscription> {
        Ok(self
            .clients
            .subscribe(Arc::new(move |records| board.lock().apply_snapshot(records)))
            .await?)
    }

    fn note(text: &str) -> ApiResult<FollowUpNote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::ValidationError("Note text is required".to_string()));
        }
        Ok(FollowUpNote::now(text))
    }

    async fn persist(&self, id: Uuid, update: ClientUpdate) -> ApiResult<ClientRecordModel> {
        let status = update.status;
        let updated = self
            .clients
            .update_by_id(id, update)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Client {id}")))?;

        info!(client_id = %id, status = ?status, notes = updated.notes.len(), "follow-up recorded");
        Ok(updated)
    }
}
