use async_trait::async_trait;
use lead_tracker_db::models::client::client_record::{ClientRecordModel, ClientUpdate};
use lead_tracker_db::repository::update_by_id::UpdateById;
use crate::utils::TryFromRow;
use sqlx::types::Json;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn update_by_id_impl(
        repo: &ClientRepositoryImpl,
        id: Uuid,
        patch: ClientUpdate,
    ) -> Result<Option<ClientRecordModel>, Box<dyn Error + Send + Sync>> {
        // The note is appended inside the statement, so concurrent writers never overwrite
        // each other's notes.
        let row = sqlx::query(
            r#"
            UPDATE clients SET
                notes = CASE
                    WHEN $2::jsonb IS NULL THEN notes
                    ELSE notes || jsonb_build_array($2::jsonb)
                END,
                status = COALESCE($3, status)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.append_note.map(Json))
        .bind(patch.status)
        .fetch_optional(repo.pool.as_ref())
        .await?;

        row.as_ref().map(ClientRecordModel::try_from_row).transpose()
    }
}

#[async_trait]
impl UpdateById<ClientRecordModel, ClientUpdate> for ClientRepositoryImpl {
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ClientUpdate,
    ) -> Result<Option<ClientRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::update_by_id_impl(self, id, patch).await
    }
}
