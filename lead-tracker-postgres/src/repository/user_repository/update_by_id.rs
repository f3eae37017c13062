use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::{UserAccountModel, UserUpdate};
use lead_tracker_db::repository::update_by_id::UpdateById;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn update_by_id_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
        patch: UserUpdate,
    ) -> Result<Option<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            UPDATE users SET
                display_name = COALESCE($2, display_name),
                can_delete = COALESCE($3, can_delete)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.display_name.as_deref())
        .bind(patch.can_delete)
        .fetch_optional(repo.pool.as_ref())
        .await?;

        row.as_ref().map(UserAccountModel::try_from_row).transpose()
    }
}

#[async_trait]
impl UpdateById<UserAccountModel, UserUpdate> for UserRepositoryImpl {
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UserUpdate,
    ) -> Result<Option<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::update_by_id_impl(self, id, patch).await
    }
}
