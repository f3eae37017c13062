use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::delete_by_id::DeleteById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl DeleteById<UserAccountModel> for UserRepositoryImpl {
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}
