use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(UserAccountModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<UserAccountModel> for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use lead_tracker_db::repository::find_by_id::FindById;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_find_missing_user() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = ctx.repos().user_repository();

        assert!(user_repo.find_by_id(Uuid::new_v4()).await?.is_none());

        Ok(())
    }
}
