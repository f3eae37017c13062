use async_trait::async_trait;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::repository::delete_by_id::DeleteById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &ClientRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(r#"DELETE FROM clients WHERE id = $1"#)
            .bind(id)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl DeleteById<ClientRecordModel> for ClientRepositoryImpl {
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::client_repository::test_utils::create_test_client;
    use crate::test_helper::setup_test_context;
    use lead_tracker_db::repository::create::Create;
    use lead_tracker_db::repository::delete_by_id::DeleteById;
    use lead_tracker_db::repository::find_by_id::FindById;
    use serial_test::serial;
    use tokio_test::assert_ok;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_delete_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = ctx.repos().client_repository();
        let saved = client_repo.create(create_test_client("Delete Co")).await?;

        assert!(assert_ok!(client_repo.delete_by_id(saved.id).await));
        assert!(!client_repo.delete_by_id(saved.id).await?);
        assert!(client_repo.find_by_id(saved.id).await?.is_none());

        Ok(())
    }
}
