use async_trait::async_trait;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::repository::create::Create;
use sqlx::types::Json;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ClientRepositoryImpl,
        mut item: ClientRecordModel,
    ) -> Result<ClientRecordModel, Box<dyn Error + Send + Sync>> {
        // Keys of the clients collection are always assigned here
        item.id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO clients
            (id, company, contact_name, email, full_name, industry, phone, comment, status, created_at, created_by, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(item.id)
        .bind(item.company.as_str())
        .bind(item.contact_name.as_str())
        .bind(item.email.as_str())
        .bind(item.full_name.as_deref())
        .bind(item.industry.as_deref())
        .bind(item.phone.as_deref())
        .bind(item.comment.as_deref())
        .bind(item.status)
        .bind(item.created_at.as_str())
        .bind(item.created_by.as_str())
        .bind(Json(item.notes.clone()))
        .execute(repo.pool.as_ref())
        .await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<ClientRecordModel> for ClientRepositoryImpl {
    async fn create(&self, item: ClientRecordModel) -> Result<ClientRecordModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::client_repository::test_utils::create_test_client;
    use crate::test_helper::setup_test_context;
    use lead_tracker_db::models::client::common_enums::ClientStatus;
    use lead_tracker_db::repository::create::Create;
    use lead_tracker_db::repository::find_by_id::FindById;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn test_create() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = ctx.repos().client_repository();

        let saved = client_repo.create(create_test_client("Create Co")).await?;
        assert!(!saved.id.is_nil());

        let loaded = client_repo.find_by_id(saved.id).await?.expect("client was stored");
        assert_eq!(loaded.company.as_str(), "Create Co");
        assert_eq!(loaded.status, ClientStatus::Pending);
        assert_eq!(loaded.phone.as_deref(), Some("555-0100"));
        assert!(loaded.notes.is_empty());

        Ok(())
    }
}
