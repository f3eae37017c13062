use async_trait::async_trait;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::PgPool;
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn load_all_from(
        pool: &PgPool,
    ) -> Result<Vec<ClientRecordModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM clients ORDER BY seq"#)
            .fetch_all(pool)
            .await?;

        rows.iter().map(ClientRecordModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadAll<ClientRecordModel> for ClientRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<ClientRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_from(&self.pool).await
    }
}
