use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::PgPool;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn load_all_from(
        pool: &PgPool,
    ) -> Result<Vec<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM users ORDER BY seq"#)
            .fetch_all(pool)
            .await?;

        rows.iter().map(UserAccountModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadAll<UserAccountModel> for UserRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<UserAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_from(&self.pool).await
    }
}
