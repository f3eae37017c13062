use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::create::Create;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &UserRepositoryImpl,
        item: UserAccountModel,
    ) -> Result<UserAccountModel, Box<dyn Error + Send + Sync>> {
        // User entries are keyed by the identity provider's subject id.
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, can_delete)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(item.email.as_str())
        .bind(item.display_name.as_str())
        .bind(item.can_delete)
        .execute(repo.pool.as_ref())
        .await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<UserAccountModel> for UserRepositoryImpl {
    async fn create(&self, item: UserAccountModel) -> Result<UserAccountModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
