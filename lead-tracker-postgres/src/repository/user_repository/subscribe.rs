use async_trait::async_trait;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::subscribe::{ChangeCallback, Subscribe, Subscription};
use std::error::Error;

use super::repo_impl::{UserRepositoryImpl, USERS_COLLECTION};
use crate::repository::listener::subscribe_collection;

#[async_trait]
impl Subscribe<UserAccountModel> for UserRepositoryImpl {
    async fn subscribe(
        &self,
        on_change: ChangeCallback<UserAccountModel>,
    ) -> Result<Subscription, Box<dyn Error + Send + Sync>> {
        subscribe_collection(
            self.pool.clone(),
            USERS_COLLECTION,
            |pool| async move { UserRepositoryImpl::load_all_from(&pool).await },
            on_change,
        )
        .await
    }
}
