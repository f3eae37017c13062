use async_trait::async_trait;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::repository::subscribe::{ChangeCallback, Subscribe, Subscription};
use std::error::Error;

use super::repo_impl::{ClientRepositoryImpl, CLIENTS_COLLECTION};
use crate::repository::listener::subscribe_collection;

#[async_trait]
impl Subscribe<ClientRecordModel> for ClientRepositoryImpl {
    async fn subscribe(
        &self,
        on_change: ChangeCallback<ClientRecordModel>,
    ) -> Result<Subscription, Box<dyn Error + Send + Sync>> {
        subscribe_collection(
            self.pool.clone(),
            CLIENTS_COLLECTION,
            |pool| async move { ClientRepositoryImpl::load_all_from(&pool).await },
            on_change,
        )
        .await
    }
}
