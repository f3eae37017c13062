use lead_tracker_db::repository::{ChangeCallback, Subscription};
use sqlx::postgres::{PgListener, PgPool};
use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Subscribes to the `<collection>_changed` notification channel raised by the
/// collection's trigger and delivers a freshly loaded snapshot after each notification.
///
/// The listener is registered before the initial snapshot is read, so no change between
/// the two is lost.
pub async fn subscribe_collection<T, L, Fut>(
    pool: Arc<PgPool>,
    collection: &'static str,
    load: L,
    on_change: ChangeCallback<T>,
) -> Result<Subscription, Box<dyn Error + Send + Sync>>
where
    T: Send + 'static,
    L: Fn(Arc<PgPool>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, Box<dyn Error + Send + Sync>>> + Send + 'static,
{
    let channel = format!("{collection}_changed");
    let mut listener = PgListener::connect_with(&pool).await?;
    listener.listen(&channel).await?;

    on_change(load(pool.clone()).await?);

    let task = tokio::spawn(async move {
        loop {
            match listener.recv().await {
                Ok(_) => match load(pool.clone()).await {
                    Ok(snapshot) => on_change(snapshot),
                    Err(e) => warn!(collection, error = %e, "failed to reload collection"),
                },
                Err(e) => {
                    warn!(collection, error = %e, "change listener stopped");
                    break;
                }
            }
        }
    });

    Ok(Subscription::from_task(collection, task))
}
