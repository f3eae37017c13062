use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::identifiable::Identifiable;

/// Callback receiving the complete current contents of a collection.
pub type ChangeCallback<T> = Arc<dyn Fn(Vec<T>) + Send + Sync + 'static>;

/// Generic repository trait for live change notifications on a collection
///
/// `on_change` is called once with the current full collection before `subscribe` returns,
/// and again with a fresh full snapshot after every create, update or delete. Snapshots may
/// be coalesced: a burst of writes can produce a single delivery of the latest state.
#[async_trait]
pub trait Subscribe<T: Identifiable>: Send + Sync {
    async fn subscribe(
        &self,
        on_change: ChangeCallback<T>,
    ) -> Result<Subscription, Box<dyn std::error::Error + Send + Sync>>;
}

/// Handle of a live listener.
///
/// The listener stops exactly once: on [`Subscription::release`] or when the handle is
/// dropped, whichever comes first.
#[derive(Debug)]
pub struct Subscription {
    collection: &'static str,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn from_task(collection: &'static str, task: JoinHandle<()>) -> Self {
        debug!(collection, "subscription started");
        Self {
            collection,
            task: Some(task),
        }
    }

    /// Feeds `on_change` from a snapshot channel, delivering the current value right away.
    pub fn watch<T>(
        collection: &'static str,
        mut changes: watch::Receiver<Arc<Vec<T>>>,
        on_change: ChangeCallback<T>,
    ) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let initial = changes.borrow_and_update().clone();
        on_change(initial.as_ref().clone());

        let task = tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let snapshot = changes.borrow_and_update().clone();
                on_change(snapshot.as_ref().clone());
            }
        });
        Self::from_task(collection, task)
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn release(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(collection = self.collection, "subscription released");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop();
    }
}
