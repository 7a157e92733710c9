use crate::domain::ports::{Document, SnapshotReceiver};
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::error;

/// What a screen bound to a collection renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> CollectionState<T> {
    fn loading() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }

    fn idle() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

/// A live view over a store subscription. Every snapshot replaces `items`
/// wholesale; a failed snapshot keeps the last items, sets `error` and clears
/// `loading`. Dropping the view unsubscribes.
pub struct LiveCollection<T> {
    state: watch::Receiver<CollectionState<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T> LiveCollection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// View for a caller with no session: empty, not loading, never updates.
    pub fn empty() -> Self {
        let (_tx, rx) = watch::channel(CollectionState::idle());
        Self { state: rx, task: None }
    }

    /// View for a subscription that could not be opened.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut state = CollectionState::idle();
        state.error = Some(message.into());
        let (_tx, rx) = watch::channel(state);
        Self { state: rx, task: None }
    }

    pub fn spawn(mut snapshots: SnapshotReceiver) -> Self {
        let (tx, rx) = watch::channel(CollectionState::loading());

        let task = tokio::spawn(async move {
            while let Some(snapshot) = snapshots.recv().await {
                let decoded = snapshot.and_then(|docs| {
                    docs.iter().map(Document::decode::<T>).collect::<Result<Vec<T>, _>>()
                });

                match decoded {
                    Ok(items) => {
                        tx.send_replace(CollectionState { items, loading: false, error: None });
                    }
                    Err(e) => {
                        error!("Collection subscription error: {:?}", e);
                        tx.send_modify(|state| {
                            state.loading = false;
                            state.error = Some(e.to_string());
                        });
                    }
                }
            }
        });

        Self { state: rx, task: Some(task) }
    }

    pub fn state(&self) -> CollectionState<T> {
        self.state.borrow().clone()
    }

    /// Waits for the next published state. Returns `false` once the
    /// subscription has ended and no further updates will arrive.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// Waits until the state satisfies `ready`, or the subscription ends.
    pub async fn wait_for(
        &mut self,
        ready: impl FnMut(&CollectionState<T>) -> bool,
    ) -> Option<CollectionState<T>> {
        self.state.wait_for(ready).await.ok().map(|state| state.clone())
    }
}

impl<T> Drop for LiveCollection<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
