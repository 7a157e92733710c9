use crate::domain::ports::{CollectionQuery, Document, SnapshotReceiver};
use crate::error::AppError;
use serde_json::Value;
use std::cmp::Ordering;
use std::future::Future;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info_span, warn, Instrument};

const SNAPSHOT_BUFFER: usize = 16;
pub const CHANGE_FEED_CAPACITY: usize = 256;

/// Feeds a subscriber with full query results: one right away, then one after
/// every change notification for the queried collection.
///
/// `changes` must be subscribed before this is called so that writes racing
/// the first fetch still trigger a refresh. The task ends when the receiver is
/// dropped, the change feed closes, or a fetch fails (the error is delivered
/// as the last message).
pub fn spawn_snapshot_pump<F, Fut>(
    query: CollectionQuery,
    mut changes: broadcast::Receiver<String>,
    fetch: F,
) -> SnapshotReceiver
where
    F: Fn(CollectionQuery) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<Document>, AppError>> + Send,
{
    let (tx, rx) = mpsc::channel(SNAPSHOT_BUFFER);
    let span = info_span!(
        "snapshot_pump",
        collection = %query.collection,
        owner = ?query.owner
    );

    tokio::spawn(
        async move {
            loop {
                let snapshot = fetch(query.clone()).await;
                let failed = snapshot.is_err();
                if tx.send(snapshot).await.is_err() {
                    debug!("Subscriber dropped, stopping");
                    return;
                }
                if failed {
                    warn!("Snapshot query failed, subscription closed");
                    return;
                }

                loop {
                    tokio::select! {
                        _ = tx.closed() => {
                            debug!("Subscriber dropped, stopping");
                            return;
                        }
                        msg = changes.recv() => match msg {
                            Ok(collection) if collection == query.collection => break,
                            Ok(_) => continue,
                            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                                debug!("Change feed lagged by {}, refreshing", skipped);
                                break;
                            }
                            Err(broadcast::error::RecvError::Closed) => return,
                        }
                    }
                }
            }
        }
        .instrument(span),
    );

    rx
}

/// Ascending order on `field`, documents missing the field first, ties by id.
pub fn sort_documents(docs: &mut [Document], field: &str) {
    docs.sort_by(|a, b| {
        compare_values(a.fields.get(field), b.fields.get(field)).then_with(|| a.id.cmp(&b.id))
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
