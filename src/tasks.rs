//! Async task management for non-blocking page fetches.
//!
//! Fetches run in background tokio tasks while the UI keeps rendering. Results
//! come back to the main event loop through an unbounded channel:
//! 1. `App` issues a [`PageRequest`] and exposes it as pending
//! 2. The main loop hands it to [`TaskSpawner::spawn_fetch_page`]
//! 3. The task sends an [`ApiMessage`] tagged with the request id
//! 4. The main loop polls the channel with `try_recv()` and passes the
//!    message to `App::handle_api_message`

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiError, ArticClient, ArtworkPage};
use crate::error::AppError;
use crate::model::PageRequest;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// A page fetch finished.
    PageFetched {
        /// The request this answers.
        request: PageRequest,
        /// The page, or a user-facing error description.
        result: Result<ArtworkPage, String>,
    },
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task to fetch the requested page.
    pub fn spawn_fetch_page(&self, client: &ArticClient, request: PageRequest) {
        let tx = self.tx.clone();
        let client = client.clone();
        debug!(page = request.page, request_id = request.id, "Spawning page fetch");
        tokio::spawn(async move {
            let result = client
                .fetch_page(request.page)
                .await
                .map_err(|e| describe_failure(request, e));
            let _ = tx.send(ApiMessage::PageFetched { request, result });
        });
    }
}

/// Log the underlying error and turn it into the message shown to the user.
fn describe_failure(request: PageRequest, error: ApiError) -> String {
    warn!(
        page = request.page,
        request_id = request.id,
        error = ?error,
        "Page fetch failed"
    );
    let err = AppError::from(error);
    if !err.is_recoverable() {
        warn!("Retrying page {} is unlikely to help", request.page);
    }
    err.full_message()
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceSettings;

    #[test]
    fn test_failed_fetch_reports_through_channel() {
        tokio_test::block_on(async {
            let (mut rx, spawner) = create_task_channel();
            // A port that was just released has nothing listening on it
            let addr = std::net::TcpListener::bind("127.0.0.1:0")
                .unwrap()
                .local_addr()
                .unwrap();
            let client = ArticClient::new(&SourceSettings {
                base_url: format!("http://{}", addr),
                timeout_secs: 2,
            })
            .unwrap();

            spawner.spawn_fetch_page(&client, PageRequest { id: 7, page: 2 });

            match rx.recv().await {
                Some(ApiMessage::PageFetched { request, result }) => {
                    assert_eq!(request, PageRequest { id: 7, page: 2 });
                    assert!(result.is_err());
                }
                None => panic!("channel closed without a message"),
            }
        });
    }

    #[test]
    fn test_channel_delivers_in_send_order() {
        let (mut rx, spawner) = create_task_channel();
        for id in 1..=3 {
            spawner
                .tx
                .send(ApiMessage::PageFetched {
                    request: PageRequest { id, page: 1 },
                    result: Err("x".to_string()),
                })
                .unwrap();
        }

        let ids: Vec<u64> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|ApiMessage::PageFetched { request, .. }| request.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_describe_failure_uses_user_message() {
        let request = PageRequest { id: 3, page: 4 };
        let message = describe_failure(
            request,
            ApiError::InvalidResponse("missing field `pagination`".to_string()),
        );
        assert_eq!(
            message,
            "Unexpected response from the catalog. Please try again."
        );

        let message = describe_failure(request, ApiError::RateLimited);
        assert!(message.contains("press 'r' to retry"));
    }
}
