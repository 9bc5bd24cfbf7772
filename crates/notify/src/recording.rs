//! In-process gateway that keeps every message it is asked to send.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::gateway::{DeliveryError, NotificationGateway};

/// Records sent messages instead of delivering them.
///
/// Clones share the same log. When [`fail`](Self::fail) is switched on,
/// sends fail as an unavailable webhook would, with
/// [`DeliveryError::HttpStatus`] `503`, and nothing is recorded.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    sent: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, fail: bool) {
        self.failing.store(fail, Ordering::SeqCst);
    }

    /// Messages delivered so far, oldest first.
    pub async fn sent(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DeliveryError::HttpStatus(503));
        }
        self.sent.lock().await.push(message.to_string());
        Ok(())
    }
}
