use std::sync::Arc;

use eventboard_db::EventStore;
use eventboard_notify::NotificationGateway;

use crate::config::ServerConfig;
use crate::services::{ContactNotifier, EventCoordinator};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Event persistence (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn EventStore>,
    /// Persist-and-notify coordinator for new events.
    pub coordinator: Arc<EventCoordinator>,
    /// Contact form relay.
    pub contact: Arc<ContactNotifier>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the services around one store and one notification gateway.
    pub fn new(
        store: Arc<dyn EventStore>,
        gateway: Arc<dyn NotificationGateway>,
        config: ServerConfig,
    ) -> Self {
        let coordinator = EventCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&gateway),
            config.public_api_url.clone(),
        );
        Self {
            store,
            coordinator: Arc::new(coordinator),
            contact: Arc::new(ContactNotifier::new(gateway)),
            config: Arc::new(config),
        }
    }
}
