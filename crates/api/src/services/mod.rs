//! Application services shared by the HTTP handlers.

pub mod contact;
pub mod event_creation;

pub use contact::ContactNotifier;
pub use event_creation::{CreateEventError, EventCoordinator};
