//! Repository layer.
//!
//! Database-backed implementations of the store traits in [`crate::store`].

pub mod event_repo;

pub use event_repo::PgEventStore;
