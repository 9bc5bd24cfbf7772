//! Domain building blocks for the community event board.
//!
//! Everything here is free of I/O: entity types, request validation,
//! the collection serialization contract, auth-code generation and the
//! text of moderation notifications.

pub mod auth_code;
pub mod collections;
pub mod error;
pub mod event;
pub mod messages;
pub mod submission;
pub mod types;
