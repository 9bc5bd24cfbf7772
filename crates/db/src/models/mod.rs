//! Domain model structs.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! the `Serialize` entity handed to API consumers.

pub mod event;
