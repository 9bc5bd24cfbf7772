//! External delivery channels for moderation notifications.

pub mod webhook;
