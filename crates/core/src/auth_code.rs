//! Authentication codes that gate public visibility of an event.

use uuid::Uuid;

/// Generate a fresh, unguessable auth code.
///
/// A v4 UUID carries 122 random bits and only uses `[0-9a-f-]`, so the
/// code can be embedded in a query string without escaping.
pub fn generate_auth_code() -> String {
    Uuid::new_v4().to_string()
}
