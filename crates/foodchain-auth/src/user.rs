//! Session user extraction helpers.

use foodchain_core::SessionUser;

/// Extract the `SessionUser` from HTTP request `Parts`, if present.
///
/// Present only on routes behind [`RequireSessionLayer`](crate::RequireSessionLayer).
pub fn user_from_parts(parts: &http::request::Parts) -> Option<&SessionUser> {
    parts.extensions.get::<SessionUser>()
}
