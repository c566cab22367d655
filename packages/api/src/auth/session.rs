//! Session data types.

/// Key for storing the anonymous user ID in the session.
///
/// The value is a UUID v4 string minted by `create_anonymous_session` on
/// first contact and reused for as long as the session cookie persists.
pub const SESSION_USER_ID_KEY: &str = "user_id";
