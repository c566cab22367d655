//! # Quote model
//!
//! Defines the two representations of a posted quote:
//!
//! ## [`Quote`] (server only)
//!
//! The complete database row from the `quotes` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`), store-assigned.
//! - `user_id` — the anonymous session identity that owns the quote.
//! - `poster_name` — display name snapshot taken at creation time. Renaming
//!   the device profile later does not touch existing rows.
//! - `author_name` — optional attribution for who originally said the quote.
//! - `text` — the quote body.
//! - `tags` — optional free-text tags.
//! - `is_public` — whether the quote appears on the public tab.
//! - `created_at` — store-assigned timestamp; the descending sort key for
//!   every listing.
//!
//! The [`Quote::to_info`] method projects this into a [`QuoteInfo`].
//!
//! ## [`QuoteInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can
//! cross the server/client boundary via Dioxus server functions. It converts
//! the `Uuid` columns to `String` so it works in WASM and omits the
//! timestamp (ordering is applied server-side).

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full quote record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub poster_name: String,
    pub author_name: Option<String>,
    pub text: String,
    pub tags: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Quote {
    /// Convert to QuoteInfo for client consumption.
    pub fn to_info(&self) -> QuoteInfo {
        QuoteInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            poster_name: self.poster_name.clone(),
            author_name: self.author_name.clone(),
            text: self.text.clone(),
            tags: self.tags.clone(),
            is_public: self.is_public,
        }
    }
}

/// Quote data safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteInfo {
    pub id: String,
    pub user_id: String,
    pub poster_name: String,
    pub author_name: Option<String>,
    pub text: String,
    pub tags: Option<String>,
    pub is_public: bool,
}
