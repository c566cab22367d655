//! # API crate — shared fullstack server functions for the quote board
//!
//! This crate is the server boundary of the quotewall architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Anonymous session key shared by all endpoints |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database model (`Quote`) and its client-safe projection (`QuoteInfo`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that simply forwards the call over HTTP.
//!
//! - **Session**: `get_current_session`, `create_anonymous_session`
//! - **Quotes**: `list_quotes`, `create_quote`
//!
//! Validation and rate limiting live in the client pipeline; these endpoints
//! persist what they are given.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
pub mod models;

pub use models::QuoteInfo;

/// Identity of the current anonymous session, safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub user_id: String,
}

/// Get the identity stored in the current session, if any.
#[cfg(feature = "server")]
#[get("/api/session/me", session: tower_sessions::Session)]
pub async fn get_current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user_id.map(|user_id| SessionInfo { user_id }))
}

#[cfg(not(feature = "server"))]
#[get("/api/session/me")]
pub async fn get_current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    Ok(None)
}

/// Mint an anonymous identity and store it in the session.
///
/// Calling this on a session that already carries an identity returns the
/// existing one unchanged.
#[cfg(feature = "server")]
#[post("/api/session/anonymous", session: tower_sessions::Session)]
pub async fn create_anonymous_session() -> Result<SessionInfo, ServerFnError> {
    let existing: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(user_id) = existing {
        return Ok(SessionInfo { user_id });
    }

    let user_id = uuid::Uuid::new_v4().to_string();
    session
        .insert(auth::SESSION_USER_ID_KEY, user_id.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .save()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("issued anonymous identity {user_id}");
    Ok(SessionInfo { user_id })
}

#[cfg(not(feature = "server"))]
#[post("/api/session/anonymous")]
pub async fn create_anonymous_session() -> Result<SessionInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helper: the session's anonymous identity, parsed to a Uuid.
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// List quotes for a view scope, newest first.
///
/// - `"mine"` — quotes owned by the session identity (requires a session).
/// - `"public"` — quotes with `is_public = true`.
#[cfg(feature = "server")]
#[get("/api/quotes/:scope", session: tower_sessions::Session)]
pub async fn list_quotes(scope: String) -> Result<Vec<QuoteInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Quote;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let quotes: Vec<Quote> = match scope.as_str() {
        "mine" => {
            let user_id = require_user_id(&session).await?;
            sqlx::query_as("SELECT * FROM quotes WHERE user_id = $1 ORDER BY created_at DESC")
                .bind(user_id)
                .fetch_all(pool)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?
        }
        "public" => {
            sqlx::query_as("SELECT * FROM quotes WHERE is_public = TRUE ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?
        }
        _ => return Err(ServerFnError::new(format!("Unknown scope: {}", scope))),
    };

    Ok(quotes.iter().map(Quote::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/quotes/:scope")]
pub async fn list_quotes(scope: String) -> Result<Vec<QuoteInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert a quote owned by the session identity and return the stored row.
#[cfg(feature = "server")]
#[post("/api/quotes", session: tower_sessions::Session)]
pub async fn create_quote(
    poster_name: String,
    text: String,
    tags: Option<String>,
    is_public: bool,
) -> Result<QuoteInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Quote;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let quote: Quote = sqlx::query_as(
        "INSERT INTO quotes (user_id, poster_name, text, tags, is_public)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(&poster_name)
    .bind(&text)
    .bind(&tags)
    .bind(is_public)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(quote.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/quotes")]
pub async fn create_quote(
    poster_name: String,
    text: String,
    tags: Option<String>,
    is_public: bool,
) -> Result<QuoteInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
