//! Database models and their client-safe projections.

mod quote;

#[cfg(feature = "server")]
pub use quote::Quote;
pub use quote::QuoteInfo;
