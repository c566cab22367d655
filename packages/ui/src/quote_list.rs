//! Quote list with loading and empty states.

use api::QuoteInfo;
use dioxus::prelude::*;

/// Ordered quote cards for the active tab.
///
/// While `loading` is true only the progress line renders; the empty-list
/// message is meaningful only after a fetch has completed, so it is gated
/// on `!loading`.
#[component]
pub fn QuoteList(quotes: Vec<QuoteInfo>, loading: bool) -> Element {
    rsx! {
        if loading {
            p { class: "quote-list-loading", "読み込み中..." }
        }
        if !loading && quotes.is_empty() {
            p { class: "quote-list-empty", "まだ名言がありません。" }
        }
        ul {
            class: "quote-list",
            for quote in &quotes {
                li {
                    key: "{quote.id}",
                    class: "quote-card",
                    p { class: "quote-text", "{quote.text}" }
                    div {
                        class: "quote-meta",
                        if let Some(ref author) = quote.author_name {
                            span { class: "quote-badge", "作者: {author}" }
                        }
                        span { class: "quote-badge", "投稿者: {quote.poster_name}" }
                        if let Some(ref tags) = quote.tags {
                            span { class: "quote-badge", "タグ: {tags}" }
                        }
                    }
                }
            }
        }
    }
}
