//! The two-tab quote board view.

use api::QuoteInfo;
use dioxus::prelude::*;

use ui::{device_profile, use_session, PosterNameForm, QuoteForm, QuoteList, ToastHost};

const BOARD_CSS: Asset = asset!("/assets/board.css");

/// Which subset of quotes the board displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Mine,
    Public,
}

impl Tab {
    fn scope(self) -> &'static str {
        match self {
            Tab::Mine => "mine",
            Tab::Public => "public",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Tab::Mine => "自分の名言",
            Tab::Public => "みんなの名言",
        }
    }
}

/// Board view: owns the tab, the quote list, and the loading flag, and
/// wires the submission form and registration card together.
///
/// A fetch runs whenever the identity becomes available, the tab changes,
/// or the poster name is first registered; never before the identity
/// exists. Each fetch carries a sequence number and only the newest one may
/// apply its result, so a slow response for a previous tab cannot
/// overwrite the current one.
#[component]
pub fn Board() -> Element {
    let session = use_session();
    let mut poster_name = use_signal(|| Option::<String>::None);
    let mut tab = use_signal(|| Tab::Mine);
    let mut quotes = use_signal(Vec::<QuoteInfo>::new);
    let mut loading = use_signal(|| false);
    let mut fetch_seq = use_signal(|| 0u64);

    // Read the persisted poster name once the client is mounted.
    use_effect(move || {
        poster_name.set(device_profile().poster_name());
    });

    let fetch_quotes = move |active: Tab| {
        spawn(async move {
            let seq = fetch_seq() + 1;
            fetch_seq.set(seq);
            loading.set(true);
            match api::list_quotes(active.scope().to_string()).await {
                Ok(list) => {
                    if fetch_seq() == seq {
                        quotes.set(list);
                    }
                }
                Err(e) => {
                    // Leave the previous list on screen.
                    tracing::error!("Failed to fetch quotes: {}", e);
                }
            }
            if fetch_seq() == seq {
                loading.set(false);
            }
        });
    };

    use_effect(move || {
        let user_id = session().user_id;
        let active = tab();
        let _registered = poster_name().is_some();
        if user_id.is_none() {
            return;
        }
        fetch_quotes(active);
    });

    rsx! {
        document::Stylesheet { href: BOARD_CSS }

        div {
            class: "board",

            ToastHost {}

            h1 { class: "board-title", "名言メモ & みんなの名言" }

            if let Some(name) = poster_name() {
                div {
                    class: "board-poster",
                    "あなたの名前: "
                    strong { "{name}" }
                }
            } else {
                PosterNameForm {
                    on_registered: move |name| poster_name.set(Some(name)),
                }
            }

            div {
                class: "board-tabs",
                button {
                    class: if tab() == Tab::Mine { "tab-button tab-button--active" } else { "tab-button" },
                    onclick: move |_| tab.set(Tab::Mine),
                    "自分の名言"
                }
                button {
                    class: if tab() == Tab::Public { "tab-button tab-button--active" } else { "tab-button" },
                    onclick: move |_| tab.set(Tab::Public),
                    "みんなの名言"
                }
            }

            QuoteForm {
                on_saved: move |_| fetch_quotes(tab()),
            }

            h2 {
                class: "board-list-heading",
                {tab().heading()}
            }
            QuoteList {
                quotes: quotes(),
                loading: loading(),
            }
        }
    }
}
