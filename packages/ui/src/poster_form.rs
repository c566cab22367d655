//! Poster-name registration card.

use dioxus::prelude::*;

use crate::device::device_profile;

/// One-time registration card shown while no poster name is set.
///
/// The candidate is trimmed; an empty result does nothing. On success the
/// persisted name is reported to the parent, which takes the board out of
/// the unset state.
#[component]
pub fn PosterNameForm(on_registered: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    let handle_register = move |_| {
        if let Some(name) = device_profile().register_poster_name(&input()) {
            on_registered.call(name);
        }
    };

    rsx! {
        div {
            class: "poster-card",
            h2 { class: "poster-card-title", "投稿者名を決めてください" }
            p {
                class: "poster-card-hint",
                "この名前は、あなたの投稿に表示されます（後で変更できます）"
            }
            input {
                class: "poster-card-input",
                r#type: "text",
                placeholder: "例：anonymous / 匿名太郎",
                value: input(),
                oninput: move |evt: FormEvent| input.set(evt.value()),
            }
            button {
                class: "poster-card-submit",
                onclick: handle_register,
                "この名前で始める"
            }
        }
    }
}
