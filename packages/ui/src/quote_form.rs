//! Quote submission form — the client-side write path.

use dioxus::prelude::*;

use crate::device::{device_profile, now_ms};
use crate::submit::{
    check_body, check_post_interval, effective_poster_name, NAME_REQUIRED_PROMPT,
};
use crate::toast::{show_toast, use_toast, ToastKind};

/// Submission form for a new quote.
///
/// Runs the full client pipeline in order: poster-name gate, body
/// validation, post throttle, then the insert. On success the form resets
/// to its defaults and `on_saved` fires so the owner re-fetches the active
/// tab; on failure the fields stay as typed for resubmission. The
/// submitting flag clears on every terminal path.
#[component]
pub fn QuoteForm(on_saved: EventHandler<()>) -> Element {
    let mut text = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut is_public = use_signal(|| true);
    let mut submitting = use_signal(|| false);
    let toast = use_toast();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let profile = device_profile();

            let Some(poster_name) = profile.poster_name() else {
                block_with_prompt(NAME_REQUIRED_PROMPT);
                return;
            };

            let cleaned = match check_body(&text()) {
                Ok(cleaned) => cleaned,
                Err(block) => {
                    show_toast(toast, ToastKind::Error, block.message());
                    return;
                }
            };

            if let Err(block) = check_post_interval(profile.last_post_at(), now_ms()) {
                show_toast(toast, ToastKind::Error, block.message());
                return;
            }

            let sent_tags = match tags() {
                t if t.is_empty() => None,
                t => Some(t),
            };

            submitting.set(true);
            match api::create_quote(
                effective_poster_name(&poster_name),
                cleaned,
                sent_tags,
                is_public(),
            )
            .await
            {
                Ok(_) => {
                    profile.mark_posted(now_ms());
                    text.set(String::new());
                    tags.set(String::new());
                    is_public.set(true);
                    on_saved.call(());
                    show_toast(toast, ToastKind::Success, "投稿をみんなに公開しました");
                }
                Err(e) => {
                    tracing::error!("Failed to save quote: {}", e);
                    show_toast(toast, ToastKind::Error, "保存に失敗しました");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "quote-form",
            onsubmit: handle_submit,
            h2 { class: "quote-form-title", "あなたの言葉を投稿" }

            textarea {
                class: "quote-form-text",
                placeholder: "write your quote.",
                rows: 4,
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }

            input {
                class: "quote-form-tags",
                r#type: "text",
                placeholder: "tag as you like ex. life / poet / work / family .",
                value: tags(),
                oninput: move |evt: FormEvent| tags.set(evt.value()),
            }

            label {
                class: "quote-form-public",
                input {
                    r#type: "checkbox",
                    checked: is_public(),
                    onchange: move |evt: FormEvent| is_public.set(evt.checked()),
                }
                "みんなに公開する"
            }

            button {
                class: "quote-form-submit",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "投稿中..." } else { "投稿する" }
            }
        }
    }
}

/// Hard stop distinct from the toast channel.
fn block_with_prompt(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{}", message);
    }
}
