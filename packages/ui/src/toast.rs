//! # Toast notifications — single slot, timed, cancelable
//!
//! The board shows at most one transient message at a time. A new message
//! replaces whatever is on screen; the replaced message's pending timers
//! must never fire against the new one.
//!
//! [`ToastState`] is the timer-owning state machine
//! (`Idle → Showing → Dismissing → Idle`). Cancellation is a generation
//! counter: every `show` or manual `dismiss` bumps the generation, and the
//! timed transitions (`reveal`, `hide`, `clear`) are inert unless called
//! with the generation they were scheduled under. A stranded timer task
//! wakes up, finds its token stale, and stops.
//!
//! The lifecycle driven by [`show_toast`]:
//!
//! ```text
//! show ──(one frame)── reveal ──(2200 ms)── hide ──(250 ms)── clear
//! ```
//!
//! The hidden frame before `reveal` lets the entrance transition apply;
//! the delay between `hide` and `clear` lets the exit transition finish
//! before the slot empties. Manual dismissal skips straight to `hide` but
//! keeps the exit delay.

use dioxus::prelude::*;

/// How long a toast stays fully visible.
const TOAST_VISIBLE_MS: u32 = 2200;

/// Exit-transition time granted between hiding and clearing the slot.
const TOAST_EXIT_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-facing transient message.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// The single toast slot plus the generation token that cancels stale
/// timers. Mutation goes through the named transitions only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    toast: Option<Toast>,
    visible: bool,
    generation: u64,
}

impl ToastState {
    /// The toast occupying the slot, if any.
    pub fn current(&self) -> Option<Toast> {
        self.toast.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the slot with a new, initially hidden toast. Returns the
    /// generation the caller's timer chain must present at each step.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
        });
        self.visible = false;
        self.generation += 1;
        self.generation
    }

    /// Make the toast visible. Inert if `generation` is stale.
    pub fn reveal(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.toast.is_none() {
            return false;
        }
        self.visible = true;
        true
    }

    /// Begin the exit transition. Inert if `generation` is stale.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.toast.is_none() {
            return false;
        }
        self.visible = false;
        true
    }

    /// Empty the slot. Inert if `generation` is stale.
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.toast = None;
        self.visible = false;
        true
    }

    /// Manual dismissal: hide immediately and invalidate the pending
    /// auto-hide. Returns the fresh generation the caller schedules the
    /// final clear under, or `None` when the slot is already empty.
    pub fn dismiss(&mut self) -> Option<u64> {
        self.toast.as_ref()?;
        self.visible = false;
        self.generation += 1;
        Some(self.generation)
    }
}

/// Get the toast slot signal.
pub fn use_toast() -> Signal<ToastState> {
    use_context::<Signal<ToastState>>()
}

/// Provider component that owns the toast slot.
/// Wrap the app with this component; [`ToastHost`] renders the slot.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let state = use_signal(ToastState::default);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Show a toast, replacing whatever is on screen, and drive its timed
/// lifecycle. Each timed step abandons the chain if a newer toast has
/// taken the slot in the meantime.
pub fn show_toast(mut state: Signal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let generation = state.write().show(kind, message);
    spawn(async move {
        // One frame hidden so the entrance transition can apply.
        sleep_ms(0).await;
        if !state.write().reveal(generation) {
            return;
        }
        sleep_ms(TOAST_VISIBLE_MS).await;
        if !state.write().hide(generation) {
            return;
        }
        sleep_ms(TOAST_EXIT_MS).await;
        state.write().clear(generation);
    });
}

/// Close-button path: skip the remaining display time, keep the exit delay.
pub fn dismiss_toast(mut state: Signal<ToastState>) {
    let Some(generation) = state.write().dismiss() else {
        return;
    };
    spawn(async move {
        sleep_ms(TOAST_EXIT_MS).await;
        state.write().clear(generation);
    });
}

async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Renders the toast slot with a close button.
#[component]
pub fn ToastHost() -> Element {
    let state = use_toast();
    let snapshot = state();
    let Some(toast) = snapshot.current() else {
        return rsx! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    };
    let shown_class = if snapshot.is_visible() {
        "toast--shown"
    } else {
        "toast--hidden"
    };

    rsx! {
        div {
            class: "toast-overlay",
            div {
                class: "toast {kind_class} {shown_class}",
                role: "status",
                aria_live: "polite",
                span { class: "toast-dot", aria_hidden: "true" }
                span { class: "toast-message", "{toast.message}" }
                button {
                    class: "toast-close",
                    aria_label: "閉じる",
                    onclick: move |_| dismiss_toast(state),
                    "✕"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_starts_hidden_then_reveals() {
        let mut state = ToastState::default();

        let generation = state.show(ToastKind::Success, "saved");
        assert!(!state.is_visible());
        assert_eq!(state.current().unwrap().message, "saved");

        assert!(state.reveal(generation));
        assert!(state.is_visible());
    }

    #[test]
    fn test_full_lifecycle_empties_the_slot() {
        let mut state = ToastState::default();

        let generation = state.show(ToastKind::Error, "oops");
        assert!(state.reveal(generation));
        assert!(state.hide(generation));
        assert!(!state.is_visible());
        assert!(state.clear(generation));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_second_show_preempts_the_first() {
        let mut state = ToastState::default();

        let first = state.show(ToastKind::Success, "first");
        let second = state.show(ToastKind::Error, "second");

        // Only one toast exists, carrying the second message.
        assert_eq!(state.current().unwrap().message, "second");

        // The first chain's steps are all inert now.
        assert!(!state.reveal(first));
        assert!(!state.hide(first));
        assert!(!state.clear(first));
        assert_eq!(state.current().unwrap().message, "second");

        // The second chain proceeds normally.
        assert!(state.reveal(second));
        assert!(state.is_visible());
    }

    #[test]
    fn test_preemption_mid_display() {
        let mut state = ToastState::default();

        let first = state.show(ToastKind::Success, "first");
        assert!(state.reveal(first));

        // Replaced while fully visible: slot restarts hidden.
        let second = state.show(ToastKind::Success, "second");
        assert!(!state.is_visible());

        // The first toast's auto-hide fires late and does nothing.
        assert!(!state.hide(first));
        assert!(state.reveal(second));
        assert!(state.is_visible());
    }

    #[test]
    fn test_manual_dismiss_hides_then_clears() {
        let mut state = ToastState::default();

        let generation = state.show(ToastKind::Success, "saved");
        assert!(state.reveal(generation));

        let dismissed = state.dismiss().unwrap();
        assert!(!state.is_visible());
        assert_ne!(dismissed, generation);

        // The original auto-hide is canceled outright.
        assert!(!state.hide(generation));
        assert!(!state.clear(generation));

        // The dismiss chain's clear still lands.
        assert!(state.clear(dismissed));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_dismiss_on_empty_slot_is_a_noop() {
        let mut state = ToastState::default();
        assert_eq!(state.dismiss(), None);
        assert_eq!(state, ToastState::default());
    }

    #[test]
    fn test_show_after_dismiss_cancels_pending_clear() {
        let mut state = ToastState::default();

        let first = state.show(ToastKind::Success, "first");
        assert!(state.reveal(first));
        let dismissed = state.dismiss().unwrap();

        // A new toast arrives before the exit delay elapses.
        let second = state.show(ToastKind::Error, "second");

        // The dismiss chain's clear must not wipe the newcomer.
        assert!(!state.clear(dismissed));
        assert_eq!(state.current().unwrap().message, "second");
        assert!(state.reveal(second));
    }
}
