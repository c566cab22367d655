//! This crate contains all shared UI for the workspace.

mod device;
pub use device::{device_profile, now_ms};

mod session;
pub use session::{use_session, SessionProvider, SessionState};

pub mod submit;

mod toast;
pub use toast::{
    dismiss_toast, show_toast, use_toast, Toast, ToastHost, ToastKind, ToastProvider, ToastState,
};

mod poster_form;
pub use poster_form::PosterNameForm;

mod quote_form;
pub use quote_form::QuoteForm;

mod quote_list;
pub use quote_list::QuoteList;
