//! Session context and hooks for the UI.

use dioxus::prelude::*;

/// Anonymous session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user_id: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates once the identity bootstrap settles.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that bootstraps the anonymous identity.
///
/// On mount it adopts the identity already carried by the session, or asks
/// the server to mint one. The resolved identifier never changes for the
/// lifetime of the process.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        match api::get_current_session().await {
            Ok(Some(info)) => {
                session.set(SessionState {
                    user_id: Some(info.user_id),
                    loading: false,
                });
            }
            Ok(None) => match api::create_anonymous_session().await {
                Ok(info) => {
                    session.set(SessionState {
                        user_id: Some(info.user_id),
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to create anonymous identity: {}", e);
                    session.set(SessionState {
                        user_id: None,
                        loading: false,
                    });
                }
            },
            Err(e) => {
                tracing::error!("Failed to read session: {}", e);
                session.set(SessionState {
                    user_id: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
