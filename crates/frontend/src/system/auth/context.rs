use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;

use super::storage::{self, BrowserStore};
use super::{api, guard};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Persisted identity is being checked
    #[default]
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

thread_local! {
    // Lets the API helpers end the session on a 401 without a reactive owner.
    static SESSION: Cell<Option<RwSignal<SessionState>>> = const { Cell::new(None) };
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionState::Loading);
    SESSION.with(|cell| cell.set(Some(session)));
    provide_context(session);

    match guard::state_after_reload(&BrowserStore) {
        SessionState::Authenticated(stored_user) => {
            // Confirm the token is still accepted; a 401 ends the session inside the API layer.
            spawn_local(async move {
                match api::current_user().await {
                    Ok(user) => session.set(SessionState::Authenticated(user)),
                    Err(e) => {
                        log::warn!("Session check failed: {}", e);
                        if session.get_untracked() == SessionState::Loading {
                            session.set(SessionState::Authenticated(stored_user));
                        }
                    }
                }
            });
        }
        other => session.set(other),
    }

    children()
}

/// Hook to access the session signal
pub fn use_auth() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("AuthProvider not found in component tree")
}

/// Logs in, persists the identity and token, and switches to the application.
pub async fn do_login(
    session: RwSignal<SessionState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await?;
    storage::persist_session(&BrowserStore, &response.user, &response.access_token);
    log::info!("Signed in as {}", response.user.username);
    session.set(SessionState::Authenticated(response.user));
    Ok(())
}

pub fn do_logout(session: RwSignal<SessionState>) {
    storage::clear_session(&BrowserStore);
    session.set(SessionState::Unauthenticated);
}

/// Called by the API layer when the backend rejects the token.
pub fn expire_session() {
    storage::clear_session(&BrowserStore);
    if let Some(session) = SESSION.with(|cell| cell.get()) {
        session.set(SessionState::Unauthenticated);
    }
}
