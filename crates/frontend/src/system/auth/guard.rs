use super::context::SessionState;
use super::storage::{restore_session, KeyValueStore};

/// What the root renders for a session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    Spinner,
    Login,
    App,
}

pub fn guard_view_for(state: &SessionState) -> GuardView {
    match state {
        SessionState::Loading => GuardView::Spinner,
        SessionState::Authenticated(_) => GuardView::App,
        SessionState::Unauthenticated => GuardView::Login,
    }
}

/// Session state rebuilt from storage when the page loads
pub fn state_after_reload(store: &impl KeyValueStore) -> SessionState {
    match restore_session(store) {
        Some(stored) => SessionState::Authenticated(stored.user),
        None => SessionState::Unauthenticated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::{clear_session, persist_session, MemoryStore};
    use contracts::system::auth::SessionUser;

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".into(),
            name: "Admin User".into(),
            role: "Administrator".into(),
        }
    }

    #[test]
    fn each_state_has_one_view() {
        assert_eq!(guard_view_for(&SessionState::Loading), GuardView::Spinner);
        assert_eq!(guard_view_for(&SessionState::Unauthenticated), GuardView::Login);
        assert_eq!(
            guard_view_for(&SessionState::Authenticated(admin())),
            GuardView::App
        );
    }

    #[test]
    fn login_then_reload_then_logout() {
        let store = MemoryStore::default();
        assert_eq!(guard_view_for(&state_after_reload(&store)), GuardView::Login);

        persist_session(&store, &admin(), "tok-1");
        let reloaded = state_after_reload(&store);
        assert_eq!(reloaded, SessionState::Authenticated(admin()));
        assert_eq!(guard_view_for(&reloaded), GuardView::App);

        clear_session(&store);
        let after_logout = state_after_reload(&store);
        assert_eq!(after_logout, SessionState::Unauthenticated);
        assert_eq!(guard_view_for(&after_logout), GuardView::Login);
    }
}
