use super::storage;
use contracts::auth::SessionUser;
use leptos::prelude::*;

/// Session state for the whole app. `None` shows the login page.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<SessionUser>>,
}

impl AuthContext {
    pub fn login(&self, user: SessionUser) {
        storage::save_session(&user);
        self.session.set(Some(user));
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.session.set(None);
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .with_untracked(|s| s.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }
}

/// Installs the auth context, restoring a persisted session if the tab
/// already has one.
pub fn provide_auth() -> AuthContext {
    let context = AuthContext {
        session: RwSignal::new(storage::load_session()),
    };
    provide_context(context);
    context
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
