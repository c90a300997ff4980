//! Session persistence: the opaque token plus the profile needed by the
//! shell, serialized into `sessionStorage` for the lifetime of the tab.

use contracts::auth::SessionUser;

const SESSION_KEY: &str = "session_user";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

pub fn save_session(user: &SessionUser) {
    if let (Some(storage), Ok(raw)) = (session_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub fn load_session() -> Option<SessionUser> {
    let raw = session_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn clear_session() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
