pub mod api;
pub mod components;
pub mod date_utils;
pub mod form_state;
pub mod icons;
pub mod list_state;
pub mod money;
pub mod notify;
pub mod prefs;

/// Browser confirm dialog; deletes are gated on it.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
