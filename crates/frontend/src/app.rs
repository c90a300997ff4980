use crate::app_shell::AppShell;
use crate::shared::notify::{NotifyService, ToastHost};
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotifyService::new());
    provide_auth();

    view! {
        <ToastHost />
        <AppShell />
    }
}
