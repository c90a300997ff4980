//! Header bar: current section title plus the user-identity dropdown.
//! The dropdown closes on any pointer-down outside its bounding element;
//! the global listener exists only while the menu is open.

use crate::layout::{section_label, use_active_section};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn Header() -> impl IntoView {
    let active = use_active_section();
    let auth = use_auth();

    let open = RwSignal::new(false);
    let dropdown_ref = NodeRef::<html::Div>::new();
    let outside_listener: StoredValue<Option<Closure<dyn FnMut(web_sys::Event)>>, LocalStorage> =
        StoredValue::new_local(None);

    let remove_listener = move || {
        if let Some(closure) = outside_listener.try_update_value(|l| l.take()).flatten() {
            let _ = document()
                .remove_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        }
    };

    // Register the click-outside listener while open, drop it when closed.
    Effect::new(move |_| {
        if open.get() {
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                    .and_then(|node| {
                        dropdown_ref
                            .get_untracked()
                            .map(|root| root.contains(Some(&node)))
                    })
                    .unwrap_or(false);
                if !inside {
                    open.set(false);
                }
            }) as Box<dyn FnMut(_)>);
            let _ = document()
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            outside_listener.set_value(Some(closure));
        } else {
            remove_listener();
        }
    });
    on_cleanup(remove_listener);

    let display_name = move || {
        auth.session
            .get()
            .map(|u| u.full_name)
            .unwrap_or_default()
    };
    let role_label = move || auth.session.get().map(|u| u.role).unwrap_or_default();

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{move || section_label(active.0.get())}</h1>
            <div class="user-dropdown" node_ref=dropdown_ref>
                <button
                    class="user-dropdown__trigger"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {icon("user")}
                    <span class="user-dropdown__name">{display_name}</span>
                    {move || if open.get() { icon("chevron-up") } else { icon("chevron-down") }}
                </button>
                <Show when=move || open.get()>
                    <div class="user-dropdown__menu">
                        <div class="user-dropdown__role">{role_label}</div>
                        <button
                            class="user-dropdown__logout"
                            on:click=move |_| {
                                open.set(false);
                                auth.logout();
                            }
                        >
                            {icon("log-out")}
                            "Keluar"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
