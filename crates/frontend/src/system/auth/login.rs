use super::{api, context::use_auth};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        if username_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("Username dan password wajib diisi".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(username_value, password_value).await {
                Ok(user) => auth.login(user),
                Err(e) => {
                    log::error!("login failed: {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form
                class="login-card"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 class="login-card__title">"Back Office"</h1>
                {move || error.get().map(|e| view! {
                    <div class="form-error">{e}</div>
                })}
                <div class="form-field">
                    <label class="form-field__label">"Username"</label>
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label class="form-field__label">"Password"</label>
                    <input
                        class="form-field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button class="button button--primary login-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Masuk..." } else { "Masuk" }}
                </button>
            </form>
        </div>
    }
}
