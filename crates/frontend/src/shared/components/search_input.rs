use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button. `on_change` fires once per
/// pause in typing, not per keystroke.
#[component]
pub fn SearchInput(
    /// Current filter value (as the list state sees it)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter value after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Replacing the stored handle drops (and thereby cancels) the previous
    // timer, so only the last keystroke's timeout fires.
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        pending.set_value(Some(Timeout::new(DEBOUNCE_MS, move || {
            on_change.run(new_value.clone());
        })));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Bersihkan">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
