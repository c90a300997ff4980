use crate::shared::date_utils::{first_of_month_local, today_local};
use leptos::prelude::*;

/// Period picker: two date inputs plus "this month" and clear shortcuts.
/// Emits the pair on every edit; whether a half-open range actually fetches
/// is the list controller's decision, not this widget's.
#[component]
pub fn DateRangeInput(
    /// "from" date, `YYYY-MM-DD` or empty
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date, `YYYY-MM-DD` or empty
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with (from, to) on any change
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let on_from = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };
    let on_to = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };
    let on_this_month = move |_| {
        on_change.run((first_of_month_local(), today_local()));
    };
    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    view! {
        <div class="date-range">
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_from.get()
                on:change=move |ev| on_from(event_target_value(&ev))
            />
            <span class="date-range__separator">"s.d."</span>
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_to.get()
                on:change=move |ev| on_to(event_target_value(&ev))
            />
            <button class="button button--secondary" on:click=on_this_month>
                "Bulan ini"
            </button>
            <button class="button button--secondary" on:click=on_clear>
                "Semua"
            </button>
        </div>
    }
}
