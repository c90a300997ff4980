use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline figure for the overview dashboard.
#[component]
pub fn StatCard(
    title: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__title">{title}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
