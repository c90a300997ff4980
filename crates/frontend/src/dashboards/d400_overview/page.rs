//! Overview dashboard: today's headline figures, refreshed every 15 seconds
//! and immediately when the tab regains focus.

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::StatCard;
use crate::shared::money::format_rupiah;
use crate::shared::notify::use_notify;
use contracts::reports::OverviewSummary;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const POLL_INTERVAL_MS: u32 = 15_000;

/// Collapses a failing poll into a single toast: only the first failure
/// after a success is surfaced, later ticks of the same outage stay quiet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PollHealth {
    failing: bool,
}

impl PollHealth {
    /// Returns whether this failure should be reported to the user.
    fn record_failure(&mut self) -> bool {
        let first = !self.failing;
        self.failing = true;
        first
    }

    fn record_success(&mut self) {
        self.failing = false;
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let summary = RwSignal::new(OverviewSummary::default());
    let loaded = RwSignal::new(false);
    let health = StoredValue::new(PollHealth::default());

    let fetch = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                match api::summary(&client).await {
                    Ok(data) => {
                        summary.set(data);
                        loaded.set(true);
                        health.try_update_value(|h| h.record_success());
                    }
                    Err(e) => {
                        log::error!("overview poll failed: {e}");
                        let report = health
                            .try_update_value(|h| h.record_failure())
                            .unwrap_or(true);
                        if report {
                            notify.error(e.to_string());
                        }
                    }
                }
            });
        }
    };

    fetch();

    // The interval handle cancels its timer on drop.
    let poll: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(Some({
        let fetch = fetch.clone();
        Interval::new(POLL_INTERVAL_MS, move || fetch())
    }));

    // A backgrounded tab throttles timers, so refresh as soon as it is back.
    let focus_listener: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
        StoredValue::new_local(Some({
            let fetch = fetch.clone();
            let closure = Closure::wrap(Box::new(move || fetch()) as Box<dyn FnMut()>);
            let _ = window()
                .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure
        }));

    on_cleanup(move || {
        poll.update_value(|p| {
            p.take();
        });
        if let Some(closure) = focus_listener.try_update_value(|l| l.take()).flatten() {
            let _ = window()
                .remove_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        }
    });

    view! {
        <div class="page">
            <Show
                when=move || loaded.get()
                fallback=|| view! { <div class="page__loading">"Memuat..."</div> }
            >
                <div class="stat-grid">
                    <StatCard
                        title="Penjualan Hari Ini"
                        icon_name="reports"
                        value=Signal::derive(move || format_rupiah(summary.get().sales_today))
                    />
                    <StatCard
                        title="Transaksi Hari Ini"
                        icon_name="finance"
                        value=Signal::derive(move || summary.get().transactions_today.to_string())
                    />
                    <StatCard
                        title="Piutang Belum Lunas"
                        icon_name="customers"
                        value=Signal::derive(move || format_rupiah(summary.get().unpaid_receivables))
                    />
                    <StatCard
                        title="Produk Stok Menipis"
                        icon_name="products"
                        value=Signal::derive(move || summary.get().low_stock_products.to_string())
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_poll_failures_surface_once() {
        let mut health = PollHealth::default();
        assert!(health.record_failure());
        assert!(!health.record_failure());
        assert!(!health.record_failure());
    }

    #[test]
    fn recovery_rearms_the_failure_report() {
        let mut health = PollHealth::default();
        assert!(health.record_failure());
        health.record_success();
        assert!(health.record_failure());
    }
}
