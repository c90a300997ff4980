//! Financial report: revenue, expense and profit cards for the selected
//! period, above the ledger lines behind them.

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{DateRangeInput, PaginationControls, StatCard};
use crate::shared::date_utils::format_display;
use crate::shared::list_state::ListController;
use crate::shared::money::format_rupiah;
use crate::shared::notify::use_notify;
use contracts::reports::{FinanceKind, FinanceSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FinancialReportPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let list = ListController::new({
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::list(&client, &query).await }
        }
    });

    let summary = RwSignal::new(FinanceSummary::default());

    // The cards follow the period, not the page, so they refetch only when
    // the range itself changes. A half-open range waits for its second bound.
    let range = Memo::new(move |_| {
        let state = list.state.get();
        (state.date_from, state.date_to)
    });
    {
        let client = client.clone();
        Effect::new(move |_| {
            let (from, to) = range.get();
            if from.is_empty() != to.is_empty() {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::summary(&client, &from, &to).await {
                    Ok(data) => summary.set(data),
                    Err(e) => notify.error(e.to_string()),
                }
            });
        });
    }

    list.refetch();

    view! {
        <div class="page">
            <div class="page-toolbar">
                <DateRangeInput
                    date_from=Signal::derive(move || list.state.get().date_from)
                    date_to=Signal::derive(move || list.state.get().date_to)
                    on_change=Callback::new(move |(from, to)| list.set_date_range(from, to))
                />
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Pemasukan"
                    icon_name="finance"
                    value=Signal::derive(move || format_rupiah(summary.get().revenue))
                />
                <StatCard
                    title="Pengeluaran"
                    icon_name="reports"
                    value=Signal::derive(move || format_rupiah(summary.get().expense))
                />
                <StatCard
                    title="Laba"
                    icon_name="dashboard"
                    value=Signal::derive(move || format_rupiah(summary.get().profit))
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tanggal"</th>
                            <th class="table__header-cell">"Jenis"</th>
                            <th class="table__header-cell">"Keterangan"</th>
                            <th class="table__header-cell table__header-cell--number">"Jumlah"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.state.get();
                            if state.loading {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">"Memuat..."</td></tr>
                                }.into_any()
                            } else if state.items.is_empty() {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">"Tidak ada data"</td></tr>
                                }.into_any()
                            } else {
                                state.items.into_iter().map(|row| {
                                    let kind_class = match row.kind {
                                        FinanceKind::Income => "badge badge--success",
                                        FinanceKind::Expense => "badge badge--danger",
                                    };
                                    let amount = match row.kind {
                                        FinanceKind::Income => row.amount,
                                        FinanceKind::Expense => -row.amount,
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_display(&row.date)}</td>
                                            <td class="table__cell">
                                                <span class=kind_class>{row.kind.label()}</span>
                                            </td>
                                            <td class="table__cell">{row.description}</td>
                                            <td class="table__cell table__cell--number">{format_rupiah(amount)}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || list.state.get().page)
                total_pages=Signal::derive(move || list.state.get().total_pages)
                total_count=Signal::derive(move || list.state.get().total_items)
                page_size=Signal::derive(move || list.state.get().page_size)
                on_page_change=Callback::new(move |page| list.set_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
            />
        </div>
    }
}
