//! Sales report: period and branch filtered list of completed sales. The
//! totals row sums the visible page only, the grand total lives server-side.

use super::api;
use crate::domain::a003_branch::api as branch_api;
use crate::shared::api::ApiClient;
use crate::shared::components::{DateRangeInput, PaginationControls};
use crate::shared::date_utils::format_display;
use crate::shared::list_state::ListController;
use crate::shared::money::format_rupiah;
use crate::shared::notify::use_notify;
use contracts::domain::a003_branch::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SalesReportPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let list = ListController::new({
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::list(&client, &query).await }
        }
    });

    let branches = RwSignal::new(Vec::<Branch>::new());
    {
        let client = client.clone();
        spawn_local(async move {
            match branch_api::all(&client).await {
                Ok(items) => branches.set(items),
                Err(e) => notify.error(e.to_string()),
            }
        });
    }

    list.refetch();

    let page_total = move || {
        list.state
            .get()
            .items
            .iter()
            .map(|row| row.total)
            .sum::<i64>()
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <DateRangeInput
                    date_from=Signal::derive(move || list.state.get().date_from)
                    date_to=Signal::derive(move || list.state.get().date_to)
                    on_change=Callback::new(move |(from, to)| list.set_date_range(from, to))
                />
                <select
                    class="select"
                    prop:value=move || {
                        list.state.get().filters.get("branch_id").cloned().unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let value = if value.is_empty() { None } else { Some(value) };
                        list.set_filter("branch_id", value);
                    }
                >
                    <option value="">"Semua Cabang"</option>
                    {move || branches.get().into_iter().map(|b| view! {
                        <option value=b.id.to_string()>{b.name}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tanggal"</th>
                            <th class="table__header-cell">"No. Faktur"</th>
                            <th class="table__header-cell">"Cabang"</th>
                            <th class="table__header-cell">"Kasir"</th>
                            <th class="table__header-cell table__header-cell--number">"Item"</th>
                            <th class="table__header-cell table__header-cell--number">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.state.get();
                            if state.loading {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="6">"Memuat..."</td></tr>
                                }.into_any()
                            } else if state.items.is_empty() {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="6">"Tidak ada data"</td></tr>
                                }.into_any()
                            } else {
                                state.items.into_iter().map(|row| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_display(&row.date)}</td>
                                        <td class="table__cell">{row.invoice}</td>
                                        <td class="table__cell">{row.branch_name}</td>
                                        <td class="table__cell">{row.cashier}</td>
                                        <td class="table__cell table__cell--number">{row.items_count}</td>
                                        <td class="table__cell table__cell--number">{format_rupiah(row.total)}</td>
                                    </tr>
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                    <tfoot>
                        <tr class="table__footer-row">
                            <td class="table__cell" colspan="5">"Total (halaman ini)"</td>
                            <td class="table__cell table__cell--number">
                                {move || format_rupiah(page_total())}
                            </td>
                        </tr>
                    </tfoot>
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
