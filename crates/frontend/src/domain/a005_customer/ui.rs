use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{Modal, PaginationControls, SearchInput};
use crate::shared::confirm;
use crate::shared::date_utils::format_display;
use crate::shared::form_state::{FormController, FormMode};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::money::format_rupiah;
use crate::shared::notify::use_notify;
use contracts::domain::a005_customer::{Customer, CustomerDraft, ReceivableStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CustomerList() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let list = ListController::new({
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::list(&client, &query).await }
        }
    });

    let form = FormController::new(
        {
            let client = client.clone();
            move |draft: CustomerDraft, _mode: FormMode| {
                let client = client.clone();
                async move {
                    match draft.id {
                        Some(id) => api::update(&client, id, &draft).await,
                        None => api::create(&client, &draft).await,
                    }
                }
            }
        },
        move || {
            notify.success("Pelanggan tersimpan");
            list.refetch();
        },
    );

    let handle_settle = {
        let client = client.clone();
        move |record: Customer| {
            let prompt = format!(
                "Tandai lunas piutang \"{}\" sebesar {}?",
                record.name,
                format_rupiah(record.total_due),
            );
            if !confirm(&prompt) {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::settle(&client, record.id).await {
                    Ok(()) => {
                        notify.success("Piutang ditandai lunas");
                        list.refetch();
                    }
                    Err(e) => notify.error(e.to_string()),
                }
            });
        }
    };

    let handle_delete = {
        let client = client.clone();
        move |record: Customer| {
            if !confirm(&format!("Hapus pelanggan \"{}\"?", record.name)) {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::remove(&client, record.id).await {
                    Ok(()) => {
                        notify.success("Pelanggan dihapus");
                        list.refetch();
                    }
                    Err(e) => notify.error(e.to_string()),
                }
            });
        }
    };

    list.refetch();

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchInput
                    value=Signal::derive(move || list.state.get().search)
                    on_change=Callback::new(move |value| list.set_search(value))
                    placeholder="Cari pelanggan..."
                />
                <select
                    class="select"
                    prop:value=move || {
                        list.state.get().filters.get("status").cloned().unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let value = if value.is_empty() { None } else { Some(value) };
                        list.set_filter("status", value);
                    }
                >
                    <option value="">"Semua Status"</option>
                    <option value=ReceivableStatus::Unpaid
                        .as_query()>{ReceivableStatus::Unpaid.label()}</option>
                    <option value=ReceivableStatus::Paid
                        .as_query()>{ReceivableStatus::Paid.label()}</option>
                </select>
                <div class="page-toolbar__actions">
                    <button class="button button--primary" on:click=move |_| form.open_add()>
                        {icon("plus")}
                        "Pelanggan Baru"
                    </button>
                    <button class="button button--secondary" on:click=move |_| list.refetch()>
                        {icon("refresh")}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Telepon"</th>
                            <th class="table__header-cell table__header-cell--number">"Piutang"</th>
                            <th class="table__header-cell">"Jatuh Tempo"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
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
                                state.items.into_iter().map(|row| {
                                    let edit_draft = CustomerDraft::from(&row);
                                    let settle = handle_settle.clone();
                                    let settle_row = row.clone();
                                    let delete = handle_delete.clone();
                                    let delete_row = row.clone();
                                    let unpaid = row.status == ReceivableStatus::Unpaid;
                                    let status_class = if unpaid {
                                        "badge badge--danger"
                                    } else {
                                        "badge badge--success"
                                    };
                                    view! {
                                        <tr class="table__row" on:click=move |_| form.open_edit(edit_draft.clone())>
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.phone.clone()}</td>
                                            <td class="table__cell table__cell--number">{format_rupiah(row.total_due)}</td>
                                            <td class="table__cell">{format_display(&row.due_date)}</td>
                                            <td class="table__cell">
                                                <span class=status_class>{row.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || unpaid>
                                                    {
                                                        let settle = settle.clone();
                                                        let settle_row = settle_row.clone();
                                                        view! {
                                                            <button
                                                                class="button button--small"
                                                                title="Tandai lunas"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    settle(settle_row.clone());
                                                                }
                                                            >
                                                                "Lunasi"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                                <button
                                                    class="button button--icon"
                                                    title="Hapus"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        delete(delete_row.clone());
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
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

            <Show when=move || form.state.get().open>
                <Modal
                    title=Signal::derive(move || {
                        if form.state.get().mode == FormMode::Edit {
                            "Ubah Pelanggan".to_string()
                        } else {
                            "Pelanggan Baru".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| form.close())
                >
                    {move || form.state.get().error.map(|e| view! {
                        <div class="form-error">{e}</div>
                    })}
                    <div class="form-field">
                        <label class="form-field__label">"Nama"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.name = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Telepon"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.phone
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.phone = value);
                            }
                        />
                    </div>
                    <div class="form-footer">
                        <button class="button button--secondary" on:click=move |_| form.close()>
                            "Batal"
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || form.state.get().saving
                            on:click=move |_| form.submit()
                        >
                            {move || if form.state.get().saving { "Menyimpan..." } else { "Simpan" }}
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
