use super::api;
use crate::domain::a001_category::api as category_api;
use crate::shared::api::ApiClient;
use crate::shared::components::{Modal, PaginationControls, SearchInput};
use crate::shared::confirm;
use crate::shared::form_state::{FormController, FormMode};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::money::format_rupiah;
use crate::shared::notify::use_notify;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{Product, ProductDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductList() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let list = ListController::new({
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::list(&client, &query).await }
        }
    });

    // Category options serve both the filter dropdown and the form select.
    let categories = RwSignal::new(Vec::<Category>::new());
    {
        let client = client.clone();
        spawn_local(async move {
            match category_api::all(&client).await {
                Ok(items) => categories.set(items),
                Err(e) => notify.error(e.to_string()),
            }
        });
    }

    let form = FormController::new(
        {
            let client = client.clone();
            move |draft: ProductDraft, _mode: FormMode| {
                let client = client.clone();
                async move {
                    let payload = draft.payload();
                    match draft.id {
                        Some(id) => api::update(&client, id, &payload).await,
                        None => api::create(&client, &payload).await,
                    }
                }
            }
        },
        move || {
            notify.success("Produk tersimpan");
            list.refetch();
        },
    );

    let handle_delete = {
        let client = client.clone();
        move |record: Product| {
            if !confirm(&format!("Hapus produk \"{}\"?", record.name)) {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::remove(&client, record.id).await {
                    Ok(()) => {
                        notify.success("Produk dihapus");
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
                    placeholder="Cari produk..."
                />
                <select
                    class="select"
                    prop:value=move || {
                        list.state.get().filters.get("category_id").cloned().unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let value = if value.is_empty() { None } else { Some(value) };
                        list.set_filter("category_id", value);
                    }
                >
                    <option value="">"Semua Kategori"</option>
                    {move || categories.get().into_iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name}</option>
                    }).collect_view()}
                </select>
                <div class="page-toolbar__actions">
                    <button class="button button--primary" on:click=move |_| form.open_add()>
                        {icon("plus")}
                        "Produk Baru"
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
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Kategori"</th>
                            <th class="table__header-cell table__header-cell--number">"Harga"</th>
                            <th class="table__header-cell table__header-cell--number">"Stok"</th>
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
                                    let edit_draft = ProductDraft::from(&row);
                                    let delete = handle_delete.clone();
                                    let delete_row = row.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| form.open_edit(edit_draft.clone())>
                                            <td class="table__cell">{row.sku}</td>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.category_name}</td>
                                            <td class="table__cell table__cell--number">{format_rupiah(row.price)}</td>
                                            <td class="table__cell table__cell--number">{row.stock}</td>
                                            <td class="table__cell table__cell--actions">
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
                            "Ubah Produk".to_string()
                        } else {
                            "Produk Baru".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| form.close())
                >
                    {move || form.state.get().error.map(|e| view! {
                        <div class="form-error">{e}</div>
                    })}
                    <div class="form-field">
                        <label class="form-field__label">"SKU"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.sku
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.sku = value);
                            }
                        />
                    </div>
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
                        <label class="form-field__label">"Kategori"</label>
                        <select
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.category_id
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.category_id = value);
                            }
                        >
                            <option value="">"Pilih kategori"</option>
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.id.to_string()>{c.name}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Harga"</label>
                        <input
                            class="form-field__input"
                            type="number"
                            prop:value=move || form.state.get().draft.price
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.price = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Stok"</label>
                        <input
                            class="form-field__input"
                            type="number"
                            prop:value=move || form.state.get().draft.stock
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.stock = value);
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
