use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{Modal, PaginationControls, SearchInput};
use crate::shared::confirm;
use crate::shared::form_state::{FormController, FormMode};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::notify::use_notify;
use contracts::domain::a001_category::{Category, CategoryDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CategoryList() -> impl IntoView {
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
            move |draft: CategoryDraft, _mode: FormMode| {
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
            notify.success("Kategori tersimpan");
            list.refetch();
        },
    );

    let handle_delete = {
        let client = client.clone();
        move |record: Category| {
            if !confirm(&format!("Hapus kategori \"{}\"?", record.name)) {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::remove(&client, record.id).await {
                    Ok(()) => {
                        notify.success("Kategori dihapus");
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
                    placeholder="Cari kategori..."
                />
                <div class="page-toolbar__actions">
                    <button class="button button--primary" on:click=move |_| form.open_add()>
                        {icon("plus")}
                        "Kategori Baru"
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
                            <th class="table__header-cell">"Deskripsi"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.state.get();
                            if state.loading {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="3">"Memuat..."</td></tr>
                                }.into_any()
                            } else if state.items.is_empty() {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="3">"Tidak ada data"</td></tr>
                                }.into_any()
                            } else {
                                state.items.into_iter().map(|row| {
                                    let edit_draft = CategoryDraft::from(&row);
                                    let delete = handle_delete.clone();
                                    let delete_row = row.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| form.open_edit(edit_draft.clone())>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.description}</td>
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
                            "Ubah Kategori".to_string()
                        } else {
                            "Kategori Baru".to_string()
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
                        <label class="form-field__label">"Deskripsi"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.description = value);
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
