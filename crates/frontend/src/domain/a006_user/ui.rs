use super::api;
use crate::domain::a003_branch::api as branch_api;
use crate::domain::a007_role::api as role_api;
use crate::shared::api::ApiClient;
use crate::shared::components::{Modal, PaginationControls, SearchInput};
use crate::shared::confirm;
use crate::shared::form_state::{FormController, FormMode};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::notify::use_notify;
use contracts::domain::a003_branch::Branch;
use contracts::domain::a006_user::{User, UserDraft};
use contracts::domain::a007_role::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UserList() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notify = use_notify();

    let list = ListController::new({
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::list(&client, &query).await }
        }
    });

    let roles = RwSignal::new(Vec::<Role>::new());
    let branches = RwSignal::new(Vec::<Branch>::new());
    {
        let client = client.clone();
        spawn_local(async move {
            match role_api::all(&client).await {
                Ok(items) => roles.set(items),
                Err(e) => notify.error(e.to_string()),
            }
            match branch_api::all(&client).await {
                Ok(items) => branches.set(items),
                Err(e) => notify.error(e.to_string()),
            }
        });
    }

    let form = FormController::new(
        {
            let client = client.clone();
            move |draft: UserDraft, _mode: FormMode| {
                let client = client.clone();
                async move {
                    match draft.existing.clone() {
                        Some(username) => api::update(&client, &username, &draft).await,
                        None => api::create(&client, &draft).await,
                    }
                }
            }
        },
        move || {
            notify.success("Pengguna tersimpan");
            list.refetch();
        },
    );

    let handle_delete = {
        let client = client.clone();
        move |record: User| {
            if !confirm(&format!("Hapus pengguna \"{}\"?", record.username)) {
                return;
            }
            let client = client.clone();
            spawn_local(async move {
                match api::remove(&client, &record.username).await {
                    Ok(()) => {
                        notify.success("Pengguna dihapus");
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
                    placeholder="Cari pengguna..."
                />
                <div class="page-toolbar__actions">
                    <button class="button button--primary" on:click=move |_| form.open_add()>
                        {icon("plus")}
                        "Pengguna Baru"
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
                            <th class="table__header-cell">"Username"</th>
                            <th class="table__header-cell">"Nama Lengkap"</th>
                            <th class="table__header-cell">"Peran"</th>
                            <th class="table__header-cell">"Cabang"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.state.get();
                            if state.loading {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="5">"Memuat..."</td></tr>
                                }.into_any()
                            } else if state.items.is_empty() {
                                view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="5">"Tidak ada data"</td></tr>
                                }.into_any()
                            } else {
                                state.items.into_iter().map(|row| {
                                    let edit_draft = UserDraft::from(&row);
                                    let delete = handle_delete.clone();
                                    let delete_row = row.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| form.open_edit(edit_draft.clone())>
                                            <td class="table__cell">{row.username}</td>
                                            <td class="table__cell">{row.full_name}</td>
                                            <td class="table__cell">{row.role}</td>
                                            <td class="table__cell">{row.branch_name}</td>
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
                            "Ubah Pengguna".to_string()
                        } else {
                            "Pengguna Baru".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| form.close())
                >
                    {move || form.state.get().error.map(|e| view! {
                        <div class="form-error">{e}</div>
                    })}
                    <div class="form-field">
                        <label class="form-field__label">"Username"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.username
                            disabled=move || form.state.get().mode == FormMode::Edit
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.username = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Nama Lengkap"</label>
                        <input
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.full_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.full_name = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Peran"</label>
                        <select
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.role
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.role = value);
                            }
                        >
                            <option value="">"Pilih peran"</option>
                            {move || roles.get().into_iter().map(|r| view! {
                                <option value=r.name.clone()>{r.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">"Cabang"</label>
                        <select
                            class="form-field__input"
                            prop:value=move || form.state.get().draft.branch_id
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.branch_id = value);
                            }
                        >
                            <option value="">"Tanpa cabang"</option>
                            {move || branches.get().into_iter().map(|b| view! {
                                <option value=b.id.to_string()>{b.name}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label class="form-field__label">
                            {move || {
                                if form.state.get().mode == FormMode::Edit {
                                    "Password (kosongkan jika tidak diubah)"
                                } else {
                                    "Password"
                                }
                            }}
                        </label>
                        <input
                            class="form-field__input"
                            type="password"
                            prop:value=move || form.state.get().draft.password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update_draft(|d| d.password = value);
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
