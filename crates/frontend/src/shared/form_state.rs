//! One add-or-edit modal session: draft, mode, submit, discard.
//!
//! Mirrors the split used by the list machinery: [`FormState`] holds the
//! pure transitions, [`FormController`] wires them to the network and the
//! owning list's refetch.

use crate::shared::api::ApiError;
use contracts::validate::Validate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Clone, Debug)]
pub struct FormState<D> {
    pub open: bool,
    pub mode: FormMode,
    pub draft: D,
    pub error: Option<String>,
    pub saving: bool,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self {
            open: false,
            mode: FormMode::Add,
            draft: D::default(),
            error: None,
            saving: false,
        }
    }
}

impl<D: Default + Clone + Validate> FormState<D> {
    pub fn open_add(&mut self) {
        self.draft = D::default();
        self.mode = FormMode::Add;
        self.open = true;
        self.error = None;
        self.saving = false;
    }

    pub fn open_edit(&mut self, draft: D) {
        self.draft = draft;
        self.mode = FormMode::Edit;
        self.open = true;
        self.error = None;
        self.saving = false;
    }

    /// Discards the draft unconditionally; unsaved edits are not prompted
    /// about.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = D::default();
        self.error = None;
        self.saving = false;
    }

    /// Validation gate. An invalid draft surfaces its field message and
    /// produces no submission at all.
    pub fn begin_submit(&mut self) -> Option<(D, FormMode)> {
        if let Err(message) = self.draft.validate() {
            self.error = Some(message);
            return None;
        }
        self.error = None;
        self.saving = true;
        Some((self.draft.clone(), self.mode))
    }

    pub fn fail_submit(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }
}

type SubmitFn<D> = Rc<dyn Fn(D, FormMode) -> Pin<Box<dyn Future<Output = Result<(), ApiError>>>>>;

/// Copyable handle for one modal form. `submit` decides POST vs PUT from
/// the mode and the draft's identity; `on_saved` is the owning list's
/// refetch.
pub struct FormController<D: Clone + Default + Validate + Send + Sync + 'static> {
    pub state: RwSignal<FormState<D>>,
    submit_fn: StoredValue<SubmitFn<D>, LocalStorage>,
    on_saved: StoredValue<Rc<dyn Fn()>, LocalStorage>,
}

impl<D: Clone + Default + Validate + Send + Sync + 'static> Clone for FormController<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Clone + Default + Validate + Send + Sync + 'static> Copy for FormController<D> {}

impl<D: Clone + Default + Validate + Send + Sync + 'static> FormController<D> {
    pub fn new<F, Fut>(submit: F, on_saved: impl Fn() + 'static) -> Self
    where
        F: Fn(D, FormMode) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        Self {
            state: RwSignal::new(FormState::default()),
            submit_fn: StoredValue::new_local(Rc::new(move |draft, mode| {
                Box::pin(submit(draft, mode)) as Pin<Box<dyn Future<Output = _>>>
            })),
            on_saved: StoredValue::new_local(Rc::new(on_saved)),
        }
    }

    pub fn open_add(&self) {
        self.state.try_update(|s| s.open_add());
    }

    pub fn open_edit(&self, draft: D) {
        self.state.try_update(|s| s.open_edit(draft));
    }

    pub fn close(&self) {
        self.state.try_update(|s| s.close());
    }

    pub fn update_draft(&self, apply: impl FnOnce(&mut D)) {
        self.state.try_update(|s| apply(&mut s.draft));
    }

    /// On success the modal closes and the owning list refetches; on
    /// failure the modal stays open with the server's message so the user
    /// can retry without re-entering data.
    pub fn submit(&self) {
        let Some(Some((draft, mode))) = self.state.try_update(|s| s.begin_submit()) else {
            return;
        };
        let state = self.state;
        let submit_fn = self.submit_fn;
        let on_saved = self.on_saved;
        spawn_local(async move {
            let Some(future) = submit_fn.try_with_value(|f| f(draft, mode)) else {
                return;
            };
            match future.await {
                Ok(()) => {
                    state.try_update(|s| s.close());
                    on_saved.try_with_value(|f| f());
                }
                Err(error) => {
                    log::error!("form submit failed: {error}");
                    state.try_update(|s| s.fail_submit(error.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::validate::require;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct NameDraft {
        id: Option<i64>,
        name: String,
    }

    impl Validate for NameDraft {
        fn validate(&self) -> Result<(), String> {
            require(&self.name, "Nama")
        }
    }

    #[test]
    fn open_add_starts_from_defaults() {
        let mut state = FormState::<NameDraft>::default();
        state.draft.name = "leftover".to_string();
        state.open_add();
        assert!(state.open);
        assert_eq!(state.mode, FormMode::Add);
        assert_eq!(state.draft, NameDraft::default());
    }

    #[test]
    fn invalid_draft_blocks_submission_and_keeps_modal_open() {
        let mut state = FormState::<NameDraft>::default();
        state.open_add();
        assert_eq!(state.begin_submit(), None);
        assert!(state.open);
        assert!(!state.saving);
        assert_eq!(state.error, Some("Nama wajib diisi".to_string()));
    }

    #[test]
    fn valid_draft_enters_saving_state() {
        let mut state = FormState::<NameDraft>::default();
        state.open_edit(NameDraft {
            id: Some(3),
            name: "Sepatu".to_string(),
        });
        let (draft, mode) = state.begin_submit().unwrap();
        assert_eq!(mode, FormMode::Edit);
        assert_eq!(draft.id, Some(3));
        assert!(state.saving);
        assert_eq!(state.error, None);
    }

    #[test]
    fn close_discards_the_draft() {
        let mut state = FormState::<NameDraft>::default();
        state.open_edit(NameDraft {
            id: Some(3),
            name: "Sepatu".to_string(),
        });
        state.close();
        assert!(!state.open);
        assert_eq!(state.draft, NameDraft::default());
    }

    #[test]
    fn aborted_submit_releases_saving_and_keeps_modal_open() {
        // A mutation that hits the request timeout surfaces as a network
        // error; the form must come back editable, not stay on "saving".
        let mut state = FormState::<NameDraft>::default();
        state.open_add();
        state.draft.name = "Sepatu".to_string();
        state.begin_submit().unwrap();
        assert!(state.saving);

        let error = ApiError::Network("request aborted".to_string());
        state.fail_submit(error.to_string());
        assert!(!state.saving);
        assert!(state.open);
        assert!(state.error.is_some());
    }

    #[test]
    fn failed_submit_keeps_modal_open_with_message() {
        let mut state = FormState::<NameDraft>::default();
        state.open_add();
        state.draft.name = "Sepatu".to_string();
        state.begin_submit().unwrap();
        state.fail_submit("SKU sudah terpakai".to_string());
        assert!(state.open);
        assert!(!state.saving);
        assert_eq!(state.error, Some("SKU sudah terpakai".to_string()));
    }
}
