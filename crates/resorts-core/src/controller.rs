//! Resort list controller.
//!
//! Holds the in-memory mirror of the collection together with the form
//! state, issues the CRUD requests and reconciles with the store by reloading
//! the whole collection after every successful mutation.
//!
//! Store failures never escape: each operation logs the failure, remembers it
//! in [`ResortListController::last_error`] and reports `false`.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::ResortStore;
use crate::error::Error;
use crate::models::{FormMode, FormState, Resort, ResortDraft, ResortId};

/// Synchronous yes/no gate shown before a delete is issued.
pub trait ConfirmDelete {
    fn confirm_delete(&self, id: &ResortId) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(&ResortId) -> bool,
{
    fn confirm_delete(&self, id: &ResortId) -> bool {
        self(id)
    }
}

#[derive(Debug, Default)]
struct ControllerState {
    records: Vec<Resort>,
    form: FormState,
    last_error: Option<String>,
}

/// Application state for the resort list, shared by cheap clones.
///
/// The state lock is never held across a store request, so operations may
/// overlap; whichever trailing reload finishes last decides `records`.
pub struct ResortListController<S> {
    store: Arc<S>,
    state: Arc<Mutex<ControllerState>>,
}

impl<S> Clone for ResortListController<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: ResortStore> ResortListController<S> {
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ControllerState::default())),
        }
    }

    /// Build a controller and perform the initial load.
    pub async fn activate(store: S) -> Self {
        let controller = Self::new(store);
        controller.load().await;
        controller
    }

    /// Replace `records` with the store's collection.
    ///
    /// On failure the current records are kept.
    pub async fn load(&self) -> bool {
        match self.store.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Loaded resorts");
                let mut state = self.state.lock().await;
                state.records = records;
                state.last_error = None;
                true
            }
            Err(error) => {
                self.record_failure("load", &error).await;
                false
            }
        }
    }

    /// Send the draft to the store, then reset the form and reload.
    ///
    /// Creates when the form is in `Creating` mode, updates the edit target
    /// otherwise. An invalid draft is not transmitted. On any failure the
    /// draft and mode are left as they were. Returns whether the store
    /// accepted the write.
    pub async fn submit(&self) -> bool {
        let (fields, mode) = {
            let state = self.state.lock().await;
            (state.form.draft().to_fields(), state.form.mode().clone())
        };

        let fields = match fields {
            Ok(fields) => fields,
            Err(error) => {
                self.record_failure("submit", &error).await;
                return false;
            }
        };

        let target = mode.edit_target();
        let result = match target {
            None => self.store.create(&fields).await,
            Some(id) => self.store.update(id, &fields).await,
        };
        if let Err(error) = result {
            self.record_failure("submit", &error).await;
            return false;
        }

        match target {
            None => tracing::info!(name = %fields.name, "Created resort"),
            Some(id) => tracing::info!(resort = %id, "Updated resort"),
        }
        {
            let mut state = self.state.lock().await;
            state.form = FormState::creating();
            state.last_error = None;
        }
        self.load().await;
        true
    }

    /// Switch to editing `record`, discarding any unsaved draft.
    pub async fn begin_edit(&self, record: &Resort) {
        let mut state = self.state.lock().await;
        if !state.records.iter().any(|existing| existing.id == record.id) {
            tracing::debug!(resort = %record.id, "Editing a record not in the current list");
        }
        state.form = FormState::editing(record);
    }

    /// Drop the draft and go back to creating a new record.
    pub async fn cancel_edit(&self) {
        self.state.lock().await.form = FormState::creating();
    }

    /// Apply a user edit to the draft; the form mode is untouched.
    pub async fn update_draft(&self, edit: impl FnOnce(&mut ResortDraft) + Send) {
        edit(self.state.lock().await.form.draft_mut());
    }

    /// Ask `confirm`, then delete `id` and reload.
    ///
    /// A declined confirmation has no effect. When the store rejects the
    /// delete nothing local changes and the record stays listed until a
    /// later successful load. Returns whether the store deleted the record.
    pub async fn delete_record<C>(&self, id: &ResortId, confirm: &C) -> bool
    where
        C: ConfirmDelete + Sync + ?Sized,
    {
        if !confirm.confirm_delete(id) {
            tracing::debug!(resort = %id, "Delete not confirmed");
            return false;
        }

        if let Err(error) = self.store.delete(id).await {
            self.record_failure("delete", &error).await;
            return false;
        }

        tracing::info!(resort = %id, "Deleted resort");
        self.state.lock().await.last_error = None;
        self.load().await;
        true
    }

    pub async fn records(&self) -> Vec<Resort> {
        self.state.lock().await.records.clone()
    }

    pub async fn find(&self, id: &ResortId) -> Option<Resort> {
        self.state
            .lock()
            .await
            .records
            .iter()
            .find(|record| &record.id == id)
            .cloned()
    }

    pub async fn form(&self) -> FormState {
        self.state.lock().await.form.clone()
    }

    pub async fn draft(&self) -> ResortDraft {
        self.state.lock().await.form.draft().clone()
    }

    pub async fn mode(&self) -> FormMode {
        self.state.lock().await.form.mode().clone()
    }

    /// Message of the most recent failed operation, cleared on success.
    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }

    async fn record_failure(&self, action: &'static str, error: &Error) {
        if error.is_transport() {
            tracing::error!(action, %error, "Resort store request failed");
        } else {
            tracing::warn!(action, %error, "Resort request not sent");
        }
        self.state.lock().await.last_error = Some(error.to_string());
    }
}
