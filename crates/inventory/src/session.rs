use stocklist_core::{DomainError, DomainResult, RecordId};

use crate::form::{Field, FormController, Submission};
use crate::record::InventoryRecord;
use crate::store::RecordStore;
use crate::view::{FilterState, SortDirection, ViewState, categories};

/// One editing session: the record store, the add/edit form, and the table's
/// filter/sort state.
///
/// Presentation layers drive the editor exclusively through this type and
/// re-render from [`EditorSession::rows`] after every call.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: RecordStore,
    form: FormController,
    view: ViewState,
}

impl EditorSession {
    /// Empty store, closed form, no filter, descending sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over the demo records.
    pub fn seeded() -> Self {
        Self::with_store(RecordStore::seeded())
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Rows to display: the store filtered and sorted by the current view.
    pub fn rows(&self) -> Vec<&InventoryRecord> {
        self.view.project(self.store.list())
    }

    /// Category choices for the filter, from the whole store.
    pub fn categories(&self) -> Vec<String> {
        categories(self.store.list())
    }

    pub fn open_create(&mut self) -> DomainResult<()> {
        self.form.open_create().inspect_err(|e| {
            tracing::warn!(error = %e, "add rejected");
        })?;
        tracing::info!("add form opened");
        Ok(())
    }

    pub fn open_edit(&mut self, id: RecordId) -> DomainResult<()> {
        let record = self.store.get(&id).ok_or_else(DomainError::not_found)?;
        self.form.open_edit(record).inspect_err(|e| {
            tracing::warn!(record_id = %id, error = %e, "edit rejected");
        })?;
        tracing::info!(record_id = %id, "edit form opened");
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> DomainResult<()> {
        self.form.set_field(field, value).inspect_err(|e| {
            tracing::warn!(field = field.as_str(), error = %e, "field edit rejected");
        })
    }

    /// Close the form, discarding staged fields. No-op when already closed.
    pub fn cancel(&mut self) {
        if self.form.cancel() {
            tracing::info!("form cancelled");
        }
    }

    /// Commit the open form to the store.
    ///
    /// Returns the id of the created or updated record; `None` when the edited
    /// record was deleted in the meantime (the update is then a no-op).
    pub fn submit(&mut self) -> DomainResult<Option<RecordId>> {
        let submission = self.form.submit().inspect_err(|e| {
            tracing::warn!(error = %e, "submit rejected");
        })?;

        match submission {
            Submission::Create(draft) => {
                let id = self.store.add(draft).record_id();
                tracing::info!(record_id = %id, "item added");
                Ok(Some(id))
            }
            Submission::Update(id, draft) => {
                if self.store.update(&id, draft) {
                    tracing::info!(record_id = %id, "item updated");
                    Ok(Some(id))
                } else {
                    tracing::info!(record_id = %id, "edited item no longer exists");
                    Ok(None)
                }
            }
        }
    }

    /// Delete a record. Unknown ids are a no-op. An open edit of the same
    /// record stays open.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let removed = self.store.remove(&id);
        if removed {
            tracing::info!(record_id = %id, "item deleted");
        }
        removed
    }

    /// `None` or an empty category shows all records.
    pub fn set_filter(&mut self, category: Option<String>) {
        self.view.filter = FilterState::new(category);
        tracing::info!(category = ?self.view.filter.category(), "filter changed");
    }

    pub fn set_sort(&mut self, direction: SortDirection) {
        self.view.sort = direction;
    }

    pub fn toggle_sort(&mut self) -> SortDirection {
        self.view.sort = self.view.sort.toggled();
        tracing::info!(direction = self.view.sort.as_str(), "sort toggled");
        self.view.sort
    }
}
