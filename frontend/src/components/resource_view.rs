//! # Resource View
//!
//! Orchestrates one list-detail screen: the list controller, the record form
//! and the modal hosting it.
//!
//! ## Flow
//! 1. The shell calls `open_create` / `open_edit`, which seeds a form and opens the modal
//! 2. Field edits go to the form draft
//! 3. `submit_form` validates the draft, sends it, and on success closes the modal
//!    and reloads the list; on failure the modal stays open
//! 4. `delete_with_confirmation` asks the user first and reloads after a delete
//!
//! Every failure is also pushed to the caller's [`Notifier`].

use log::info;
use shared::{FieldError, Record, RecordId};

use super::collaborators::{Confirm, Notifier};
use super::table::TableColumns;
use crate::services::{ApiError, ResourceApi};
use crate::state::{FormError, FormMode, FormState, ListController, ModalState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("no {label} with ID {id} in the current list")]
    UnknownRecord { label: &'static str, id: RecordId },
    #[error("no form is open")]
    NoOpenForm,
}

/// One list view with its modal form
pub struct ResourceView<F: TableColumns, A> {
    list: ListController<F, A>,
    form: Option<FormState<F>>,
    modal: ModalState,
}

impl<F: TableColumns, A: ResourceApi<F>> ResourceView<F, A> {
    pub fn new(api: A) -> Self {
        Self {
            list: ListController::new(api),
            form: None,
            modal: ModalState::new(),
        }
    }

    pub fn list(&self) -> &ListController<F, A> {
        &self.list
    }

    pub fn form(&self) -> Option<&FormState<F>> {
        self.form.as_ref()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Initial load when the view is shown
    pub async fn mount(&mut self, notifier: &mut impl Notifier) -> Result<(), ViewError> {
        let result = self.list.mount().await;
        self.report(result, notifier)
    }

    pub async fn refresh(&mut self, notifier: &mut impl Notifier) -> Result<(), ViewError> {
        let result = self.list.refresh().await;
        self.report(result, notifier)
    }

    /// Change one filter; the list reloads on the next refresh
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) -> Result<(), ViewError> {
        self.list.set_filter(field, value)?;
        Ok(())
    }

    pub async fn clear_filters(&mut self, notifier: &mut impl Notifier) -> Result<(), ViewError> {
        let result = self.list.clear_filters().await;
        self.report(result, notifier)
    }

    pub fn open_create(&mut self) {
        self.show_form(None);
    }

    /// Open the form on a record from the current list
    pub fn open_edit(&mut self, id: RecordId) -> Result<(), ViewError> {
        let record = self
            .list
            .find(id)
            .cloned()
            .ok_or(ViewError::UnknownRecord { label: F::LABEL, id })?;
        self.show_form(Some(&record));
        Ok(())
    }

    fn show_form(&mut self, record: Option<&Record<F>>) {
        let form = match self.form.take() {
            Some(mut form) => {
                form.reseed(record);
                form
            }
            None => match record {
                Some(record) => FormState::for_edit(record),
                None => FormState::for_create(),
            },
        };
        self.modal.open(form.title());
        self.form = Some(form);
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ViewError> {
        let form = self.form.as_mut().ok_or(ViewError::NoOpenForm)?;
        form.set_field(name, value)?;
        Ok(())
    }

    /// Cancel the form and hide the modal; the list is untouched
    pub fn close_form(&mut self) {
        if let Some(form) = self.form.take() {
            form.cancel();
        }
        self.modal.close();
    }

    /// Validate and send the open form.
    ///
    /// Closes the modal only when the server accepted the draft. Missing
    /// required fields are rejected here without any request.
    pub async fn submit_form(&mut self, notifier: &mut impl Notifier) -> Result<Record<F>, ViewError> {
        let form = self.form.as_ref().ok_or(ViewError::NoOpenForm)?;

        let submission = match form.submit() {
            Ok(submission) => submission,
            Err(e) => {
                notifier.notify(&format!("Cannot save {}: {}", F::LABEL, e));
                return Err(e.into());
            }
        };

        let result = match submission.mode {
            FormMode::Create => self.list.create_record(&submission.draft).await,
            FormMode::Edit(id) => self.list.update_record(id, &submission.draft).await,
        };

        match result {
            Ok(record) => {
                info!("Saved {} {}", F::LABEL, record.id);
                self.close_form();
                self.notify_load_error(notifier);
                Ok(record)
            }
            Err(e) => {
                notifier.notify(&format!("Failed to save {}: {}", F::LABEL, e));
                Err(e.into())
            }
        }
    }

    /// Ask for confirmation, then delete. Returns false when the user declined.
    pub async fn delete_with_confirmation(
        &mut self,
        id: RecordId,
        confirm: &mut impl Confirm,
        notifier: &mut impl Notifier,
    ) -> Result<bool, ViewError> {
        let prompt = format!("Are you sure you want to delete this {}?", F::LABEL);
        if !confirm.confirm(&prompt) {
            return Ok(false);
        }

        match self.list.delete_record(id).await {
            Ok(()) => {
                self.notify_load_error(notifier);
                Ok(true)
            }
            Err(e) => {
                notifier.notify(&format!("Failed to delete {}: {}", F::LABEL, e));
                Err(e.into())
            }
        }
    }

    /// Table cells for every record in the current collection
    pub fn rows(&self) -> Vec<(RecordId, Vec<String>)> {
        self.list
            .records()
            .iter()
            .map(|record| (record.id, record.fields.cells()))
            .collect()
    }

    /// Placeholder text shown instead of the table, if any
    pub fn placeholder(&self) -> Option<String> {
        if self.list.is_loading() {
            Some(F::loading_message())
        } else if self.list.records().is_empty() {
            Some(F::empty_message())
        } else {
            None
        }
    }

    fn report(&self, result: Result<(), ApiError>, notifier: &mut impl Notifier) -> Result<(), ViewError> {
        result.map_err(|e| {
            notifier.notify(&format!("Failed to load {}: {}", F::PLURAL, e));
            e.into()
        })
    }

    fn notify_load_error(&self, notifier: &mut impl Notifier) {
        if let Some(e) = self.list.load_error() {
            notifier.notify(&format!("Failed to load {}: {}", F::PLURAL, e));
        }
    }
}
