//! # Form State Module
//!
//! Holds the draft edited inside the create/edit modal. The draft is seeded from
//! an empty template (create) or a copy of an existing record (edit), edited one
//! string field at a time, and handed back verbatim on submit once every
//! required field is filled.

use shared::{FieldError, Record, RecordId, ResourceFields};

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Required fields left empty; nothing was sent
    #[error("Required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// The draft produced by a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub mode: FormMode,
    pub draft: F,
}

/// Draft record plus its create/edit mode
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    mode: FormMode,
    draft: F,
}

impl<F: ResourceFields> FormState<F> {
    /// Empty template for a new record
    pub fn for_create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: F::default(),
        }
    }

    /// Copy of an existing record, keyed by its ID
    pub fn for_edit(record: &Record<F>) -> Self {
        Self {
            mode: FormMode::Edit(record.id),
            draft: record.fields.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &F {
        &self.draft
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.draft.field(name)
    }

    /// Shallow-set one field; values are kept as typed, no coercion
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        self.draft.set_field(name, value)
    }

    /// Point the form at a different record (or at a blank create template).
    ///
    /// When the target identity differs from the current one the draft is
    /// replaced wholesale; pointing at the same identity keeps the edits.
    pub fn reseed(&mut self, record: Option<&Record<F>>) {
        let target = record.map(|r| r.id);
        if target == self.mode.record_id() {
            return;
        }
        *self = match record {
            Some(record) => Self::for_edit(record),
            None => Self::for_create(),
        };
    }

    /// Hand back the draft if every required field is filled
    pub fn submit(&self) -> Result<Submission<F>, FormError> {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(Submission {
            mode: self.mode,
            draft: self.draft.clone(),
        })
    }

    /// Discard the draft
    pub fn cancel(self) {}

    /// Modal title, e.g. "New animal" or "Edit animal"
    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", F::LABEL),
            FormMode::Edit(_) => format!("Edit {}", F::LABEL),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AnimalFields, CareFields};

    fn stored_care(id: RecordId, name: &str) -> Record<CareFields> {
        Record::new(
            id,
            CareFields {
                care_name: name.to_string(),
                description: "Rotina".to_string(),
                frequency: "Semanal".to_string(),
            },
        )
    }

    #[test]
    fn test_create_form_starts_blank() {
        let form: FormState<AnimalFields> = FormState::for_create();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), &AnimalFields::default());
        assert_eq!(form.title(), "New animal");
        assert_eq!(form.submit_label(), "Create");
    }

    #[test]
    fn test_edit_form_copies_record() {
        let record = stored_care(4, "Limpeza");
        let form = FormState::for_edit(&record);

        assert_eq!(form.mode(), FormMode::Edit(4));
        assert_eq!(form.draft(), &record.fields);
        assert_eq!(form.title(), "Edit care");
    }

    #[test]
    fn test_set_field_merges_one_field() {
        let mut form = FormState::for_edit(&stored_care(4, "Limpeza"));
        form.set_field("frequencia", "Mensal").unwrap();

        assert_eq!(form.draft().frequency, "Mensal");
        assert_eq!(form.draft().care_name, "Limpeza");
        assert_eq!(
            form.set_field("nome", "x"),
            Err(FieldError::UnknownField("nome".to_string()))
        );
    }

    #[test]
    fn test_submit_blocks_missing_required_fields() {
        let mut form: FormState<AnimalFields> = FormState::for_create();
        form.set_field("nome", "").unwrap();
        form.set_field("habitat", "Savana").unwrap();

        let err = form.submit().unwrap_err();

        assert_eq!(
            err,
            FormError::MissingFields(vec!["nome", "dataNascimento", "especie", "paisOrigem"])
        );
    }

    #[test]
    fn test_submit_returns_draft_verbatim() {
        let mut form: FormState<CareFields> = FormState::for_create();
        form.set_field("nomeCuidado", "Vacinação").unwrap();
        form.set_field("frequencia", "Anual").unwrap();

        let submission = form.submit().unwrap();

        assert_eq!(submission.mode, FormMode::Create);
        assert_eq!(submission.draft.care_name, "Vacinação");
        assert_eq!(submission.draft.description, "");
    }

    #[test]
    fn test_reseed_with_new_identity_replaces_draft() {
        let mut form = FormState::for_edit(&stored_care(1, "Limpeza"));
        form.set_field("descricao", "editado").unwrap();

        form.reseed(Some(&stored_care(2, "Treinamento")));

        assert_eq!(form.mode(), FormMode::Edit(2));
        assert_eq!(form.draft(), &stored_care(2, "Treinamento").fields);
    }

    #[test]
    fn test_reseed_with_same_identity_keeps_edits() {
        let mut form = FormState::for_edit(&stored_care(1, "Limpeza"));
        form.set_field("descricao", "editado").unwrap();

        form.reseed(Some(&stored_care(1, "Limpeza")));

        assert_eq!(form.draft().description, "editado");
    }

    #[test]
    fn test_reseed_to_create_clears_draft() {
        let mut form = FormState::for_edit(&stored_care(1, "Limpeza"));

        form.reseed(None);

        assert_eq!(form, FormState::for_create());
    }
}
