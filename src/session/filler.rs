use ahash::AHashMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::document::{Field, FormDocument};
use crate::error::FillError;
use crate::response::{Answer, Response};
use crate::storage::{FormRepository, KeyValueStore};
use crate::validate::{Violation, validate};

/// One fill-out session for a published form: collected answers, the page
/// being shown, and the step-gated navigation of the original flow.
pub struct FillerSession {
    document: FormDocument,
    answers: AHashMap<Uuid, Answer>,
    current_step: u32,
}

impl FillerSession {
    /// Looks up the published snapshot for `form_id`. An unknown id is the
    /// filler's "not found" state, not a panic.
    pub fn open<S: KeyValueStore>(
        repository: &FormRepository<S>,
        form_id: Uuid,
    ) -> Result<Self, FillError> {
        let document = repository
            .load_published(form_id)?
            .ok_or(FillError::FormNotFound { form_id })?;
        Ok(Self::over(document))
    }

    /// Builds a filler directly over a document, for the builder's live
    /// preview. Validation behaves exactly as it does after publishing.
    pub fn preview(document: FormDocument) -> Self {
        Self::over(document)
    }

    fn over(document: FormDocument) -> Self {
        Self {
            document,
            answers: AHashMap::new(),
            current_step: 1,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn set_answer(&mut self, field_id: Uuid, answer: impl Into<Answer>) {
        self.answers.insert(field_id, answer.into());
    }

    pub fn answer(&self, field_id: Uuid) -> Option<&Answer> {
        self.answers.get(&field_id)
    }

    /// Drops all answers and returns to the first page.
    pub fn clear(&mut self) {
        self.answers.clear();
        self.current_step = 1;
    }

    /// Fields on the page currently shown, in document order.
    pub fn step_fields(&self) -> Vec<&Field> {
        self.document.fields_for_step(self.current_step).collect()
    }

    /// Violations for the current page, in field order. Fields with no
    /// violations are omitted.
    pub fn validate_step(&self) -> Vec<(Uuid, Vec<Violation>)> {
        collect_violations(
            self.document.fields_for_step(self.current_step),
            &self.answers,
        )
    }

    /// Violations across every field of the document.
    pub fn validate_all(&self) -> Vec<(Uuid, Vec<Violation>)> {
        collect_violations(self.document.fields.iter(), &self.answers)
    }

    /// Advances to the next page if the current one validates. Returns the
    /// violations that blocked the move; empty means it advanced (or was
    /// already on the last page).
    pub fn next(&mut self) -> Vec<(Uuid, Vec<Violation>)> {
        let violations = self.validate_step();
        if violations.is_empty() && self.current_step < self.document.steps {
            self.current_step += 1;
        }
        violations
    }

    pub fn back(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Completion ratio for the progress bar, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.current_step as f32 / self.document.steps as f32
    }

    /// Validates every field of the document and, when clean, appends a
    /// [`Response`] to the per-form log and resets the session for the next
    /// respondent. Any violation blocks the submission and nothing is
    /// persisted. The caller supplies the submission instant so the core
    /// stays deterministic.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        repository: &FormRepository<S>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Response, FillError> {
        let violations = self.validate_all();
        if !violations.is_empty() {
            return Err(FillError::ValidationFailed { violations });
        }
        let response = Response {
            form_id: self.document.id,
            submitted_at,
            responses: self.answers.clone(),
        };
        repository.append_response(&response)?;
        self.clear();
        Ok(response)
    }
}

fn collect_violations<'a>(
    fields: impl Iterator<Item = &'a Field>,
    answers: &AHashMap<Uuid, Answer>,
) -> Vec<(Uuid, Vec<Violation>)> {
    fields
        .filter_map(|field| {
            let violations = validate(field, answers.get(&field.id));
            (!violations.is_empty()).then_some((field.id, violations))
        })
        .collect()
}
