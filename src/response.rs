//! Submitted responses and the viewer-side report built from them.

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::document::FormDocument;

/// A submitted value. Text inputs, textareas, dropdowns, and dates travel
/// as strings (dates as ISO strings); checkboxes as booleans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Checked(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{}", text),
            Answer::Checked(checked) => write!(f, "{}", checked),
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<bool> for Answer {
    fn from(checked: bool) -> Self {
        Answer::Checked(checked)
    }
}

/// One filled-out submission. Created once on successful submit, immutable
/// thereafter, appended to the per-form response log.
///
/// `form_id` is a weak reference: the form may be edited or replaced later
/// without invalidating this record, so field lookups by id can fail when
/// viewing (see [`ResponseReport`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub form_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub responses: AHashMap<Uuid, Answer>,
}

/// A single rendered answer in the response viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub field_id: Uuid,
    /// `None` when the field has since been removed from the form; viewers
    /// render a placeholder instead of failing.
    pub label: Option<String>,
    pub value: Answer,
}

/// A response resolved against the current (possibly since-edited) form
/// definition, ready for display.
#[derive(Debug, Clone)]
pub struct ResponseReport {
    pub submitted_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl ResponseReport {
    /// Resolves every answer in `response` against `document`. Entries
    /// follow the document's field order; answers whose field no longer
    /// exists keep a `None` label and trail the known entries in id order.
    pub fn build(document: &FormDocument, response: &Response) -> Self {
        let mut entries = Vec::new();
        for field in &document.fields {
            if let Some(value) = response.responses.get(&field.id) {
                entries.push(ReportEntry {
                    field_id: field.id,
                    label: Some(field.label.clone()),
                    value: value.clone(),
                });
            }
        }

        let mut stale: Vec<(&Uuid, &Answer)> = response
            .responses
            .iter()
            .filter(|(id, _)| document.field(**id).is_none())
            .collect();
        stale.sort_by_key(|(id, _)| **id);
        for (id, value) in stale {
            entries.push(ReportEntry {
                field_id: *id,
                label: None,
                value: value.clone(),
            });
        }

        Self {
            submitted_at: response.submitted_at,
            entries,
        }
    }
}
