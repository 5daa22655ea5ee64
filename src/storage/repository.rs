//! The fixed key schema over any [`KeyValueStore`].
//!
//! | key | value |
//! |---|---|
//! | `form` | the builder's working document |
//! | `form_{id}` | published snapshot at share time |
//! | `templates` | map of template name to document |
//! | `responses_{formId}` | ordered submission log |
//!
//! All values are JSON. A stored value that no longer parses degrades to
//! "absent" with a warning; a corrupt entry must never wedge a surface.

use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use super::KeyValueStore;
use crate::document::{FormDocument, default_templates};
use crate::error::StorageError;
use crate::response::Response;

const CURRENT_FORM_KEY: &str = "form";
const TEMPLATES_KEY: &str = "templates";

fn form_key(form_id: Uuid) -> String {
    format!("form_{}", form_id)
}

fn responses_key(form_id: Uuid) -> String {
    format!("responses_{}", form_id)
}

/// Storage facade owning the key-naming convention. Sessions talk to this,
/// never to raw keys.
pub struct FormRepository<S> {
    store: S,
}

impl<S: KeyValueStore> FormRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The builder's working document, if one was ever saved.
    pub fn load_current(&self) -> Result<Option<FormDocument>, StorageError> {
        self.read_json(CURRENT_FORM_KEY)
    }

    pub fn save_current(&self, document: &FormDocument) -> Result<(), StorageError> {
        self.write_json(CURRENT_FORM_KEY, document)
    }

    /// Snapshots `document` under its share id for fillers and viewers.
    pub fn publish(&self, document: &FormDocument) -> Result<(), StorageError> {
        self.write_json(&form_key(document.id), document)
    }

    pub fn load_published(&self, form_id: Uuid) -> Result<Option<FormDocument>, StorageError> {
        self.read_json(&form_key(form_id))
    }

    /// The full template map, empty when none are stored.
    pub fn templates(&self) -> Result<AHashMap<String, FormDocument>, StorageError> {
        Ok(self.read_json(TEMPLATES_KEY)?.unwrap_or_default())
    }

    /// Template names in listing order.
    pub fn template_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.templates()?.into_keys().sorted().collect())
    }

    /// Adds or replaces one named template.
    pub fn save_template(&self, name: &str, document: &FormDocument) -> Result<(), StorageError> {
        let mut templates = self.templates()?;
        templates.insert(name.to_string(), document.clone());
        self.write_json(TEMPLATES_KEY, &templates)
    }

    /// Seeds the predefined templates when the store has none. Returns
    /// whether seeding happened; a non-empty store is left untouched, so
    /// this runs exactly once per store.
    pub fn seed_default_templates(&self) -> Result<bool, StorageError> {
        if !self.templates()?.is_empty() {
            return Ok(false);
        }
        let templates: AHashMap<String, FormDocument> =
            default_templates().into_iter().collect();
        self.write_json(TEMPLATES_KEY, &templates)?;
        Ok(true)
    }

    /// All submissions for `form_id`, oldest first.
    pub fn responses(&self, form_id: Uuid) -> Result<Vec<Response>, StorageError> {
        Ok(self.read_json(&responses_key(form_id))?.unwrap_or_default())
    }

    /// Appends one submission to the per-form log.
    pub fn append_response(&self, response: &Response) -> Result<(), StorageError> {
        let mut responses = self.responses(response.form_id)?;
        responses.push(response.clone());
        self.write_json(&responses_key(response.form_id), &responses)
    }

    /// Drops the whole submission log for `form_id`.
    pub fn clear_responses(&self, form_id: Uuid) -> Result<(), StorageError> {
        self.store.remove(&responses_key(form_id))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(key, %error, "discarding malformed stored JSON");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|error| StorageError::Encode {
            key: key.to_string(),
            message: error.to_string(),
        })?;
        self.store.set(key, &raw)
    }
}
