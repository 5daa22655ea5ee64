use tracing::debug;
use uuid::Uuid;

use crate::document::{Field, FieldPatch, FieldType, FormDocument};
use crate::error::StorageError;
use crate::history::History;
use crate::storage::{FormRepository, KeyValueStore};

/// One builder editing session: the current document, its undo history, and
/// the repository the document is mirrored into.
///
/// Surfaces receive this object explicitly; there is no ambient context or
/// singleton. Every edit funnels through [`apply`](Self::apply), which
/// records a history entry and persists the snapshot. Undo and redo are
/// replays: they restore and persist a snapshot but never record one.
pub struct BuilderSession<S: KeyValueStore> {
    repository: FormRepository<S>,
    history: History,
    document: FormDocument,
}

impl<S: KeyValueStore> BuilderSession<S> {
    /// Opens a session over `store`: restores the working document (absent
    /// or unreadable state starts a fresh one), resets history, and seeds
    /// the predefined templates on first run.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let repository = FormRepository::new(store);
        let document = match repository.load_current()? {
            Some(document) => document,
            None => {
                let fresh = FormDocument::new();
                repository.save_current(&fresh)?;
                fresh
            }
        };
        if repository.seed_default_templates()? {
            debug!("seeded predefined templates");
        }
        Ok(Self {
            history: History::new(document.clone()),
            document,
            repository,
        })
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn repository(&self) -> &FormRepository<S> {
        &self.repository
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies an edited document wholesale: records a history entry and
    /// persists it. All edit operations funnel through here; imported
    /// documents can be applied directly.
    pub fn apply(&mut self, document: FormDocument) -> Result<&FormDocument, StorageError> {
        self.history.record(document.clone());
        self.repository.save_current(&document)?;
        self.document = document;
        Ok(&self.document)
    }

    pub fn add_field(&mut self, ty: FieldType) -> Result<&FormDocument, StorageError> {
        let next = self.document.add_field(ty);
        self.apply(next)
    }

    pub fn update_field(
        &mut self,
        field_id: Uuid,
        patch: FieldPatch,
    ) -> Result<&FormDocument, StorageError> {
        let next = self.document.update_field(field_id, patch);
        self.apply(next)
    }

    pub fn reorder_fields(&mut self, new_order: Vec<Field>) -> Result<&FormDocument, StorageError> {
        let next = self.document.reorder_fields(new_order);
        self.apply(next)
    }

    pub fn set_step_count(&mut self, steps: u32) -> Result<&FormDocument, StorageError> {
        let next = self.document.set_step_count(steps);
        self.apply(next)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<&FormDocument, StorageError> {
        let next = self.document.set_title(title);
        self.apply(next)
    }

    /// Loads a stored template by name into the current document, keeping
    /// the document's share id. Returns `false` when no such template
    /// exists.
    pub fn load_template(&mut self, name: &str) -> Result<bool, StorageError> {
        let templates = self.repository.templates()?;
        let Some(template) = templates.get(name) else {
            return Ok(false);
        };
        let next = self.document.load_template(template);
        self.apply(next)?;
        Ok(true)
    }

    /// Stores the current document as a template under `name`.
    pub fn save_as_template(&self, name: &str) -> Result<(), StorageError> {
        self.repository.save_template(name, &self.document)
    }

    /// Undoes one edit. A replay: the restored snapshot is persisted so the
    /// store mirrors what the builder shows, but nothing is re-recorded.
    pub fn undo(&mut self) -> Result<&FormDocument, StorageError> {
        let restored = self.history.undo().clone();
        self.repository.save_current(&restored)?;
        self.document = restored;
        Ok(&self.document)
    }

    /// Redoes one undone edit; same replay rules as [`undo`](Self::undo).
    pub fn redo(&mut self) -> Result<&FormDocument, StorageError> {
        let restored = self.history.redo().clone();
        self.repository.save_current(&restored)?;
        self.document = restored;
        Ok(&self.document)
    }

    /// Discards the current document for a fresh one ("New Form"). The old
    /// document stays reachable only through snapshots already published
    /// under its share id.
    pub fn new_form(&mut self) -> Result<&FormDocument, StorageError> {
        let fresh = FormDocument::new();
        self.history.reset(fresh.clone());
        self.repository.save_current(&fresh)?;
        self.document = fresh;
        Ok(&self.document)
    }

    /// Publishes the current document under its share id and returns the id
    /// fillers and viewers use to reach it.
    pub fn publish(&self) -> Result<Uuid, StorageError> {
        self.repository.publish(&self.document)?;
        Ok(self.document.id)
    }

    /// Pretty JSON of the current document, for the export action.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.document.to_json_pretty()
    }
}
