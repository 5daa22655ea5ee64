use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::field::{Field, FieldPatch, FieldType};

/// The complete, editable definition of one form: an ordered field list
/// split across one or more steps. The `id` doubles as the public share key.
///
/// All mutating operations are pure: they take `&self` and return the next
/// snapshot, which the builder session records into history and persists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormDocument {
    pub id: Uuid,
    pub title: String,
    /// Order is significant: it is the render and tab order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Total page count, at least 1.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

fn default_steps() -> u32 {
    1
}

impl FormDocument {
    /// A fresh, empty document with a new share id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "My Form".to_string(),
            fields: Vec::new(),
            steps: 1,
        }
    }

    /// Appends a new field of `ty` with generated id and type defaults.
    pub fn add_field(&self, ty: FieldType) -> Self {
        let mut next = self.clone();
        next.fields.push(Field::new(ty));
        next
    }

    /// Merges `patch` into the field matching `field_id`. A missing id is a
    /// silent no-op: builder surfaces only patch fields they just rendered.
    pub fn update_field(&self, field_id: Uuid, patch: FieldPatch) -> Self {
        let mut next = self.clone();
        if let Some(field) = next.fields.iter_mut().find(|f| f.id == field_id) {
            field.apply(patch);
        }
        next
    }

    /// Replaces the field sequence. `new_order` must be a permutation of the
    /// current fields; drag-and-drop callers hand back the same fields they
    /// were given.
    pub fn reorder_fields(&self, new_order: Vec<Field>) -> Self {
        debug_assert!(
            self.fields
                .iter()
                .map(|f| f.id)
                .sorted()
                .eq(new_order.iter().map(|f| f.id).sorted()),
            "reorder_fields expects a permutation of the current fields"
        );
        let mut next = self.clone();
        next.fields = new_order;
        next
    }

    /// Sets the page count (clamped to at least 1). Fields whose `step` now
    /// exceeds the count are left in place: they still round-trip and
    /// reappear when the count grows back, but the filler flow cannot reach
    /// them, so the reduction is logged.
    pub fn set_step_count(&self, steps: u32) -> Self {
        let mut next = self.clone();
        next.steps = steps.max(1);
        let orphaned = next.orphaned_fields().len();
        if orphaned > 0 {
            warn!(
                steps = next.steps,
                orphaned, "step count leaves fields on unreachable pages"
            );
        }
        next
    }

    pub fn set_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next
    }

    /// Replaces title, fields, and step count from `template` while keeping
    /// this document's own `id`, so an already-shared link stays valid.
    pub fn load_template(&self, template: &FormDocument) -> Self {
        let mut next = template.clone();
        next.id = self.id;
        next
    }

    pub fn field(&self, field_id: Uuid) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Fields rendered on `step`, in document order.
    pub fn fields_for_step(&self, step: u32) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.step == step)
    }

    /// Fields assigned to a step beyond the current page count.
    pub fn orphaned_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.step > self.steps).collect()
    }

    /// Field ids appearing more than once. Always empty for documents built
    /// through the operations above; exposed for invariant checks in tests.
    pub fn duplicate_ids(&self) -> Vec<Uuid> {
        self.fields.iter().map(|f| f.id).duplicates().collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Pretty JSON, used by the builder's export action.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}
