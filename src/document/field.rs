use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The palette of field types a builder can add to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Textarea,
    Dropdown,
    Checkbox,
    Date,
}

impl FieldType {
    /// Every addable type, in palette order.
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Dropdown,
        FieldType::Checkbox,
        FieldType::Date,
    ];
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Dropdown => "dropdown",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
        };
        write!(f, "{}", name)
    }
}

/// Type-specific configuration carried by a field. Serialized flat into the
/// field object, tagged by `"type"`, so the wire format stays the familiar
/// `{"type": "text", "minLength": 2, ...}` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(rename_all = "camelCase")]
    Text {
        /// Minimum accepted length in characters; `0` means no minimum.
        min_length: u32,
        /// Maximum accepted length in characters; `0` means no maximum.
        max_length: u32,
        /// Full-string regular expression; empty means no pattern constraint.
        pattern: String,
    },
    Textarea,
    Dropdown {
        /// Ordered choice list. A dropdown with no options renders but can
        /// never be answered, so builders should keep this non-empty.
        options: Vec<String>,
    },
    Checkbox,
    Date,
}

impl FieldKind {
    /// The configuration a freshly added field of `ty` starts with.
    pub fn defaults_for(ty: FieldType) -> Self {
        match ty {
            FieldType::Text => FieldKind::Text {
                min_length: 0,
                max_length: 100,
                pattern: String::new(),
            },
            FieldType::Textarea => FieldKind::Textarea,
            FieldType::Dropdown => FieldKind::Dropdown {
                options: vec!["Option 1".to_string(), "Option 2".to_string()],
            },
            FieldType::Checkbox => FieldKind::Checkbox,
            FieldType::Date => FieldKind::Date,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Textarea => FieldType::Textarea,
            FieldKind::Dropdown { .. } => FieldType::Dropdown,
            FieldKind::Checkbox => FieldType::Checkbox,
            FieldKind::Date => FieldType::Date,
        }
    }
}

/// One form input definition. `id` is stable for the field's lifetime and
/// unique within its document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: Uuid,
    /// Display name, also used in generated violation messages.
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// The page of a multi-step form this field renders on, starting at 1.
    #[serde(default = "default_step")]
    pub step: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

fn default_step() -> u32 {
    1
}

impl Field {
    /// A freshly added field: generated id, `"{type} Field"` label, not
    /// required, on step 1, with type-appropriate defaults.
    pub fn new(ty: FieldType) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: format!("{} Field", ty),
            required: false,
            step: 1,
            placeholder: None,
            help_text: None,
            kind: FieldKind::defaults_for(ty),
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Merges `patch` into this field. Kind-specific members only apply when
    /// this field's kind actually carries them; a `min_length` patched onto
    /// a checkbox is dropped silently.
    pub(crate) fn apply(&mut self, patch: FieldPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(step) = patch.step {
            self.step = step.max(1);
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = (!placeholder.is_empty()).then_some(placeholder);
        }
        if let Some(help_text) = patch.help_text {
            self.help_text = (!help_text.is_empty()).then_some(help_text);
        }
        match &mut self.kind {
            FieldKind::Text {
                min_length,
                max_length,
                pattern,
            } => {
                if let Some(value) = patch.min_length {
                    *min_length = value;
                }
                if let Some(value) = patch.max_length {
                    *max_length = value;
                }
                if let Some(value) = patch.pattern {
                    *pattern = value;
                }
            }
            FieldKind::Dropdown { options } => {
                if let Some(value) = patch.options {
                    *options = value;
                }
            }
            FieldKind::Textarea | FieldKind::Checkbox | FieldKind::Date => {}
        }
    }
}

/// A partial update merged into an existing field by
/// [`FormDocument::update_field`](super::FormDocument::update_field).
/// Unset members leave the field untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub step: Option<u32>,
    /// An empty string clears the placeholder.
    pub placeholder: Option<String>,
    /// An empty string clears the help text.
    pub help_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
}
