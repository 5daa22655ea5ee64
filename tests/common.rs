//! Common test utilities for building documents, fields, and answers.
use fieldsmith::prelude::*;
use uuid::Uuid;

/// A text field with explicit constraints, on step 1.
#[allow(dead_code)]
pub fn text_field(
    label: &str,
    required: bool,
    min_length: u32,
    max_length: u32,
    pattern: &str,
) -> Field {
    Field {
        id: Uuid::new_v4(),
        label: label.to_string(),
        required,
        step: 1,
        placeholder: None,
        help_text: None,
        kind: FieldKind::Text {
            min_length,
            max_length,
            pattern: pattern.to_string(),
        },
    }
}

#[allow(dead_code)]
pub fn checkbox_field(label: &str, required: bool) -> Field {
    Field {
        id: Uuid::new_v4(),
        label: label.to_string(),
        required,
        step: 1,
        placeholder: None,
        help_text: None,
        kind: FieldKind::Checkbox,
    }
}

#[allow(dead_code)]
pub fn dropdown_field(label: &str, options: &[&str]) -> Field {
    Field {
        id: Uuid::new_v4(),
        label: label.to_string(),
        required: false,
        step: 1,
        placeholder: None,
        help_text: None,
        kind: FieldKind::Dropdown {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    }
}

/// A single-step document around the given fields.
#[allow(dead_code)]
pub fn document_with(fields: Vec<Field>) -> FormDocument {
    FormDocument {
        id: Uuid::new_v4(),
        title: "Test Form".to_string(),
        fields,
        steps: 1,
    }
}

/// An empty document with a distinguishing title, for history assertions.
#[allow(dead_code)]
pub fn titled(title: &str) -> FormDocument {
    FormDocument {
        id: Uuid::new_v4(),
        title: title.to_string(),
        fields: Vec::new(),
        steps: 1,
    }
}
