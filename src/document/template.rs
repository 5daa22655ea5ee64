//! The two starter templates seeded into an empty template store.
//!
//! Field shapes are fixed: surfaces rely on these exact labels and
//! constraints for default UX parity.

use uuid::Uuid;

use super::field::{Field, FieldKind};
use super::form::FormDocument;

/// Name/document pairs seeded on first run, in listing order.
pub fn default_templates() -> Vec<(String, FormDocument)> {
    vec![
        ("Contact Us".to_string(), contact_us_template()),
        ("My Form".to_string(), my_form_template()),
    ]
}

/// A single-step contact form: name, email with a pattern, and a message.
pub fn contact_us_template() -> FormDocument {
    FormDocument {
        id: Uuid::new_v4(),
        title: "Contact Us".to_string(),
        fields: vec![
            Field {
                id: Uuid::new_v4(),
                label: "Name".to_string(),
                required: true,
                step: 1,
                placeholder: Some("Enter your name".to_string()),
                help_text: None,
                kind: FieldKind::Text {
                    min_length: 2,
                    max_length: 50,
                    pattern: String::new(),
                },
            },
            Field {
                id: Uuid::new_v4(),
                label: "Email".to_string(),
                required: true,
                step: 1,
                placeholder: Some("Enter your email".to_string()),
                help_text: None,
                kind: FieldKind::Text {
                    min_length: 5,
                    max_length: 100,
                    pattern: "^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}$".to_string(),
                },
            },
            Field {
                id: Uuid::new_v4(),
                label: "Message".to_string(),
                required: true,
                step: 1,
                placeholder: Some("Enter your message".to_string()),
                help_text: Some("Please provide details".to_string()),
                kind: FieldKind::Textarea,
            },
        ],
        steps: 1,
    }
}

/// A minimal starter form: one text input and a dropdown.
pub fn my_form_template() -> FormDocument {
    FormDocument {
        id: Uuid::new_v4(),
        title: "My Form".to_string(),
        fields: vec![
            Field {
                id: Uuid::new_v4(),
                label: "Type Something..".to_string(),
                required: true,
                step: 1,
                placeholder: Some("Type..".to_string()),
                help_text: None,
                kind: FieldKind::Text {
                    min_length: 0,
                    max_length: 100,
                    pattern: String::new(),
                },
            },
            Field {
                id: Uuid::new_v4(),
                label: "Gender".to_string(),
                required: true,
                step: 1,
                placeholder: Some("Choose gender".to_string()),
                help_text: None,
                kind: FieldKind::Dropdown {
                    options: vec!["Male".to_string(), "Female".to_string()],
                },
            },
        ],
        steps: 1,
    }
}
