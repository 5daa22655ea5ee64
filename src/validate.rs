//! The validation engine: a pure mapping from a field definition and a
//! candidate value to the list of violated constraints.
//!
//! The same function runs per keystroke in the live preview and again at
//! submit time. It holds no state and caches nothing, so both callers are
//! guaranteed identical results for identical inputs.

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::document::{Field, FieldKind};
use crate::response::Answer;

/// A single validation-rule failure. The `Display` string is the exact
/// message surfaces show next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{label} is required")]
    Required { label: String },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: u32 },

    #[error("{label} must be at most {max} characters")]
    TooLong { label: String, max: u32 },

    #[error("{label} is invalid")]
    Invalid { label: String },
}

/// Checks `value` against every constraint on `field` and collects all
/// violations, in rule order: required, minimum length, maximum length,
/// pattern. Rules are independent; nothing short-circuits. An empty result
/// means the value is accepted.
pub fn validate(field: &Field, value: Option<&Answer>) -> Vec<Violation> {
    let mut violations = Vec::new();

    if field.required && is_empty(value) {
        violations.push(Violation::Required {
            label: field.label.clone(),
        });
    }

    if let (
        FieldKind::Text {
            min_length,
            max_length,
            pattern,
        },
        Some(Answer::Text(text)),
    ) = (&field.kind, value)
    {
        let length = text.chars().count() as u32;
        if *min_length > 0 && length < *min_length {
            violations.push(Violation::TooShort {
                label: field.label.clone(),
                min: *min_length,
            });
        }
        if *max_length > 0 && length > *max_length {
            violations.push(Violation::TooLong {
                label: field.label.clone(),
                max: *max_length,
            });
        }
        if !pattern.is_empty() && !text.is_empty() && !matches_pattern(pattern, text, &field.label)
        {
            violations.push(Violation::Invalid {
                label: field.label.clone(),
            });
        }
    }

    violations
}

/// Absence for the required rule: no value at all, a string of only
/// whitespace, or an unticked checkbox.
fn is_empty(value: Option<&Answer>) -> bool {
    match value {
        None => true,
        Some(Answer::Text(text)) => text.trim().is_empty(),
        Some(Answer::Checked(checked)) => !checked,
    }
}

/// Full-string match: the pattern is anchored on both ends. A pattern that
/// does not compile is treated as unconstrained; a broken regex typed into
/// the builder must not take down preview or submit.
fn matches_pattern(pattern: &str, text: &str, label: &str) -> bool {
    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(regex) => regex.is_match(text),
        Err(error) => {
            warn!(%label, %error, "unusable field pattern, skipping constraint");
            true
        }
    }
}
