//! Integration tests for fieldsmith
//!
//! End-to-end flows: build, publish, fill, submit, and review, plus the
//! template bootstrap and degraded-storage behavior.
mod common;
use chrono::{TimeZone, Utc};
use common::*;
use fieldsmith::prelude::*;
use uuid::Uuid;

#[test]
fn first_open_seeds_exactly_the_two_predefined_templates() {
    let session = BuilderSession::open(MemoryStore::new()).unwrap();
    let names = session.repository().template_names().unwrap();
    assert_eq!(names, vec!["Contact Us".to_string(), "My Form".to_string()]);

    let templates = session.repository().templates().unwrap();

    let contact = &templates["Contact Us"];
    assert_eq!(contact.steps, 1);
    let labels: Vec<&str> = contact.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Name", "Email", "Message"]);
    assert!(contact.fields.iter().all(|f| f.required));
    match &contact.fields[1].kind {
        FieldKind::Text {
            min_length,
            max_length,
            pattern,
        } => {
            assert_eq!((*min_length, *max_length), (5, 100));
            assert!(pattern.contains('@'));
        }
        other => panic!("expected text email field, got {:?}", other),
    }
    assert_eq!(contact.fields[2].kind, FieldKind::Textarea);

    let starter = &templates["My Form"];
    let labels: Vec<&str> = starter.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Type Something..", "Gender"]);
    assert_eq!(
        starter.fields[1].kind,
        FieldKind::Dropdown {
            options: vec!["Male".to_string(), "Female".to_string()],
        }
    );
}

#[test]
fn reopening_a_store_does_not_reseed_templates() {
    let dir = tempfile::tempdir().unwrap();

    {
        let session = BuilderSession::open(DirStore::open(dir.path()).unwrap()).unwrap();
        session.save_as_template("Mine").unwrap();
    }

    let session = BuilderSession::open(DirStore::open(dir.path()).unwrap()).unwrap();
    let names = session.repository().template_names().unwrap();
    assert_eq!(
        names,
        vec![
            "Contact Us".to_string(),
            "Mine".to_string(),
            "My Form".to_string()
        ]
    );
}

#[test]
fn end_to_end_submit_flow() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    let field_id = builder.document().fields[0].id;
    builder
        .update_field(
            field_id,
            FieldPatch {
                label: Some("Name".to_string()),
                required: Some(true),
                min_length: Some(2),
                ..FieldPatch::default()
            },
        )
        .unwrap();

    let form_id = builder.publish().unwrap();
    let repository = builder.repository();

    // Too short: rejected with a length violation, nothing persisted.
    let mut filler = FillerSession::open(repository, form_id).unwrap();
    filler.set_answer(field_id, "a");
    let submitted_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    match filler.submit(repository, submitted_at) {
        Err(FillError::ValidationFailed { violations }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].0, field_id);
            assert!(violations[0].1.contains(&Violation::TooShort {
                label: "Name".to_string(),
                min: 2
            }));
        }
        other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
    }
    assert!(repository.responses(form_id).unwrap().is_empty());

    // Long enough: exactly one response is recorded.
    filler.set_answer(field_id, "ab");
    let response = filler.submit(repository, submitted_at).unwrap();
    assert_eq!(response.form_id, form_id);
    assert_eq!(response.submitted_at, submitted_at);
    assert_eq!(response.responses[&field_id], Answer::Text("ab".to_string()));

    let stored = repository.responses(form_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], response);
}

#[test]
fn unknown_share_id_is_not_found() {
    let builder = BuilderSession::open(MemoryStore::new()).unwrap();
    let missing = Uuid::new_v4();
    match FillerSession::open(builder.repository(), missing) {
        Err(FillError::FormNotFound { form_id }) => assert_eq!(form_id, missing),
        _ => panic!("expected FormNotFound"),
    }
}

#[test]
fn session_undo_redo_mirror_the_store() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    builder.add_field(FieldType::Checkbox).unwrap();
    assert!(builder.can_undo());

    builder.undo().unwrap();
    assert_eq!(builder.document().fields.len(), 1);
    // The store mirrors what the builder shows after a replay.
    let persisted = builder.repository().load_current().unwrap().unwrap();
    assert_eq!(&persisted, builder.document());

    builder.redo().unwrap();
    assert_eq!(builder.document().fields.len(), 2);
    let persisted = builder.repository().load_current().unwrap().unwrap();
    assert_eq!(&persisted, builder.document());
}

#[test]
fn edit_after_undo_truncates_redo_within_the_session() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    builder.add_field(FieldType::Checkbox).unwrap();

    builder.undo().unwrap();
    builder.add_field(FieldType::Date).unwrap();

    assert!(!builder.can_redo());
    let types: Vec<FieldType> = builder
        .document()
        .fields
        .iter()
        .map(|f| f.field_type())
        .collect();
    assert_eq!(types, vec![FieldType::Text, FieldType::Date]);
}

#[test]
fn malformed_stored_document_degrades_to_a_fresh_one() {
    let store = MemoryStore::new();
    store.set("form", "{ this is not json").unwrap();

    let session = BuilderSession::open(store).unwrap();
    assert!(session.document().fields.is_empty());
    assert_eq!(session.document().title, "My Form");
}

#[test]
fn malformed_response_log_degrades_to_empty() {
    let store = MemoryStore::new();
    let form_id = Uuid::new_v4();
    store
        .set(&format!("responses_{}", form_id), "[not json")
        .unwrap();
    let repository = FormRepository::new(store);
    assert!(repository.responses(form_id).unwrap().is_empty());
}

#[test]
fn new_form_resets_document_and_history() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    let old_id = builder.document().id;

    builder.new_form().unwrap();
    assert_ne!(builder.document().id, old_id);
    assert!(builder.document().fields.is_empty());
    assert!(!builder.can_undo());
}

#[test]
fn load_template_through_session_keeps_share_id() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    let share_id = builder.document().id;

    assert!(builder.load_template("Contact Us").unwrap());
    assert_eq!(builder.document().id, share_id);
    assert_eq!(builder.document().title, "Contact Us");
    assert_eq!(builder.document().fields.len(), 3);

    assert!(!builder.load_template("No Such Template").unwrap());
}

#[test]
fn multi_step_navigation_gates_on_validation() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.set_step_count(2).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    let first_id = builder.document().fields[0].id;
    builder
        .update_field(
            first_id,
            FieldPatch {
                label: Some("Name".to_string()),
                required: Some(true),
                ..FieldPatch::default()
            },
        )
        .unwrap();
    builder.add_field(FieldType::Checkbox).unwrap();
    let second_id = builder.document().fields[1].id;
    builder
        .update_field(
            second_id,
            FieldPatch {
                step: Some(2),
                ..FieldPatch::default()
            },
        )
        .unwrap();

    let form_id = builder.publish().unwrap();
    let mut filler = FillerSession::open(builder.repository(), form_id).unwrap();
    assert_eq!(filler.current_step(), 1);
    assert_eq!(filler.progress(), 0.5);

    // Blocked: the required field on step 1 is unanswered.
    let violations = filler.next();
    assert!(!violations.is_empty());
    assert_eq!(filler.current_step(), 1);

    filler.set_answer(first_id, "Ada");
    assert!(filler.next().is_empty());
    assert_eq!(filler.current_step(), 2);
    assert_eq!(filler.progress(), 1.0);

    filler.back();
    assert_eq!(filler.current_step(), 1);
}

#[test]
fn response_report_renders_stale_fields_as_placeholders() {
    let field = text_field("Name", false, 0, 0, "");
    let field_id = field.id;
    let document = document_with(vec![field]);

    let stale_id = Uuid::new_v4();
    let mut responses = ahash::AHashMap::new();
    responses.insert(field_id, Answer::Text("Ada".to_string()));
    responses.insert(stale_id, Answer::Text("orphaned".to_string()));
    let response = Response {
        form_id: document.id,
        submitted_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        responses,
    };

    let report = ResponseReport::build(&document, &response);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].label.as_deref(), Some("Name"));
    assert_eq!(report.entries[0].value, Answer::Text("Ada".to_string()));
    assert_eq!(report.entries[1].label, None);
    assert_eq!(report.entries[1].field_id, stale_id);
}

#[test]
fn clear_responses_empties_the_log() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    let form_id = builder.publish().unwrap();

    let mut filler = FillerSession::open(builder.repository(), form_id).unwrap();
    filler.submit(builder.repository(), Utc::now()).unwrap();
    assert_eq!(builder.repository().responses(form_id).unwrap().len(), 1);

    builder.repository().clear_responses(form_id).unwrap();
    assert!(builder.repository().responses(form_id).unwrap().is_empty());
}

#[test]
fn responses_survive_editing_the_form() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.add_field(FieldType::Text).unwrap();
    let field_id = builder.document().fields[0].id;
    let form_id = builder.publish().unwrap();

    let mut filler = FillerSession::open(builder.repository(), form_id).unwrap();
    filler.set_answer(field_id, "kept");
    filler.submit(builder.repository(), Utc::now()).unwrap();

    // Editing and even replacing the builder document leaves the log alone.
    builder.set_title("Edited later").unwrap();
    builder.new_form().unwrap();
    assert_eq!(builder.repository().responses(form_id).unwrap().len(), 1);
}

#[test]
fn dir_store_round_trips_published_forms() {
    let dir = tempfile::tempdir().unwrap();

    let form_id = {
        let mut builder =
            BuilderSession::open(DirStore::open(dir.path()).unwrap()).unwrap();
        builder.add_field(FieldType::Text).unwrap();
        builder.publish().unwrap()
    };

    let repository = FormRepository::new(DirStore::open(dir.path()).unwrap());
    let loaded = repository.load_published(form_id).unwrap().unwrap();
    assert_eq!(loaded.id, form_id);
    assert_eq!(loaded.fields.len(), 1);
}

#[test]
fn export_json_is_pretty_and_complete() {
    let mut builder = BuilderSession::open(MemoryStore::new()).unwrap();
    builder.set_title("Export me").unwrap();
    builder.add_field(FieldType::Text).unwrap();

    let exported = builder.export_json().unwrap();
    assert!(exported.contains("\"title\": \"Export me\""));
    let reimported = FormDocument::from_json(&exported).unwrap();
    assert_eq!(&reimported, builder.document());
}
