//! # Fieldsmith - Form Builder Core
//!
//! **Fieldsmith** is the engine behind a browser-style form builder: a
//! versioned form document assembled from a small palette of field types,
//! a linear undo/redo history over document snapshots, and a pure
//! validation engine applied identically at preview time and at submit
//! time. All state lives behind an injected key-value persistence port;
//! there is no server, no auth, and no ambient global storage.
//!
//! ## Core Workflow
//!
//! 1.  **Open a builder session** over any [`storage::KeyValueStore`]
//!     adapter. The session restores the working document (or starts a
//!     fresh one) and seeds two predefined templates on first run.
//! 2.  **Edit**: add, patch, and reorder fields, change the step count, or
//!     load a template. Every edit records a history snapshot and mirrors
//!     the document into the store; `undo`/`redo` replay snapshots without
//!     recording new ones.
//! 3.  **Publish**: snapshot the document under its share id.
//! 4.  **Fill**: open a [`session::FillerSession`] by share id, answer the
//!     fields step by step, and submit. Submission re-validates every
//!     field; a clean run appends an immutable [`response::Response`] to
//!     the per-form log.
//! 5.  **Review**: resolve stored responses against the (possibly
//!     since-edited) document with [`response::ResponseReport`]; answers to
//!     removed fields render as placeholders instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldsmith::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Build a form over an in-memory store.
//!     let mut builder = BuilderSession::open(MemoryStore::new())?;
//!     builder.set_title("Signup")?;
//!     builder.add_field(FieldType::Text)?;
//!     let name_id = builder.document().fields[0].id;
//!     builder.update_field(
//!         name_id,
//!         FieldPatch {
//!             label: Some("Name".to_string()),
//!             required: Some(true),
//!             min_length: Some(2),
//!             ..FieldPatch::default()
//!         },
//!     )?;
//!
//!     // 2. Share it and fill it out.
//!     let form_id = builder.publish()?;
//!     let mut filler = FillerSession::open(builder.repository(), form_id)?;
//!     filler.set_answer(name_id, "A");
//!
//!     // "A" is below the minimum length, so submission is blocked.
//!     assert!(matches!(
//!         filler.submit(builder.repository(), chrono::Utc::now()),
//!         Err(FillError::ValidationFailed { .. })
//!     ));
//!
//!     filler.set_answer(name_id, "Ada");
//!     let response = filler.submit(builder.repository(), chrono::Utc::now())?;
//!     assert_eq!(response.responses[&name_id], Answer::Text("Ada".to_string()));
//!
//!     // 3. Review what came in.
//!     let stored = builder.repository().responses(form_id)?;
//!     let report = ResponseReport::build(builder.document(), &stored[0]);
//!     assert_eq!(report.entries[0].label.as_deref(), Some("Name"));
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod history;
pub mod prelude;
pub mod response;
pub mod session;
pub mod storage;
pub mod validate;
