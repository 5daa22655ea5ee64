//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the fieldsmith crate so
//! consumers can bring the whole core API in with a single `use`.
//!
//! # Example
//!
//! ```rust
//! use fieldsmith::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut session = BuilderSession::open(MemoryStore::new())?;
//! session.add_field(FieldType::Text)?;
//! assert_eq!(session.document().fields.len(), 1);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Core document model
pub use crate::document::{Field, FieldKind, FieldPatch, FieldType, FormDocument};

// History and sessions
pub use crate::history::History;
pub use crate::session::{BuilderSession, FillerSession};

// Validation
pub use crate::validate::{Violation, validate};

// Responses and the viewer report
pub use crate::response::{Answer, ReportEntry, Response, ResponseReport};

// Persistence port and adapters
pub use crate::storage::{DirStore, FormRepository, KeyValueStore, MemoryStore};

// Error types
pub use crate::error::{FillError, StorageError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
