//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load a trigger, run a pass and
//! inspect its outcome.
//!
//! # Example
//!
//! ```rust,no_run
//! use case_sanitiser::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let trigger = CaseEventTrigger::from_file("path/to/trigger.json")?;
//! let form: serde_json::Value =
//!     serde_json::from_str(&std::fs::read_to_string("path/to/form.json")?)?;
//!
//! let submission = Sanitiser::default().prepare_submission(&trigger, form)?;
//! println!("{}", serde_json::to_string_pretty(&submission.event_data)?);
//! # Ok(())
//! # }
//! ```

// Pass entry points
pub use crate::sanitiser::{FieldIssue, PreparedSubmission, SanitisedForm, Sanitiser};

// Definition model
pub use crate::definition::{
    CaseEventData, CaseEventTrigger, CaseField, FieldType, ListItem, WizardPage,
};

// Schema and classification
pub use crate::schema::{FieldClass, NodeKind, SchemaNode, build_schema, classify};

// Path access
pub use crate::form::{delete_node_for_key, get_deep_keys, get_nested_value, set_value};

// Error types
pub use crate::error::{DefinitionError, MalformedFormDataError, SanitiseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
