use thiserror::Error;

/// Errors raised while reading or lowering case-field definitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("Failed to parse definition JSON: {0}")]
    JsonParseError(String),

    #[error("Field '{field_id}' carries list items that could not be read: {message}")]
    InvalidListItems { field_id: String, message: String },

    #[error("Collection field '{0}' does not declare a collection_field_type")]
    MissingCollectionType(String),
}

/// Raised when a dotted path runs into data that cannot hold the next segment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedFormDataError {
    #[error("Segment '{segment}' of path '{path}' traverses a {found} value, expected an object or array")]
    NotAContainer {
        path: String,
        segment: String,
        found: &'static str,
    },

    #[error("Segment '{segment}' of path '{path}' is not a valid array index")]
    InvalidIndex { path: String, segment: String },

    #[error("Index {index} of path '{path}' is out of bounds for an array of length {len}")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },
}

/// Errors produced by a sanitisation pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SanitiseError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    MalformedFormData(#[from] MalformedFormDataError),

    #[error("Field '{field_id}' expects a container at '{path}', but the working form has none")]
    MissingContainer { field_id: String, path: String },

    #[error("Field '{field_id}' expects an array at '{path}', but found a {found} value")]
    ExpectedArray {
        field_id: String,
        path: String,
        found: &'static str,
    },

    #[error("{count} field(s) could not be reconciled, first: {first}")]
    Unreconciled { count: usize, first: String },
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
