//! Unit tests for error reporting and small public helpers.
use case_sanitiser::prelude::*;

#[test]
fn test_error_display() {
    let err = DefinitionError::InvalidListItems {
        field_id: "outcome".to_string(),
        message: "missing field `code`".to_string(),
    };
    assert!(err.to_string().contains("outcome"));
    assert!(err.to_string().contains("missing field `code`"));

    let malformed = MalformedFormDataError::NotAContainer {
        path: "address.country".to_string(),
        segment: "country".to_string(),
        found: "string",
    };
    assert!(malformed.to_string().contains("address.country"));
    assert!(malformed.to_string().contains("string"));

    let wrapped: SanitiseError = malformed.clone().into();
    assert_eq!(wrapped.to_string(), malformed.to_string());

    let missing = SanitiseError::MissingContainer {
        field_id: "address".to_string(),
        path: "address".to_string(),
    };
    assert!(missing.to_string().contains("expects a container"));
}

#[test]
fn test_field_issue_display() {
    let issue = FieldIssue {
        field_id: "role".to_string(),
        path: "parties.0.value.role".to_string(),
        error: SanitiseError::ExpectedArray {
            field_id: "role".to_string(),
            path: "0.value.role".to_string(),
            found: "number",
        },
    };
    let text = issue.to_string();
    assert!(text.starts_with("role at 'parties.0.value.role'"));
    assert!(text.contains("number"));
}

#[test]
fn test_builder_defaults() {
    assert!(!Sanitiser::default().is_strict());
    assert!(Sanitiser::builder().strict(true).build().is_strict());
}
