//! Tests for list matching and the `{value, list_items}` shape.
mod common;
use case_sanitiser::prelude::*;
use case_sanitiser::sanitiser::{ListReconciler, candidate_items, reconcile};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_matching_code_is_selected() {
    let field = dynamic_list("outcome", alpha_beta());
    let result = reconcile(&field, Some(&json!("B"))).unwrap();
    assert_eq!(
        result,
        shaped(json!({ "code": "B", "label": "Beta" }), alpha_beta_json())
    );
}

#[test]
fn test_unmatched_code_yields_empty_value() {
    let field = dynamic_list("outcome", alpha_beta());
    let result = reconcile(&field, Some(&json!("Z"))).unwrap();
    assert_eq!(result, shaped(json!({}), alpha_beta_json()));
}

#[test]
fn test_absent_selection_yields_empty_value() {
    let field = dynamic_list("outcome", alpha_beta());
    assert_eq!(
        reconcile(&field, None).unwrap(),
        shaped(json!({}), alpha_beta_json())
    );
    assert_eq!(
        reconcile(&field, Some(&json!(null))).unwrap(),
        shaped(json!({}), alpha_beta_json())
    );
}

#[test]
fn test_already_reconciled_value_is_stable() {
    let field = dynamic_list("outcome", alpha_beta());
    let first = reconcile(&field, Some(&json!("A"))).unwrap();
    let second = reconcile(&field, Some(&first)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_richer_items_keep_extra_properties() {
    let items = ListItem::parse_list(
        "court",
        &json!([{ "code": "C1", "label": "Court 1", "region": "North" }]),
    )
    .unwrap();
    let result = ListReconciler::new(&items).reconcile(Some(&json!("C1")));
    assert_eq!(
        result["value"],
        json!({ "code": "C1", "label": "Court 1", "region": "North" })
    );
    assert_eq!(result["list_items"][0]["region"], json!("North"));
}

#[test]
fn test_candidates_from_stored_value_list_items() {
    let field = CaseField::new("outcome", FieldType::of(FieldType::DYNAMIC_LIST)).with_value(json!({
        "value": { "code": "A", "label": "Alpha" },
        "list_items": alpha_beta_json()
    }));
    assert_eq!(candidate_items(&field).unwrap(), alpha_beta());
}

#[test]
fn test_candidates_from_first_collection_element() {
    let field = tags_field();
    assert_eq!(candidate_items(&field).unwrap(), alpha_beta());
}

#[test]
fn test_attached_items_win_over_stored_items() {
    let field = tags_field().with_list_items(vec![ListItem::new("X", "Ex")]);
    assert_eq!(candidate_items(&field).unwrap(), vec![ListItem::new("X", "Ex")]);
}

#[test]
fn test_no_candidates_anywhere() {
    let field = CaseField::new("outcome", FieldType::of(FieldType::DYNAMIC_LIST));
    assert!(candidate_items(&field).unwrap().is_empty());
    assert_eq!(
        reconcile(&field, Some(&json!("A"))).unwrap(),
        shaped(json!({}), json!([]))
    );
}

#[test]
fn test_invalid_list_items_are_a_definition_error() {
    let field = CaseField::new("outcome", FieldType::of(FieldType::DYNAMIC_LIST))
        .with_value(json!({ "list_items": [{ "label": "no code" }] }));
    let err = candidate_items(&field).unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidListItems { ref field_id, .. } if field_id == "outcome"));
}
