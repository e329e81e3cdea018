//! Common test fixtures: case-field schemas and matching forms.
use case_sanitiser::prelude::*;
use serde_json::{Value, json};

/// `[A: Alpha, B: Beta]`
#[allow(dead_code)]
pub fn alpha_beta() -> Vec<ListItem> {
    vec![ListItem::new("A", "Alpha"), ListItem::new("B", "Beta")]
}

#[allow(dead_code)]
pub fn alpha_beta_json() -> Value {
    json!([
        { "code": "A", "label": "Alpha" },
        { "code": "B", "label": "Beta" }
    ])
}

/// A top-level `DynamicList` with directly attached items.
#[allow(dead_code)]
pub fn dynamic_list(id: &str, items: Vec<ListItem>) -> CaseField {
    CaseField::new(id, FieldType::of(FieldType::DYNAMIC_LIST)).with_list_items(items)
}

/// Complex `address { street: Text, country: DynamicList[UK, FR] }`.
#[allow(dead_code)]
pub fn address_field() -> CaseField {
    let street = CaseField::new("street", FieldType::of("Text"));
    let country = dynamic_list(
        "country",
        vec![ListItem::new("UK", "United Kingdom"), ListItem::new("FR", "France")],
    );
    CaseField::new("address", FieldType::complex("Address", vec![street, country]))
}

/// Collection of complex `party { name: Text, role: DynamicList[APP, RES] }`.
#[allow(dead_code)]
pub fn parties_field() -> CaseField {
    let name = CaseField::new("name", FieldType::of("Text"));
    let role = dynamic_list(
        "role",
        vec![ListItem::new("APP", "Applicant"), ListItem::new("RES", "Respondent")],
    );
    let element = FieldType::complex("Party", vec![name, role]);
    CaseField::new("parties", FieldType::collection("Party", element))
}

/// Collection of plain `DynamicList` elements whose candidates live in the
/// stored value of the first element.
#[allow(dead_code)]
pub fn tags_field() -> CaseField {
    let element = FieldType::of(FieldType::DYNAMIC_LIST);
    CaseField::new("tags", FieldType::collection("Tag", element)).with_value(json!([
        { "id": "1", "value": { "value": {}, "list_items": alpha_beta_json() } }
    ]))
}

/// A form covering every fixture field.
#[allow(dead_code)]
pub fn full_form() -> Value {
    json!({
        "title": "Case 1",
        "outcome": "B",
        "address": { "street": "1 High St", "country": "FR" },
        "parties": [
            { "id": "p1", "value": { "name": "Ann", "role": "APP" } },
            { "id": "p2", "value": { "name": "Bob", "role": "RES" } }
        ],
        "tags": [
            { "id": "t1", "value": "A" },
            { "id": "t2", "value": "" },
            { "id": "t3", "value": "B" }
        ]
    })
}

#[allow(dead_code)]
pub fn full_schema() -> Vec<CaseField> {
    vec![
        CaseField::new("title", FieldType::of("Text")),
        dynamic_list("outcome", alpha_beta()),
        address_field(),
        parties_field(),
        tags_field(),
    ]
}

/// The `{value, list_items}` shape for a selected item.
#[allow(dead_code)]
pub fn shaped(selected: Value, items: Value) -> Value {
    json!({ "value": selected, "list_items": items })
}

#[allow(dead_code)]
pub const TRIGGER_JSON: &str = r#"{
    "id": "updateCase",
    "name": "Update case",
    "case_id": "1234567890123456",
    "event_token": "token-1",
    "case_fields": [
        {
            "id": "outcome",
            "label": "Outcome",
            "order": 2,
            "display_context": "OPTIONAL",
            "field_type": { "id": "DynamicList", "type": "DynamicList" },
            "value": {
                "value": { "code": "A", "label": "Alpha" },
                "list_items": [
                    { "code": "A", "label": "Alpha" },
                    { "code": "B", "label": "Beta" }
                ]
            }
        },
        {
            "id": "summary",
            "label": "Summary",
            "order": 1,
            "display_context": "readonly",
            "field_type": { "id": "Text", "type": "Text" },
            "value": "Hello"
        }
    ],
    "wizard_pages": [
        {
            "id": "page2",
            "label": "Second",
            "order": 2,
            "wizard_page_fields": [
                { "case_field_id": "summary", "order": 1 }
            ]
        },
        {
            "id": "page1",
            "label": "First",
            "order": 1,
            "wizard_page_fields": [
                { "case_field_id": "outcome", "order": 2 },
                { "case_field_id": "summary", "order": 1 },
                { "case_field_id": "missing", "order": 3 }
            ]
        }
    ]
}"#;
