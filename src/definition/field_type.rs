use super::case_field::CaseField;
use super::list_item::ListItem;
use serde::{Deserialize, Serialize};

/// Type metadata of a case field, as delivered inside an event trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldType {
    #[serde(default)]
    pub id: String,
    /// The type tag, e.g. `Text`, `Complex`, `Collection` or `DynamicList`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_list_items: Vec<ListItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complex_fields: Vec<CaseField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_field_type: Option<Box<FieldType>>,
}

impl FieldType {
    pub const COMPLEX: &'static str = "Complex";
    pub const COLLECTION: &'static str = "Collection";
    pub const DYNAMIC_LIST: &'static str = "DynamicList";

    /// A field type with the given tag and no nested metadata.
    pub fn of(kind: &str) -> Self {
        Self {
            id: kind.to_string(),
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn complex(id: &str, complex_fields: Vec<CaseField>) -> Self {
        Self {
            id: id.to_string(),
            kind: Self::COMPLEX.to_string(),
            complex_fields,
            ..Self::default()
        }
    }

    pub fn collection(id: &str, element: FieldType) -> Self {
        Self {
            id: id.to_string(),
            kind: Self::COLLECTION.to_string(),
            collection_field_type: Some(Box::new(element)),
            ..Self::default()
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}
