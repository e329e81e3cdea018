use super::field_type::FieldType;
use super::list_item::ListItem;
use super::order::Orderable;
use crate::error::DefinitionError;
use crate::form::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named, typed piece of case data together with its current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_context_parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_summary_change_option: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<bool>,
    /// The value exactly as stored by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Directly attached list items. See [`CaseField::list_items`] for the resolved set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
}

impl CaseField {
    pub fn new(id: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
            field_type,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_list_items(mut self, items: Vec<ListItem>) -> Self {
        self.list_items = items;
        self
    }

    /// The field's effective value.
    ///
    /// A `DynamicList` stored in `{value: {code, label}, list_items}` shape
    /// yields its selected code; every other field yields the stored value.
    pub fn value(&self) -> Option<&Value> {
        let raw = self.value.as_ref()?;
        if self.is_of_type(FieldType::DYNAMIC_LIST) {
            match raw.get("value") {
                Some(selected) if is_truthy(selected) => return selected.get("code"),
                _ => {}
            }
        }
        Some(raw)
    }

    /// The resolved option set of this field.
    ///
    /// `DynamicList` and `Collection` fields prefer their attached items,
    /// then the `list_items` carried inside the stored value. Any other type
    /// uses the fixed list of its field type.
    pub fn list_items(&self) -> Result<Option<Vec<ListItem>>, DefinitionError> {
        if self.is_of_type(FieldType::DYNAMIC_LIST) || self.is_of_type(FieldType::COLLECTION) {
            if !self.list_items.is_empty() {
                return Ok(Some(self.list_items.clone()));
            }
            return match self.value.as_ref().and_then(|v| v.get("list_items")) {
                Some(items) => ListItem::parse_list(&self.id, items).map(Some),
                None => Ok(None),
            };
        }
        Ok(Some(self.field_type.fixed_list_items.clone()))
    }

    pub fn is_readonly(&self) -> bool {
        self.display_context
            .as_deref()
            .is_some_and(|context| context.eq_ignore_ascii_case("READONLY"))
    }

    pub fn is_of_type(&self, kind: &str) -> bool {
        self.field_type.is(kind)
    }

    /// True for a collection of plain `kind` elements (no complex members).
    pub fn is_simple_collection_of_type(&self, kind: &str) -> bool {
        self.field_type
            .collection_field_type
            .as_deref()
            .is_some_and(|element| element.complex_fields.is_empty() && element.is(kind))
    }
}

impl Orderable for CaseField {
    fn order(&self) -> Option<i32> {
        self.order
    }
}
