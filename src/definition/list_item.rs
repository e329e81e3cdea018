use crate::error::DefinitionError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One selectable option of a `DynamicList` or fixed list field.
///
/// Properties beyond `code` and `label` are kept in `extra` and written back
/// unchanged, so richer option objects survive a round trip to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListItem {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            extra: Map::new(),
        }
    }

    /// Builds the JSON object form of this item.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("code".to_string(), Value::String(self.code.clone()));
        object.insert("label".to_string(), Value::String(self.label.clone()));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }

    /// Reads a JSON array of list items belonging to `field_id`.
    pub fn parse_list(field_id: &str, value: &Value) -> Result<Vec<ListItem>, DefinitionError> {
        Vec::<ListItem>::deserialize(value).map_err(|e| DefinitionError::InvalidListItems {
            field_id: field_id.to_string(),
            message: e.to_string(),
        })
    }

    /// Serialises a slice of items into a JSON array.
    pub fn list_to_value(items: &[ListItem]) -> Value {
        Value::Array(items.iter().map(ListItem::to_value).collect())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
