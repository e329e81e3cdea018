use crate::definition::{CaseField, ListItem};
use crate::error::DefinitionError;
use serde_json::{Map, Value};

/// The option set a `DynamicList` field is matched against.
///
/// Items attached to the field win. Otherwise the field is treated as a
/// simple collection and the items of its first stored element are used.
pub fn candidate_items(field: &CaseField) -> Result<Vec<ListItem>, DefinitionError> {
    if let Some(items) = field.list_items()? {
        if !items.is_empty() {
            return Ok(items);
        }
    }

    let nested = field
        .value
        .as_ref()
        .and_then(|value| value.get(0))
        .and_then(|first| first.get("value"))
        .and_then(|inner| inner.get("list_items"));
    match nested {
        Some(items) => ListItem::parse_list(&field.id, items),
        None => Ok(Vec::new()),
    }
}

/// Extracts the selected code from a raw form value.
///
/// Accepts a bare code, an item object `{code, ..}`, or an already
/// reconciled `{value: {code, ..}, list_items}` object.
pub fn selected_code(raw: &Value) -> Option<&str> {
    match raw {
        Value::String(code) => Some(code.as_str()),
        Value::Object(object) => match object.get("value") {
            Some(Value::Object(item)) => item.get("code").and_then(Value::as_str),
            Some(Value::String(code)) => Some(code.as_str()),
            _ => object.get("code").and_then(Value::as_str),
        },
        _ => None,
    }
}

/// Matches raw selections against one field's candidate items.
#[derive(Debug, Clone, Copy)]
pub struct ListReconciler<'a> {
    items: &'a [ListItem],
}

impl<'a> ListReconciler<'a> {
    pub fn new(items: &'a [ListItem]) -> Self {
        Self { items }
    }

    /// First item carrying `code`. Duplicate codes resolve to the earliest.
    pub fn find(&self, code: &str) -> Option<&'a ListItem> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Builds `{value, list_items}` for a raw selection. An absent or
    /// unmatched selection yields an empty `value` object.
    pub fn reconcile(&self, raw: Option<&Value>) -> Value {
        let selected = raw
            .and_then(selected_code)
            .and_then(|code| self.find(code))
            .map(ListItem::to_value)
            .unwrap_or_else(|| Value::Object(Map::new()));

        let mut shaped = Map::new();
        shaped.insert("value".to_string(), selected);
        shaped.insert("list_items".to_string(), ListItem::list_to_value(self.items));
        Value::Object(shaped)
    }
}

/// Reconciles a raw selection against `field`'s candidate items.
pub fn reconcile(field: &CaseField, raw: Option<&Value>) -> Result<Value, DefinitionError> {
    let items = candidate_items(field)?;
    Ok(ListReconciler::new(&items).reconcile(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selected_code_shapes() {
        assert_eq!(selected_code(&json!("A")), Some("A"));
        assert_eq!(selected_code(&json!({ "code": "A", "label": "Alpha" })), Some("A"));
        assert_eq!(
            selected_code(&json!({ "value": { "code": "B" }, "list_items": [] })),
            Some("B")
        );
        assert_eq!(selected_code(&json!({ "value": {}, "list_items": [] })), None);
        assert_eq!(selected_code(&json!(42)), None);
        assert_eq!(selected_code(&json!(null)), None);
    }

    #[test]
    fn test_duplicate_codes_first_match_wins() {
        let items = vec![ListItem::new("A", "First"), ListItem::new("A", "Second")];
        let reconciler = ListReconciler::new(&items);
        assert_eq!(reconciler.find("A").map(|i| i.label.as_str()), Some("First"));
    }
}
