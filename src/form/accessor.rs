use crate::error::{MalformedFormDataError, kind_name};
use itertools::Itertools;
use serde_json::{Map, Value};

/// Separator between the segments of a dotted form path.
pub const SEPARATOR: &str = ".";

/// Resolves a dotted path. Array segments are decimal indices; the empty
/// path is the root. Missing segments yield `None`.
pub fn get_nested_value<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(tree);
    }
    path.split(SEPARATOR).try_fold(tree, child)
}

/// Mutable counterpart of [`get_nested_value`].
pub fn get_nested_value_mut<'a>(tree: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    if path.is_empty() {
        return Some(tree);
    }
    path.split(SEPARATOR).try_fold(tree, child_mut)
}

/// Assigns `value` at `path`, creating missing (or `null`) intermediate
/// objects on the way.
pub fn set_value(path: &str, value: Value, tree: &mut Value) -> Result<(), MalformedFormDataError> {
    if path.is_empty() {
        *tree = value;
        return Ok(());
    }

    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut node = tree;
    for segment in parents {
        node = descend_or_create(node, path, segment)?;
    }

    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => {
            map.insert(leaf.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = parse_index(path, leaf)?;
            if index < items.len() {
                items[index] = value;
                Ok(())
            } else if index == items.len() {
                items.push(value);
                Ok(())
            } else {
                Err(MalformedFormDataError::IndexOutOfBounds {
                    path: path.to_string(),
                    index,
                    len: items.len(),
                })
            }
        }
        other => Err(not_a_container(path, leaf, other)),
    }
}

/// Every leaf path of `tree`, each exactly once. Empty objects and arrays
/// count as leaves; intermediate containers are not listed.
pub fn get_deep_keys(tree: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_paths(tree, &mut Vec::new(), &mut keys, false);
    keys
}

/// Every path of `tree`, intermediate containers included, parents before
/// their children.
pub fn get_all_paths(tree: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(tree, &mut Vec::new(), &mut paths, true);
    paths
}

/// Removes the node at `path` from its parent and returns it.
///
/// An absent parent is not an error. Array elements are replaced by `null`
/// so that the indices of their siblings stay valid.
pub fn delete_node_for_key(
    tree: &mut Value,
    path: &str,
) -> Result<Option<Value>, MalformedFormDataError> {
    let (parent_path, leaf) = split_leaf(path);
    let Some(parent) = get_nested_value_mut(tree, parent_path) else {
        return Ok(None);
    };

    match parent {
        Value::Object(map) => Ok(map.remove(leaf)),
        Value::Array(items) => {
            let index = parse_index(path, leaf)?;
            Ok(items.get_mut(index).map(std::mem::take))
        }
        Value::Null => Ok(None),
        other => Err(not_a_container(path, leaf, other)),
    }
}

/// Splits a path into its parent path and final segment.
pub fn split_leaf(path: &str) -> (&str, &str) {
    path.rsplit_once(SEPARATOR).unwrap_or(("", path))
}

/// Joins two path fragments, either of which may be empty.
pub fn join_path(scope: &str, path: &str) -> String {
    [scope, path].iter().filter(|part| !part.is_empty()).join(SEPARATOR)
}

/// Truthiness as applied to entered form values: `null`, `false`, `0`,
/// `NaN` and the empty string count as "nothing entered".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

fn descend_or_create<'a>(
    node: &'a mut Value,
    path: &str,
    segment: &str,
) -> Result<&'a mut Value, MalformedFormDataError> {
    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => Ok(map
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()))),
        Value::Array(items) => {
            let index = parse_index(path, segment)?;
            let len = items.len();
            items
                .get_mut(index)
                .ok_or_else(|| MalformedFormDataError::IndexOutOfBounds {
                    path: path.to_string(),
                    index,
                    len,
                })
        }
        other => Err(not_a_container(path, segment, other)),
    }
}

fn parse_index(path: &str, segment: &str) -> Result<usize, MalformedFormDataError> {
    segment
        .parse::<usize>()
        .map_err(|_| MalformedFormDataError::InvalidIndex {
            path: path.to_string(),
            segment: segment.to_string(),
        })
}

fn not_a_container(path: &str, segment: &str, found: &Value) -> MalformedFormDataError {
    MalformedFormDataError::NotAContainer {
        path: path.to_string(),
        segment: segment.to_string(),
        found: kind_name(found),
    }
}

fn collect_paths(node: &Value, prefix: &mut Vec<String>, out: &mut Vec<String>, containers: bool) {
    let children: Vec<(String, &Value)> = match node {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => return,
    };

    for (segment, value) in children {
        prefix.push(segment);
        let descend = match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        };
        if containers || !descend {
            out.push(prefix.iter().join(SEPARATOR));
        }
        if descend {
            collect_paths(value, prefix, out, containers);
        }
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_leaf() {
        assert_eq!(split_leaf("a.b.c"), ("a.b", "c"));
        assert_eq!(split_leaf("top"), ("", "top"));
    }

    #[test]
    fn test_join_path_skips_empty_parts() {
        assert_eq!(join_path("", "a.b"), "a.b");
        assert_eq!(join_path("coll", "0.value.x"), "coll.0.value.x");
        assert_eq!(join_path("coll", ""), "coll");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("A")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_set_value_replaces_null_parent() {
        let mut tree = json!({ "a": null });
        set_value("a.b", json!(1), &mut tree).unwrap();
        assert_eq!(tree, json!({ "a": { "b": 1 } }));
    }
}
