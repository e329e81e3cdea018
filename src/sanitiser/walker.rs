use super::reconciler::ListReconciler;
use super::FieldIssue;
use crate::definition::ListItem;
use crate::error::{MalformedFormDataError, SanitiseError, kind_name};
use crate::form::{
    delete_node_for_key, get_all_paths, get_nested_value, get_nested_value_mut, is_truthy,
    join_path, set_value, split_leaf,
};
use crate::schema::{NodeKind, SchemaNode};
use ahash::AHashMap;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Paths of the legacy clone grouped by their final segment.
struct PathIndex {
    by_segment: AHashMap<String, Vec<String>>,
}

impl PathIndex {
    fn build(tree: &Value) -> Self {
        let mut by_segment: AHashMap<String, Vec<String>> = AHashMap::new();
        for path in get_all_paths(tree) {
            let (_, segment) = split_leaf(&path);
            by_segment.entry(segment.to_string()).or_default().push(path);
        }
        Self { by_segment }
    }

    fn paths_for(&self, field_id: &str) -> &[String] {
        self.by_segment
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One level of the recursive pass. `scope` is the absolute path of
/// `form`/`legacy` within the top-level trees and is only used for reporting.
pub(super) fn sanitise_level(
    nodes: &[SchemaNode],
    form: &mut Value,
    legacy: &mut Value,
    scope: &str,
    issues: &mut Vec<FieldIssue>,
) {
    let index = PathIndex::build(legacy);

    for node in nodes {
        if !node.class().bears_lists() {
            continue;
        }

        for path in index.paths_for(&node.id) {
            // Consumed by an earlier field on this level.
            if get_nested_value(legacy, path).is_none() {
                trace!(field = %node.id, path = %path, "Legacy key already pruned");
                continue;
            }

            let outcome = match &node.kind {
                NodeKind::Scalar => Ok(()),
                NodeKind::DynamicList(items) => reconcile_list(items, form, legacy, path),
                NodeKind::DynamicListCollection(items) => {
                    reconcile_list_collection(&node.id, items, form, legacy, path)
                }
                NodeKind::Complex(children) | NodeKind::Collection(children) => {
                    descend(&node.id, children, form, legacy, path, scope, issues)
                }
                NodeKind::Unreadable { error, .. } => Err(error.clone().into()),
            };

            if let Err(error) = outcome {
                let absolute = join_path(scope, path);
                warn!(field = %node.id, path = %absolute, %error, "Field left unreconciled");
                issues.push(FieldIssue {
                    field_id: node.id.clone(),
                    path: absolute,
                    error,
                });
            }
        }
    }
}

fn reconcile_list(
    items: &[ListItem],
    form: &mut Value,
    legacy: &mut Value,
    path: &str,
) -> Result<(), SanitiseError> {
    let reconciled = ListReconciler::new(items).reconcile(get_nested_value(form, path));
    set_value(path, reconciled, form)?;
    delete_node_for_key(legacy, path)?;
    debug!(path = %path, candidates = items.len(), "Reconciled dynamic list");
    Ok(())
}

fn reconcile_list_collection(
    field_id: &str,
    items: &[ListItem],
    form: &mut Value,
    legacy: &mut Value,
    path: &str,
) -> Result<(), SanitiseError> {
    let reconciler = ListReconciler::new(items);

    match get_nested_value_mut(form, path) {
        Some(Value::Array(elements)) => {
            for element in elements.iter_mut() {
                let reconciled = match element.get("value") {
                    Some(raw) if is_truthy(raw) => reconciler.reconcile(Some(raw)),
                    _ => continue,
                };
                if let Some(object) = element.as_object_mut() {
                    object.insert("value".to_string(), reconciled);
                }
            }
            debug!(path = %path, elements = elements.len(), "Reconciled dynamic list collection");
        }
        Some(Value::Null) | None => {
            trace!(path = %path, "Dynamic list collection has no entries");
        }
        Some(other) => {
            return Err(SanitiseError::ExpectedArray {
                field_id: field_id.to_string(),
                path: path.to_string(),
                found: kind_name(other),
            });
        }
    }

    delete_node_for_key(legacy, path)?;
    Ok(())
}

fn descend(
    field_id: &str,
    children: &[SchemaNode],
    form: &mut Value,
    legacy: &mut Value,
    path: &str,
    scope: &str,
    issues: &mut Vec<FieldIssue>,
) -> Result<(), SanitiseError> {
    let form_subtree = match get_nested_value_mut(form, path) {
        Some(Value::Null) | None if !holds_content(get_nested_value(legacy, path)) => {
            trace!(field = %field_id, path = %path, "Container left empty");
            return Ok(());
        }
        Some(Value::Null) | None => {
            return Err(SanitiseError::MissingContainer {
                field_id: field_id.to_string(),
                path: path.to_string(),
            });
        }
        Some(subtree) => subtree,
    };
    if !(form_subtree.is_object() || form_subtree.is_array()) {
        return Err(MalformedFormDataError::NotAContainer {
            path: path.to_string(),
            segment: field_id.to_string(),
            found: kind_name(form_subtree),
        }
        .into());
    }
    let Some(legacy_subtree) = get_nested_value_mut(legacy, path) else {
        return Ok(());
    };

    debug!(field = %field_id, path = %path, members = children.len(), "Descending");
    sanitise_level(
        children,
        form_subtree,
        legacy_subtree,
        &join_path(scope, path),
        issues,
    );
    Ok(())
}

/// Whether a legacy subtree has anything left to reconcile.
fn holds_content(subtree: Option<&Value>) -> bool {
    match subtree {
        None | Some(Value::Null) => false,
        Some(Value::Object(object)) => !object.is_empty(),
        Some(Value::Array(elements)) => !elements.is_empty(),
        Some(_) => true,
    }
}
