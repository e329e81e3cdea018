//! Lowering of case-field definitions into a tagged schema tree.
//!
//! Event-trigger JSON describes nesting through optional properties
//! (`complex_fields`, `collection_field_type`, `list_items`). The walker
//! works on [`SchemaNode`] instead, where every shape is an explicit variant.

mod classify;

pub use classify::{FieldClass, classify};

use crate::definition::{CaseField, ListItem};
use crate::error::DefinitionError;
use crate::sanitiser::candidate_items;
use tracing::warn;

/// One case field, reduced to what reconciliation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub id: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Scalar,
    Complex(Vec<SchemaNode>),
    /// Members of the element type; empty for collections of scalars.
    Collection(Vec<SchemaNode>),
    DynamicList(Vec<ListItem>),
    DynamicListCollection(Vec<ListItem>),
    /// A list-bearing field whose options could not be read. The walker
    /// reports it for every occurrence and leaves the data untouched.
    Unreadable {
        class: FieldClass,
        error: DefinitionError,
    },
}

impl SchemaNode {
    pub fn class(&self) -> FieldClass {
        match self.kind {
            NodeKind::Scalar => FieldClass::Scalar,
            NodeKind::Complex(_) => FieldClass::Complex,
            NodeKind::Collection(_) => FieldClass::Collection,
            NodeKind::DynamicList(_) => FieldClass::DynamicList,
            NodeKind::DynamicListCollection(_) => FieldClass::CollectionOfDynamicList,
            NodeKind::Unreadable { class, .. } => class,
        }
    }
}

/// Builds the schema tree for a list of case fields.
///
/// Unreadable list items only affect their own field, which is lowered to
/// [`NodeKind::Unreadable`]. A collection without an element type fails
/// the whole build.
pub fn build_schema(fields: &[CaseField]) -> Result<Vec<SchemaNode>, DefinitionError> {
    fields.iter().map(build_node).collect()
}

fn build_node(field: &CaseField) -> Result<SchemaNode, DefinitionError> {
    let class = classify(field);
    let kind = match class {
        FieldClass::Scalar => NodeKind::Scalar,
        FieldClass::DynamicList | FieldClass::CollectionOfDynamicList => {
            match candidate_items(field) {
                Ok(items) if class == FieldClass::DynamicList => NodeKind::DynamicList(items),
                Ok(items) => NodeKind::DynamicListCollection(items),
                Err(error) => {
                    warn!(field = %field.id, %error, "List items unreadable");
                    NodeKind::Unreadable { class, error }
                }
            }
        }
        FieldClass::Complex => NodeKind::Complex(build_schema(&field.field_type.complex_fields)?),
        FieldClass::Collection => {
            let element = field
                .field_type
                .collection_field_type
                .as_deref()
                .ok_or_else(|| DefinitionError::MissingCollectionType(field.id.clone()))?;
            NodeKind::Collection(build_schema(&element.complex_fields)?)
        }
    };

    Ok(SchemaNode {
        id: field.id.clone(),
        kind,
    })
}
