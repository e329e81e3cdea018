use crate::definition::{CaseField, FieldType};

/// The transformation branch a case field falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Scalar,
    Complex,
    Collection,
    DynamicList,
    /// A collection whose elements are plain `DynamicList` values.
    CollectionOfDynamicList,
}

impl FieldClass {
    /// Whether the walker has anything to do for this class.
    pub fn bears_lists(self) -> bool {
        !matches!(self, FieldClass::Scalar)
    }
}

/// Classifies a field by its type tag. Unknown tags are scalars.
pub fn classify(field: &CaseField) -> FieldClass {
    let field_type = &field.field_type;
    match field_type.kind.as_str() {
        FieldType::DYNAMIC_LIST => FieldClass::DynamicList,
        FieldType::COMPLEX => FieldClass::Complex,
        FieldType::COLLECTION => match field_type.collection_field_type.as_deref() {
            Some(element) if element.is(FieldType::DYNAMIC_LIST) => {
                FieldClass::CollectionOfDynamicList
            }
            _ => FieldClass::Collection,
        },
        _ => FieldClass::Scalar,
    }
}
