use std::collections::BTreeMap;

use super::FieldValue;

/// Field map of a schemaless document.
pub type DocumentFields = BTreeMap<String, FieldValue>;

/// A stored document: the store's identifier plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: DocumentFields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: DocumentFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
