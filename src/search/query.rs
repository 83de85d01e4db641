//! Field query construction and validation

use crate::error::{AppError, Result};
use crate::models::{EntityKind, Value};
use serde::{Deserialize, Serialize};

/// A single `field = term` query against one entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldQuery {
    /// Collection to search
    pub kind: EntityKind,

    /// Field name to compare
    pub field: String,

    /// Search term; null when omitted
    #[serde(default)]
    pub term: Value,
}

impl FieldQuery {
    /// Create a query with no term
    pub fn new(kind: EntityKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            term: Value::Null,
        }
    }

    /// Set the search term
    pub fn with_term(mut self, term: impl Into<Value>) -> Self {
        self.term = term.into();
        self
    }

    /// Reject fields the entity does not recognise
    pub fn validate(&self) -> Result<()> {
        if self.kind.is_searchable(&self.field) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid field \"{}\" for {}",
                self.field,
                self.kind.plural()
            )))
        }
    }
}
