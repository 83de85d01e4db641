//! Error types for repository construction

use crate::models::{EntityKind, ID_FIELD};

/// Errors raised while indexing a record collection. Any of them aborts the
/// whole build; no partially indexed repository is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// `_id` is absent or not of the collection's identity type
    #[error("{entity} at index {index} is missing \"{field}\" or \"{field}\" is not a {expected}", field = ID_FIELD)]
    MissingOrInvalidIdentity {
        entity: EntityKind,
        index: usize,
        expected: &'static str,
    },

    /// Another record already holds the same `_id`
    #[error("{entity} at index {index} has duplicate \"{field}\" {id}", field = ID_FIELD)]
    DuplicateIdentity {
        entity: EntityKind,
        index: usize,
        id: String,
    },
}

impl RepositoryError {
    /// Input position of the offending record
    pub fn index(&self) -> usize {
        match self {
            RepositoryError::MissingOrInvalidIdentity { index, .. }
            | RepositoryError::DuplicateIdentity { index, .. } => *index,
        }
    }

    pub fn entity(&self) -> EntityKind {
        match self {
            RepositoryError::MissingOrInvalidIdentity { entity, .. }
            | RepositoryError::DuplicateIdentity { entity, .. } => *entity,
        }
    }
}
