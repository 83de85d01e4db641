//! Indexed, immutable record collections.
//!
//! A [`Repository`] owns one entity collection and builds, once, an identity
//! index keyed by `_id` plus one reverse index per declared foreign key. Records
//! are shared between those indexes as `Arc<Record>`; a lookup through any of
//! them yields the same allocation.
//!
//! Records whose foreign key is absent or not a number are grouped under
//! [`NumericKey::NONE`] rather than dropped, so "tickets with no assignee" is an
//! ordinary bucket lookup.

mod error;
mod key;

pub use error::RepositoryError;
pub use key::{IdentityKey, NumericKey};

use crate::matcher::{LooseMatcher, ValueMatcher};
use crate::models::{EntityKind, Record, Value, ID_FIELD};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub type UserRepository = Repository<NumericKey>;
pub type OrganizationRepository = Repository<NumericKey>;
pub type TicketRepository = Repository<String>;

/// Reverse index from a foreign key value to the records holding it
#[derive(Default)]
struct ForeignKeyIndex {
    buckets: HashMap<NumericKey, Vec<Arc<Record>>>,
}

/// Immutable, indexed collection of one entity kind
pub struct Repository<K: IdentityKey> {
    kind: EntityKind,

    /// Records in input order
    records: Vec<Arc<Record>>,

    /// `_id` -> record
    by_id: HashMap<K, Arc<Record>>,

    /// foreign key field -> reverse index
    foreign_indexes: HashMap<&'static str, ForeignKeyIndex>,

    /// Comparison used by generic field scans
    matcher: Arc<dyn ValueMatcher>,
}

impl<K: IdentityKey> Repository<K> {
    /// Index `records` with the default loose matcher
    pub fn build(
        kind: EntityKind,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Self, RepositoryError> {
        Self::with_matcher(kind, records, Arc::new(LooseMatcher))
    }

    /// Index `records`, using `matcher` for generic field scans
    pub fn with_matcher(
        kind: EntityKind,
        records: impl IntoIterator<Item = Record>,
        matcher: Arc<dyn ValueMatcher>,
    ) -> Result<Self, RepositoryError> {
        let mut repository = Self {
            kind,
            records: Vec::new(),
            by_id: HashMap::new(),
            foreign_indexes: kind
                .foreign_keys()
                .iter()
                .map(|field| (*field, ForeignKeyIndex::default()))
                .collect(),
            matcher,
        };

        for (index, record) in records.into_iter().enumerate() {
            repository.add(index, record)?;
        }

        debug!(
            entity = %kind,
            records = repository.records.len(),
            foreign_keys = repository.foreign_indexes.len(),
            "Repository indexed"
        );

        Ok(repository)
    }

    fn add(&mut self, index: usize, record: Record) -> Result<(), RepositoryError> {
        let id = K::from_value(record.field(ID_FIELD)).ok_or(
            RepositoryError::MissingOrInvalidIdentity {
                entity: self.kind,
                index,
                expected: K::TYPE_NAME,
            },
        )?;

        if self.by_id.contains_key(&id) {
            return Err(RepositoryError::DuplicateIdentity {
                entity: self.kind,
                index,
                id: id.to_string(),
            });
        }

        let record = Arc::new(record);

        for (field, foreign_index) in self.foreign_indexes.iter_mut() {
            let value = record.field(field);
            let key = match value.as_number() {
                Some(n) => NumericKey::new(n),
                None => {
                    if !value.is_null() {
                        warn!(
                            entity = %self.kind,
                            index,
                            field = *field,
                            "Foreign key is not a number, indexing under no relation"
                        );
                    }
                    NumericKey::NONE
                }
            };

            foreign_index
                .buckets
                .entry(key)
                .or_default()
                .push(Arc::clone(&record));
        }

        self.by_id.insert(id, Arc::clone(&record));
        self.records.push(record);
        Ok(())
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in input order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.records.iter()
    }

    /// Identity lookup
    pub fn find_by_id(&self, id: &K) -> Option<Arc<Record>> {
        self.by_id.get(id).cloned()
    }

    /// Reverse-index lookup. Unknown keys and undeclared fields yield an empty list.
    pub fn find_by_foreign_key(&self, field: &str, key: NumericKey) -> Vec<Arc<Record>> {
        match self.foreign_indexes.get(field) {
            Some(index) => index.buckets.get(&key).cloned().unwrap_or_default(),
            None => {
                debug!(entity = %self.kind, field, "No reverse index for field");
                Vec::new()
            }
        }
    }

    /// Keys present in a reverse index, including [`NumericKey::NONE`] when used
    pub fn foreign_key_values(&self, field: &str) -> Vec<NumericKey> {
        self.foreign_indexes
            .get(field)
            .map(|index| index.buckets.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Search by any field.
    ///
    /// `_id` and declared foreign keys go through their indexes after coercing
    /// the term; a term that cannot be coerced finds nothing. Every other field
    /// is a linear scan using the repository's matcher.
    pub fn find_by_field(&self, field: &str, term: &Value) -> Vec<Arc<Record>> {
        if field == ID_FIELD {
            debug!(entity = %self.kind, "Searching identity index");
            return K::from_term(term)
                .and_then(|id| self.find_by_id(&id))
                .into_iter()
                .collect();
        }

        if self.foreign_indexes.contains_key(field) {
            debug!(entity = %self.kind, field, "Searching reverse index");
            return term
                .coerce_number()
                .map(|n| self.find_by_foreign_key(field, NumericKey::new(n)))
                .unwrap_or_default();
        }

        debug!(entity = %self.kind, field, records = self.records.len(), "Scanning records");
        self.records
            .iter()
            .filter(|record| self.matcher.matches(record.field(field), term))
            .cloned()
            .collect()
    }
}

impl Repository<NumericKey> {
    pub fn users(records: impl IntoIterator<Item = Record>) -> Result<Self, RepositoryError> {
        Self::build(EntityKind::User, records)
    }

    pub fn organizations(
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Self, RepositoryError> {
        Self::build(EntityKind::Organization, records)
    }
}

impl Repository<String> {
    pub fn tickets(records: impl IntoIterator<Item = Record>) -> Result<Self, RepositoryError> {
        Self::build(EntityKind::Ticket, records)
    }
}

/// The three repositories a query may touch
#[derive(Debug, Clone)]
pub struct RepositorySet {
    pub users: Arc<UserRepository>,
    pub organizations: Arc<OrganizationRepository>,
    pub tickets: Arc<TicketRepository>,
}

impl RepositorySet {
    pub fn new(
        users: UserRepository,
        organizations: OrganizationRepository,
        tickets: TicketRepository,
    ) -> Self {
        Self {
            users: Arc::new(users),
            organizations: Arc::new(organizations),
            tickets: Arc::new(tickets),
        }
    }

    /// Field search against the repository for `kind`
    pub fn find_by_field(&self, kind: EntityKind, field: &str, term: &Value) -> Vec<Arc<Record>> {
        match kind {
            EntityKind::User => self.users.find_by_field(field, term),
            EntityKind::Organization => self.organizations.find_by_field(field, term),
            EntityKind::Ticket => self.tickets.find_by_field(field, term),
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users.len(),
            EntityKind::Organization => self.organizations.len(),
            EntityKind::Ticket => self.tickets.len(),
        }
    }
}

impl<K: IdentityKey> fmt::Debug for Repository<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("kind", &self.kind)
            .field("records", &self.records.len())
            .field("foreign_keys", &self.foreign_indexes.keys().collect::<Vec<_>>())
            .finish()
    }
}
