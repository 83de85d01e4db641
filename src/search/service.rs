//! Search facade: one field query, then related-record enrichment

use crate::enrichment::enrichers::{enricher_for, Enricher};
use crate::error::Result;
use crate::models::{EntityKind, Record, Value};
use crate::repository::{OrganizationRepository, RepositorySet, TicketRepository, UserRepository};
use crate::search::query::FieldQuery;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Main search service
///
/// Repositories are immutable after construction and enrichment works on
/// copies of the matched records, so one service can serve queries from
/// several threads at once.
pub struct SearchService {
    /// Indexed collections
    repositories: RepositorySet,

    user_enricher: Arc<dyn Enricher>,
    organization_enricher: Arc<dyn Enricher>,
    ticket_enricher: Arc<dyn Enricher>,
}

impl SearchService {
    /// Create a new search service over the three repositories
    pub fn new(
        users: UserRepository,
        organizations: OrganizationRepository,
        tickets: TicketRepository,
    ) -> Self {
        Self::from_repositories(RepositorySet::new(users, organizations, tickets))
    }

    pub fn from_repositories(repositories: RepositorySet) -> Self {
        Self {
            user_enricher: enricher_for(EntityKind::User, &repositories),
            organization_enricher: enricher_for(EntityKind::Organization, &repositories),
            ticket_enricher: enricher_for(EntityKind::Ticket, &repositories),
            repositories,
        }
    }

    pub fn repositories(&self) -> &RepositorySet {
        &self.repositories
    }

    /// Search users and attach `organization`, `submitted_tickets` and `assigned_tickets`
    pub fn find_users(&self, field: &str, term: &Value) -> Vec<Record> {
        self.find(EntityKind::User, field, term)
    }

    /// Search organizations and attach `users` and `tickets`
    pub fn find_orgs(&self, field: &str, term: &Value) -> Vec<Record> {
        self.find(EntityKind::Organization, field, term)
    }

    /// Search tickets and attach `organization`, `submitted_user` and `assigned_user`
    pub fn find_tickets(&self, field: &str, term: &Value) -> Vec<Record> {
        self.find(EntityKind::Ticket, field, term)
    }

    /// Search any collection. Never fails: no match is an empty result.
    pub fn find(&self, kind: EntityKind, field: &str, term: &Value) -> Vec<Record> {
        let start = Instant::now();
        let enricher = self.enricher(kind);

        let results: Vec<Record> = self
            .repositories
            .find_by_field(kind, field, term)
            .iter()
            .map(|hit| {
                let mut record = Record::clone(hit);
                enricher.enrich(&mut record);
                record
            })
            .collect();

        debug!(
            entity = %enricher.kind(),
            field,
            hits = results.len(),
            enricher = enricher.name(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Search completed"
        );

        results
    }

    /// Validate the query's field name, then run it
    pub fn execute(&self, query: &FieldQuery) -> Result<Vec<Record>> {
        query.validate()?;
        Ok(self.find(query.kind, &query.field, &query.term))
    }

    fn enricher(&self, kind: EntityKind) -> &dyn Enricher {
        match kind {
            EntityKind::User => self.user_enricher.as_ref(),
            EntityKind::Organization => self.organization_enricher.as_ref(),
            EntityKind::Ticket => self.ticket_enricher.as_ref(),
        }
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("repositories", &self.repositories)
            .finish()
    }
}
