use crate::enrichment::{
    ASSIGNED_TICKETS_KEY, ASSIGNED_USER_KEY, ORGANIZATION_KEY, SUBMITTED_TICKETS_KEY,
    SUBMITTED_USER_KEY, TICKETS_KEY, USERS_KEY,
};
use crate::models::{
    EntityKind, Record, Value, ASSIGNEE_ID_FIELD, ID_FIELD, ORGANIZATION_ID_FIELD,
    SUBMITTER_ID_FIELD,
};
use crate::repository::{
    IdentityKey, NumericKey, OrganizationRepository, RepositorySet, TicketRepository,
    UserRepository,
};
use std::sync::Arc;
use tracing::trace;

/// Attaches related records to a search hit
pub trait Enricher: Send + Sync + 'static {
    /// Get enricher name
    fn name(&self) -> &str;

    /// Entity kind whose hits this enricher handles
    fn kind(&self) -> EntityKind;

    /// Write derived fields onto `record`
    fn enrich(&self, record: &mut Record);
}

/// Build the enricher for `kind` over a repository set
pub fn enricher_for(kind: EntityKind, repositories: &RepositorySet) -> Arc<dyn Enricher> {
    match kind {
        EntityKind::User => Arc::new(UserEnricher::new(
            Arc::clone(&repositories.organizations),
            Arc::clone(&repositories.tickets),
        )),
        EntityKind::Organization => Arc::new(OrganizationEnricher::new(
            Arc::clone(&repositories.users),
            Arc::clone(&repositories.tickets),
        )),
        EntityKind::Ticket => Arc::new(TicketEnricher::new(
            Arc::clone(&repositories.users),
            Arc::clone(&repositories.organizations),
        )),
    }
}

fn numeric_field(record: &Record, field: &str) -> Option<NumericKey> {
    NumericKey::from_value(record.field(field))
}

fn record_list(records: Vec<Arc<Record>>) -> Value {
    Value::List(
        records
            .into_iter()
            .map(|record| Value::Object(Record::clone(&record)))
            .collect(),
    )
}

/// The organization a user or ticket belongs to, when `organization_id` is a
/// number naming a known organization
fn attach_organization(organizations: &OrganizationRepository, record: &mut Record) {
    let organization = numeric_field(record, ORGANIZATION_ID_FIELD)
        .and_then(|org_id| organizations.find_by_id(&org_id));

    if let Some(organization) = organization {
        record.insert(ORGANIZATION_KEY, Record::clone(&organization));
    }
}

/// User enricher - organization plus submitted and assigned tickets
pub struct UserEnricher {
    organizations: Arc<OrganizationRepository>,
    tickets: Arc<TicketRepository>,
}

impl UserEnricher {
    pub fn new(organizations: Arc<OrganizationRepository>, tickets: Arc<TicketRepository>) -> Self {
        Self {
            organizations,
            tickets,
        }
    }
}

impl Enricher for UserEnricher {
    fn name(&self) -> &str {
        "user_relations"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::User
    }

    fn enrich(&self, record: &mut Record) {
        attach_organization(&self.organizations, record);

        if let Some(user_id) = numeric_field(record, ID_FIELD) {
            let submitted = self.tickets.find_by_foreign_key(SUBMITTER_ID_FIELD, user_id);
            let assigned = self.tickets.find_by_foreign_key(ASSIGNEE_ID_FIELD, user_id);

            trace!(
                user_id = %user_id,
                submitted = submitted.len(),
                assigned = assigned.len(),
                "Attaching user tickets"
            );

            record.insert(SUBMITTED_TICKETS_KEY, record_list(submitted));
            record.insert(ASSIGNED_TICKETS_KEY, record_list(assigned));
        }
    }
}

/// Organization enricher - member users and tickets
pub struct OrganizationEnricher {
    users: Arc<UserRepository>,
    tickets: Arc<TicketRepository>,
}

impl OrganizationEnricher {
    pub fn new(users: Arc<UserRepository>, tickets: Arc<TicketRepository>) -> Self {
        Self { users, tickets }
    }
}

impl Enricher for OrganizationEnricher {
    fn name(&self) -> &str {
        "organization_relations"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Organization
    }

    fn enrich(&self, record: &mut Record) {
        if let Some(org_id) = numeric_field(record, ID_FIELD) {
            let users = self.users.find_by_foreign_key(ORGANIZATION_ID_FIELD, org_id);
            let tickets = self.tickets.find_by_foreign_key(ORGANIZATION_ID_FIELD, org_id);

            trace!(
                org_id = %org_id,
                users = users.len(),
                tickets = tickets.len(),
                "Attaching organization members"
            );

            record.insert(USERS_KEY, record_list(users));
            record.insert(TICKETS_KEY, record_list(tickets));
        }
    }
}

/// Ticket enricher - organization, submitter and assignee
pub struct TicketEnricher {
    users: Arc<UserRepository>,
    organizations: Arc<OrganizationRepository>,
}

impl TicketEnricher {
    pub fn new(users: Arc<UserRepository>, organizations: Arc<OrganizationRepository>) -> Self {
        Self {
            users,
            organizations,
        }
    }

    /// Null when the id is a number but no such user exists
    fn user_value(&self, user_id: NumericKey) -> Value {
        Value::from(
            self.users
                .find_by_id(&user_id)
                .map(|user| Record::clone(&user)),
        )
    }
}

impl Enricher for TicketEnricher {
    fn name(&self) -> &str {
        "ticket_relations"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Ticket
    }

    fn enrich(&self, record: &mut Record) {
        attach_organization(&self.organizations, record);

        if let Some(submitter_id) = numeric_field(record, SUBMITTER_ID_FIELD) {
            let submitter = self.user_value(submitter_id);
            record.insert(SUBMITTED_USER_KEY, submitter);
        }

        if let Some(assignee_id) = numeric_field(record, ASSIGNEE_ID_FIELD) {
            let assignee = self.user_value(assignee_id);
            record.insert(ASSIGNED_USER_KEY, assignee);
        }
    }
}
