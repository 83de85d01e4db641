//! Related-record enrichment for search results
//!
//! Each entity kind has one enricher that attaches the records related to a
//! search hit:
//! - users get their `organization`, `submitted_tickets` and `assigned_tickets`
//! - organizations get their `users` and `tickets`
//! - tickets get their `organization`, `submitted_user` and `assigned_user`
//!
//! Enrichers write onto a copy of the matched record, never onto the indexed one.

pub mod enrichers;

pub use enrichers::{Enricher, OrganizationEnricher, TicketEnricher, UserEnricher};

pub const ORGANIZATION_KEY: &str = "organization";
pub const USERS_KEY: &str = "users";
pub const TICKETS_KEY: &str = "tickets";
pub const SUBMITTED_TICKETS_KEY: &str = "submitted_tickets";
pub const ASSIGNED_TICKETS_KEY: &str = "assigned_tickets";
pub const SUBMITTED_USER_KEY: &str = "submitted_user";
pub const ASSIGNED_USER_KEY: &str = "assigned_user";
