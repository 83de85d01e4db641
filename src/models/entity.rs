use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identity field shared by every entity
pub const ID_FIELD: &str = "_id";
pub const ORGANIZATION_ID_FIELD: &str = "organization_id";
pub const SUBMITTER_ID_FIELD: &str = "submitter_id";
pub const ASSIGNEE_ID_FIELD: &str = "assignee_id";

const USER_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "name",
    "alias",
    "created_at",
    "active",
    "verified",
    "shared",
    "locale",
    "timezone",
    "last_login_at",
    "email",
    "phone",
    "signature",
    "organization_id",
    "tags",
    "suspended",
    "role",
];

const ORGANIZATION_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "name",
    "domain_names",
    "created_at",
    "details",
    "shared_tickets",
    "tags",
];

const TICKET_FIELDS: &[&str] = &[
    "_id",
    "url",
    "external_id",
    "created_at",
    "type",
    "subject",
    "description",
    "priority",
    "status",
    "submitter_id",
    "assignee_id",
    "organization_id",
    "tags",
    "has_incidents",
    "due_at",
    "via",
];

/// The three record collections
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    User,
    Organization,
    Ticket,
}

impl EntityKind {
    /// Plural name, as used for command names and log fields
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Organization => "organizations",
            EntityKind::Ticket => "tickets",
        }
    }

    /// Searchable fields in display order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            EntityKind::User => USER_FIELDS,
            EntityKind::Organization => ORGANIZATION_FIELDS,
            EntityKind::Ticket => TICKET_FIELDS,
        }
    }

    /// Fields that reference another collection's `_id` and get a reverse index
    pub fn foreign_keys(&self) -> &'static [&'static str] {
        match self {
            EntityKind::User => &[ORGANIZATION_ID_FIELD],
            EntityKind::Organization => &[],
            EntityKind::Ticket => &[ORGANIZATION_ID_FIELD, SUBMITTER_ID_FIELD, ASSIGNEE_ID_FIELD],
        }
    }

    pub fn is_searchable(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_foreign_key_is_searchable() {
        for kind in EntityKind::iter() {
            assert!(kind.is_searchable(ID_FIELD));
            for field in kind.foreign_keys() {
                assert!(kind.is_searchable(field), "{} missing {}", kind, field);
            }
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EntityKind::Organization.to_string(), "organization");
        assert_eq!(EntityKind::from_str("ticket").unwrap(), EntityKind::Ticket);
        assert_eq!(EntityKind::User.plural(), "users");
    }

    #[test]
    fn test_field_lists() {
        assert_eq!(EntityKind::User.fields().len(), 19);
        assert_eq!(EntityKind::Organization.fields().len(), 9);
        assert_eq!(EntityKind::Ticket.fields().len(), 16);
        assert!(!EntityKind::Organization.is_searchable("organization_id"));
    }
}
