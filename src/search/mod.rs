//! Field search over users, organizations and tickets
//!
//! The [`SearchService`] runs one field query against the matching
//! repository and enriches every hit with its related records:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           Search Service                        │
//! │  find_users()  find_orgs()  find_tickets()      │
//! └─────────────────────────────────────────────────┘
//!            │ find_by_field            │ enrich
//!            ▼                          ▼
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  Repository (×3)     │◀──│  Enricher (×3)       │
//! │  _id / FK indexes    │   │  by id / by FK       │
//! │  linear field scan   │   └──────────────────────┘
//! └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use zensearch::models::{Record, Value};
//! use zensearch::repository::Repository;
//! use zensearch::search::SearchService;
//!
//! let users = Repository::users(vec![Record::new().with("_id", 1.0).with("organization_id", 22.0)])?;
//! let orgs = Repository::organizations(vec![Record::new().with("_id", 22.0).with("name", "A")])?;
//! let tickets = Repository::tickets(vec![Record::new().with("_id", "t1").with("submitter_id", 1.0)])?;
//!
//! let search = SearchService::new(users, orgs, tickets);
//! let results = search.find_users("_id", &Value::from("1"));
//!
//! assert_eq!(results.len(), 1);
//! assert!(results[0].contains_field("organization"));
//! # Ok::<(), zensearch::repository::RepositoryError>(())
//! ```

mod query;
mod service;

pub use query::FieldQuery;
pub use service::SearchService;
