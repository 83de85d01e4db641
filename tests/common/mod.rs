//! Common test utilities
//!
//! Record builders for the three collections and a helper that writes a data
//! directory the loader and CLI can read.

#![allow(dead_code)]

use serde_json::{json, Value as Json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use zensearch::models::{Record, Value};
use zensearch::repository::Repository;
use zensearch::SearchService;

pub fn user(id: i64, name: &str, organization_id: Option<i64>) -> Record {
    let record = Record::new()
        .with("_id", id)
        .with("name", name)
        .with("active", true)
        .with("tags", vec![Value::from("Springville"), Value::from("Sutton")]);

    match organization_id {
        Some(org) => record.with("organization_id", org),
        None => record,
    }
}

pub fn organization(id: i64, name: &str) -> Record {
    Record::new()
        .with("_id", id)
        .with("name", name)
        .with("domain_names", vec![Value::from("kage.com"), Value::from("ecratic.com")])
}

pub fn ticket(
    id: &str,
    subject: &str,
    submitter_id: Option<i64>,
    assignee_id: Option<i64>,
    organization_id: Option<i64>,
) -> Record {
    let mut record = Record::new()
        .with("_id", id)
        .with("subject", subject)
        .with("status", "pending");

    for (field, value) in [
        ("submitter_id", submitter_id),
        ("assignee_id", assignee_id),
        ("organization_id", organization_id),
    ] {
        if let Some(value) = value {
            record.insert(field, value);
        }
    }
    record
}

/// Two organizations, three users and three tickets with every relation shape:
/// user 3 has no organization, ticket "t3" has no assignee and no organization
pub fn sample_service() -> SearchService {
    let users = Repository::users(vec![
        user(1, "Francisca Rasmussen", Some(101)),
        user(2, "Cross Barlow", Some(102)),
        user(3, "Ingrid Wagner", None),
    ])
    .unwrap();

    let organizations =
        Repository::organizations(vec![organization(101, "Enthaze"), organization(102, "Xylar")])
            .unwrap();

    let tickets = Repository::tickets(vec![
        ticket("t1", "A Catastrophe in Korea", Some(1), Some(2), Some(101)),
        ticket("t2", "A Catastrophe in Micronesia", Some(2), Some(1), Some(101)),
        ticket("t3", "A Nuisance in Latvia", Some(3), None, None),
    ])
    .unwrap();

    SearchService::new(users, organizations, tickets)
}

/// Write the three collections as JSON files into a fresh directory
pub fn write_data_dir(users: Json, organizations: Json, tickets: Json) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(&dir.path().join("users.json"), &users);
    write_json(&dir.path().join("organizations.json"), &organizations);
    write_json(&dir.path().join("tickets.json"), &tickets);
    dir
}

/// The smallest data set with one of each relation
pub fn minimal_data_dir() -> TempDir {
    write_data_dir(
        json!([{"_id": 1, "name": "Francisca", "organization_id": 22}]),
        json!([{"_id": 22, "name": "A"}]),
        json!([{"_id": "t1", "submitter_id": 1, "organization_id": 22}]),
    )
}

pub fn write_json(path: &Path, value: &Json) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// `_id` of every record in an enrichment list
pub fn ids(value: &Value) -> Vec<String> {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(record) => record.field("_id").to_string(),
                other => panic!("expected object, got {:?}", other),
            })
            .collect(),
        other => panic!("expected list, got {:?}", other),
    }
}
