//! Loading record collections from JSON files.

use crate::config::DataConfig;
use crate::error::{AppError, Result};
use crate::models::Record;
use crate::repository::Repository;
use crate::search::SearchService;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Read a JSON array of objects from `path`
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AppError::load(path, e.to_string()))?;

    parse_records(BufReader::new(file)).map_err(|message| AppError::load(path, message))
}

/// Decode a JSON array of objects. Errors name the offending element.
pub fn parse_records(reader: impl Read) -> std::result::Result<Vec<Record>, String> {
    let document: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("invalid JSON: {}", e))?;

    let serde_json::Value::Array(items) = document else {
        return Err("expected a JSON array of objects".to_string());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(Record::from(map)),
            _ => Err(format!("element {} is not a JSON object", index)),
        })
        .collect()
}

/// Load and index users, organizations and tickets, in that order
pub fn load_search_service(data: &DataConfig) -> Result<SearchService> {
    let users = Repository::users(read_records(&data.users_path)?)?;
    info!(
        entity = %users.kind(),
        path = %data.users_path.display(),
        records = users.len(),
        "Collection loaded"
    );

    let organizations = Repository::organizations(read_records(&data.organizations_path)?)?;
    info!(
        entity = %organizations.kind(),
        path = %data.organizations_path.display(),
        records = organizations.len(),
        "Collection loaded"
    );

    let tickets = Repository::tickets(read_records(&data.tickets_path)?)?;
    info!(
        entity = %tickets.kind(),
        path = %data.tickets_path.display(),
        records = tickets.len(),
        "Collection loaded"
    );

    Ok(SearchService::new(users, organizations, tickets))
}
