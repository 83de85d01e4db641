use crate::cli::args::{Cli, EntityAction};
use crate::config::Config;
use crate::error::Result;
use crate::loader::load_search_service;
use crate::models::{EntityKind, Value};
use crate::output::write_records;
use crate::search::{FieldQuery, SearchService};
use std::io::Write;
use tracing::debug;

/// Run the parsed command, writing results to `out`
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let (kind, action) = cli.command.entity();

    match action {
        EntityAction::Fields => run_fields(kind, out),
        EntityAction::Search { field, term } => {
            // validate before paying for the load
            let query = search_query(kind, field, term.as_deref());
            query.validate()?;

            let service = load_search_service(&config.data)?;
            run_search(&service, &query, config.output.pretty, out)
        }
    }
}

/// An omitted term searches for empty fields, so it is sent as the empty string
pub fn search_query(kind: EntityKind, field: &str, term: Option<&str>) -> FieldQuery {
    FieldQuery::new(kind, field).with_term(Value::from(term.unwrap_or_default()))
}

pub fn run_search<W: Write>(
    service: &SearchService,
    query: &FieldQuery,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    let results = service.execute(query)?;
    debug!(entity = %query.kind, field = %query.field, results = results.len(), "Writing results");
    write_records(out, &results, pretty)
}

pub fn run_fields<W: Write>(kind: EntityKind, out: &mut W) -> Result<()> {
    for field in kind.fields() {
        writeln!(out, "{}", field)?;
    }
    Ok(())
}
