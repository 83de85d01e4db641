//! Result serialization

use crate::error::Result;
use crate::models::Record;
use std::io::Write;

/// Render results as a JSON array, indented with two spaces when `pretty`
pub fn format_records(records: &[Record], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(text)
}

/// Write results followed by a newline
pub fn write_records<W: Write>(writer: &mut W, records: &[Record], pretty: bool) -> Result<()> {
    let text = format_records(records, pretty)?;
    writeln!(writer, "{}", text)?;
    Ok(())
}
