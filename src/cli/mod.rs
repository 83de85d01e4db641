//! Command-line interface
//!
//! ```text
//! zensearch users search <field> [term]
//! zensearch organizations fields
//! zensearch --data-dir ./data tickets search status pending
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, EntityAction};
pub use commands::{execute, run_fields, run_search, search_query};
