use crate::config::{Config, DataConfig};
use crate::models::EntityKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "zensearch", version)]
#[command(about = "zensearch allows you to search users, organizations, and tickets")]
#[command(
    long_about = "zensearch allows you to search users, organizations, and tickets by any attribute and will provide any related data"
)]
pub struct Cli {
    /// Directory holding users.json, organizations.json and tickets.json
    #[arg(short, long, env = "ZENSEARCH_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Zendesk users operations
    Users {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Zendesk organizations operations
    Organizations {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Zendesk tickets operations
    Tickets {
        #[command(subcommand)]
        action: EntityAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum EntityAction {
    /// Search by field. If the search term is omitted, returns every record whose field is empty
    Search {
        #[arg(value_name = "FIELD")]
        field: String,

        #[arg(value_name = "SEARCH_TERM")]
        term: Option<String>,
    },

    /// List valid fields to search by
    Fields,
}

impl Commands {
    pub fn entity(&self) -> (EntityKind, &EntityAction) {
        match self {
            Commands::Users { action } => (EntityKind::User, action),
            Commands::Organizations { action } => (EntityKind::Organization, action),
            Commands::Tickets { action } => (EntityKind::Ticket, action),
        }
    }
}

impl Cli {
    /// Apply command-line flags on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.data = DataConfig::from_dir(dir);
        }
        if self.compact {
            config.output.pretty = false;
        }
        if self.verbose {
            config.observability.log_level = "zensearch=debug".to_string();
        }
    }
}
