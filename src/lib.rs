//! Field search over users, organizations and tickets.
//!
//! Records are loaded once from JSON, indexed by identity and foreign key, and
//! queried by any field under loose-typing comparison rules. Every hit is
//! returned together with its related records.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod output;
pub mod repository;
pub mod search;

pub use error::{AppError, Result};
pub use search::SearchService;
