//! # Catalog Sources
//!
//! The catalog is one static resource: an ordered JSON array of paper records.
//! [`CatalogSource`] abstracts where that resource comes from so the rest of
//! the library never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: reads a JSON file (production).
//! - [`memory::InMemorySource`]: serves records held in memory, or a canned
//!   failure, for tests.
//!
//! A source is read exactly once, when the [`crate::catalog::Catalog`] is built.

use crate::error::Result;
use crate::model::PaperRecord;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Where the catalog resource is loaded from.
pub trait CatalogSource {
    /// Reads and parses every record, in resource order.
    fn load(&self) -> Result<Vec<PaperRecord>>;

    /// Human-readable location, for diagnostics.
    fn describe(&self) -> String;

    /// Directory that relative image references resolve against, if any.
    fn base_dir(&self) -> Option<PathBuf> {
        None
    }
}
