//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every catalog operation, whichever UI is driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the loaded [`Catalog`] and the [`ImageResolver`] for its source
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`CmdResult`, [`Session`])
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or opening of links
//! - **Presentation concerns**: Views are returned as data, not strings
//!
//! ## Loading
//!
//! [`CatalogApi::load`] reads the source once. A source that fails to load is
//! logged and replaced by an empty catalog, so every later operation still
//! succeeds and simply shows the "no results" placeholder.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::filter::FilterSelection;
use crate::model::Facet;
use crate::session::Session;
use crate::store::CatalogSource;
use crate::view::{ImageResolver, ViewMode};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for catalog browsing.
///
/// All UI clients (CLI, interactive shell, page export) go through this type.
pub struct CatalogApi {
    catalog: Catalog,
    images: ImageResolver,
}

impl CatalogApi {
    pub fn new(catalog: Catalog, images: ImageResolver) -> Self {
        Self { catalog, images }
    }

    /// Loads `source` once, falling back to an empty catalog on failure.
    ///
    /// Local image references are resolved against the source's directory.
    pub fn load<S: CatalogSource>(source: &S, images: ImageResolver) -> Self {
        let images = images.with_base_dir(source.base_dir());
        Self::new(Catalog::load_or_empty(source), images)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facets(&self, only: Option<Facet>) -> CmdResult {
        commands::facets::run(&self.catalog, only)
    }

    pub fn browse(&self, selection: &FilterSelection, mode: ViewMode) -> CmdResult {
        commands::browse::run(&self.catalog, &self.images, selection, mode)
    }

    pub fn activate(
        &self,
        selection: &FilterSelection,
        mode: ViewMode,
        position: usize,
    ) -> Result<CmdResult> {
        commands::activate::run(&self.catalog, &self.images, selection, mode, position)
    }

    /// Starts an interactive session over the loaded catalog.
    pub fn session(&self, mode: ViewMode) -> Session<'_> {
        Session::new(&self.catalog, self.images.clone(), mode)
    }
}
