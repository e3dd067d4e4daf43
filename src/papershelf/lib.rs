//! # Papershelf Architecture
//!
//! Papershelf is a **UI-agnostic catalog browser** for research papers on
//! origami and kirigami engineering. The library loads a static catalog once,
//! derives the filter options from it, and turns any combination of filter
//! choices into a rendered view (cards or a table). The bundled CLI is one
//! client of that library; an HTML page export is another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive shell             │
//! │  - Renders views to the terminal or to an HTML page         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, session.rs)                             │
//! │  - Owns the loaded catalog                                  │
//! │  - Dispatches to commands, holds interactive state          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Browse, list facets, resolve activations                 │
//! │  - Built on facets.rs, filter.rs and view/                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog.rs, store/)                         │
//! │  - Abstract CatalogSource trait                             │
//! │  - JsonFileSource (production), InMemorySource (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The catalog is read once and never mutated. Facet options are computed at
//! load time from the full catalog and do not depend on the current
//! selection. Every change to the selection or the view mode re-runs
//! `filter → project` from scratch; a new view replaces the previous one
//! outright.
//!
//! Filtering is a conjunction over the six facets. A facet set to `"all"`
//! imposes nothing; any other value requires exact, case-sensitive equality.
//! An empty result is never an empty container: both view modes produce the
//! "No matching papers found." placeholder instead.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types and never writes to stdout/stderr. Diagnostics go through
//! `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`session`]: Interactive browsing state and its command language
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The load-once record set and its facet options
//! - [`store`]: Catalog source abstraction and implementations
//! - [`model`]: Core data types (`PaperRecord`, `Facet`)
//! - [`facets`]: Distinct-value indexing per facet
//! - [`filter`]: Selections and the conjunctive filter
//! - [`index`]: 1-based display positions
//! - [`view`]: Card and table projections
//! - [`config`]: Configuration management
//! - [`browser`]: Opening DOI links in the system browser
//! - [`error`]: Error types
//! - `cli`: Argument parsing, terminal rendering and page export (binary only)

pub mod api;
pub mod browser;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
