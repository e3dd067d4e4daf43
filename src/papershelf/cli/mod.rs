//! # CLI Layer
//!
//! This module is **one possible UI client** for papershelf; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin for the shell)
//! - Installs the log subscriber
//! - Launches the system browser
//! - Writes exported pages to disk
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()`, context setup and the per-command handlers
//! - `render`: terminal rendering of views, facets and messages
//! - `page`: the static HTML page export
//! - `styles`, `templates`: theme and template sources

mod commands;
mod page;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
