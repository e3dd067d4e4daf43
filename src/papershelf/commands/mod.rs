//! # Command Layer
//!
//! Business logic for each operation a UI client can request. Commands take a
//! borrowed [`Catalog`](crate::catalog::Catalog) plus plain Rust arguments and
//! return a [`CmdResult`]. They never print and never touch the terminal.

use crate::facets::FacetEntry;
use crate::view::RenderedView;

pub mod activate;
pub mod browse;
pub mod facets;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: Option<RenderedView>,
    pub facets: Vec<FacetEntry>,
    pub target: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: RenderedView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_facets(mut self, facets: Vec<FacetEntry>) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_target(mut self, target: String) -> Self {
        self.target = Some(target);
        self
    }
}
