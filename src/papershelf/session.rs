//! Interactive browsing sessions.
//!
//! A [`Session`] is the state a user manipulates while browsing: one
//! [`FilterSelection`] and the active [`ViewMode`], over a borrowed
//! [`Catalog`]. Each [`Interaction`] is applied synchronously and, when it
//! changes what is shown, re-runs filtering and projection to completion. The
//! new view fully replaces the previous one.

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::facets::FacetEntry;
use crate::filter::{FilterSelection, Selection};
use crate::index::parse_position;
use crate::model::Facet;
use crate::view::{project, ImageResolver, RenderedView, ViewMode};
use std::str::FromStr;
use tracing::debug;

/// Usage lines for the interaction language.
pub const INTERACTION_HELP: &[(&str, &str)] = &[
    ("set <facet> <value>", "filter a facet on a value (\"all\" clears it)"),
    ("clear <facet>", "remove the filter on one facet"),
    ("reset", "remove all filters"),
    ("view card|table", "switch between the card and table views"),
    ("open <n>", "open paper n of the current view in the browser"),
    ("facets [facet]", "list the values each filter offers"),
    ("show", "render the current results again"),
    ("help", "show this help"),
    ("quit", "leave the session"),
];

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Select(Facet, Selection),
    Clear(Facet),
    Reset,
    SwitchView(ViewMode),
    Activate(usize),
    Facets(Option<Facet>),
    Show,
    Help,
    Quit,
}

impl FromStr for Interaction {
    type Err = ShelfError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match (verb.to_ascii_lowercase().as_str(), rest) {
            ("set" | "select", rest) => {
                let (first, _) = rest
                    .split_once(char::is_whitespace)
                    .filter(|(_, v)| !v.trim().is_empty())
                    .ok_or_else(|| usage("set <facet> <value>"))?;
                let (facet, value) = split_facet(rest)
                    .ok_or_else(|| ShelfError::UnknownFacet(first.to_string()))?;
                Ok(Interaction::Select(facet, Selection::parse(value)))
            }
            ("clear", "") => Err(usage("clear <facet>")),
            ("clear", facet) => Ok(Interaction::Clear(facet.parse()?)),
            ("reset", "") => Ok(Interaction::Reset),
            ("view", "") => Err(usage("view card|table")),
            ("view", mode) => Ok(Interaction::SwitchView(mode.parse()?)),
            ("open", "") => Err(usage("open <n>")),
            ("open", n) => Ok(Interaction::Activate(parse_position(n)?)),
            ("facets", "") => Ok(Interaction::Facets(None)),
            ("facets", facet) => Ok(Interaction::Facets(Some(facet.parse()?))),
            ("show" | "ls", "") => Ok(Interaction::Show),
            ("help" | "?", _) => Ok(Interaction::Help),
            ("quit" | "exit" | "q", "") => Ok(Interaction::Quit),
            _ => Err(ShelfError::Interaction(format!(
                "Unknown command: {} (type \"help\" for the list)",
                line
            ))),
        }
    }
}

/// Splits `<facet> <value>` where the facet may be a multi-word name such as
/// "Origami or Kirigami". The longest leading name that is a facet wins.
fn split_facet(rest: &str) -> Option<(Facet, &str)> {
    rest.char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .rev()
        .find_map(|(at, _)| {
            let (name, value) = rest.split_at(at);
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            name.trim().parse::<Facet>().ok().map(|facet| (facet, value))
        })
}

fn usage(form: &str) -> ShelfError {
    ShelfError::Interaction(format!("Usage: {}", form))
}

/// What an applied interaction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The results were re-rendered.
    View(RenderedView),
    Facets(Vec<FacetEntry>),
    /// A unit was activated; its target should be opened.
    Activated { position: usize, target: String },
    Help,
    Quit,
}

pub struct Session<'a> {
    catalog: &'a Catalog,
    images: ImageResolver,
    selection: FilterSelection,
    mode: ViewMode,
    view: RenderedView,
}

impl<'a> Session<'a> {
    /// Starts with no constraints, showing the full catalog.
    pub fn new(catalog: &'a Catalog, images: ImageResolver, mode: ViewMode) -> Self {
        let mut session = Self {
            catalog,
            images,
            selection: FilterSelection::new(),
            mode,
            view: RenderedView::no_results(),
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The most recently rendered view.
    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    /// Number of records matching the current selection.
    pub fn matched(&self) -> usize {
        self.view.len()
    }

    pub fn apply(&mut self, interaction: Interaction) -> Result<Outcome> {
        debug!(?interaction, "applying interaction");
        match interaction {
            Interaction::Select(facet, selection) => {
                if let Selection::Value(value) = &selection {
                    if !self.catalog.options().contains(facet, value) {
                        return Err(ShelfError::Interaction(format!(
                            "No {} value \"{}\" in the catalog (see \"facets {}\")",
                            facet.label(),
                            value,
                            facet.key()
                        )));
                    }
                }
                self.selection.set(facet, selection);
                Ok(self.rendered())
            }
            Interaction::Clear(facet) => {
                self.selection.clear(facet);
                Ok(self.rendered())
            }
            Interaction::Reset => {
                self.selection.reset();
                Ok(self.rendered())
            }
            Interaction::SwitchView(mode) => {
                self.mode = mode;
                Ok(self.rendered())
            }
            Interaction::Show => Ok(Outcome::View(self.view.clone())),
            Interaction::Activate(position) => self.activate(position),
            Interaction::Facets(only) => Ok(Outcome::Facets(self.catalog.options().entries(only))),
            Interaction::Help => Ok(Outcome::Help),
            Interaction::Quit => Ok(Outcome::Quit),
        }
    }

    fn activate(&self, position: usize) -> Result<Outcome> {
        let binding = self.view.activate(position).ok_or_else(|| {
            ShelfError::Activation(format!(
                "no paper #{} in the current view ({} shown)",
                position,
                self.view.len()
            ))
        })?;
        let target = binding.target.clone().ok_or_else(|| {
            ShelfError::Activation(format!("paper #{} has no DOI link", position))
        })?;
        Ok(Outcome::Activated { position, target })
    }

    fn refresh(&mut self) {
        let matched = self.catalog.filter(&self.selection);
        self.view = project(self.mode, &matched, &self.images);
    }

    fn rendered(&mut self) -> Outcome {
        self.refresh();
        Outcome::View(self.view.clone())
    }
}
