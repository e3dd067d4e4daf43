//! # View Projection
//!
//! Turns a filtered record set into a [`RenderedView`]. There are two
//! interchangeable projections behind the [`ViewProjector`] trait:
//!
//! - [`card::CardProjector`]: one card per record (image, title, meta line, tags)
//! - [`table::TableProjector`]: one row per record (index, all fields, link)
//!
//! Both share the same filtered input and the same empty-set behavior: no
//! records produce [`RenderedView::NoResults`], never an empty container.
//!
//! A rendered view is plain data. Turning it into terminal text or an HTML page
//! is left to the client. Each unit carries a [`Binding`] tying its display
//! position to the record's DOI, which is how activation ("open this paper")
//! is resolved without looking at presentation.

use crate::error::ShelfError;
use crate::index::{index_records, DisplayRecord};
use crate::model::PaperRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod card;
pub mod images;
pub mod table;

pub use card::{Card, CardProjector, Tag};
pub use images::{ImageResolver, DEFAULT_IMAGE};
pub use table::{Table, TableProjector, TableRow, TABLE_COLUMNS};

/// Placeholder shown instead of an empty result container.
pub const NO_RESULTS_MESSAGE: &str = "No matching papers found.";

/// Which projection renders the results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Card => f.write_str("card"),
            ViewMode::Table => f.write_str("table"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" | "cards" | "gallery" => Ok(ViewMode::Card),
            "table" | "tabular" | "rows" => Ok(ViewMode::Table),
            other => Err(ShelfError::Interaction(format!(
                "Unknown view: {} (expected card or table)",
                other
            ))),
        }
    }
}

/// Activation binding of one rendered unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// 1-based display position of the unit.
    pub position: usize,
    /// DOI opened when the unit is activated, if the record has one.
    pub target: Option<String>,
}

impl Binding {
    pub fn for_record(display: &DisplayRecord<'_>) -> Self {
        Self {
            position: display.position,
            target: display.record.doi.clone(),
        }
    }
}

/// The projected result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedView {
    NoResults { message: String },
    Cards { cards: Vec<Card> },
    Table { table: Table },
}

impl RenderedView {
    pub fn no_results() -> Self {
        RenderedView::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }

    /// The projection mode, or `None` for the placeholder.
    pub fn mode(&self) -> Option<ViewMode> {
        match self {
            RenderedView::NoResults { .. } => None,
            RenderedView::Cards { .. } => Some(ViewMode::Card),
            RenderedView::Table { .. } => Some(ViewMode::Table),
        }
    }

    /// Number of rendered units.
    pub fn len(&self) -> usize {
        self.bindings().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedView::NoResults { .. })
    }

    pub fn bindings(&self) -> Vec<&Binding> {
        match self {
            RenderedView::NoResults { .. } => Vec::new(),
            RenderedView::Cards { cards } => cards.iter().map(|c| &c.binding).collect(),
            RenderedView::Table { table } => table.rows.iter().map(|r| &r.binding).collect(),
        }
    }

    /// The binding of the unit at `position`, if the view has one.
    pub fn activate(&self, position: usize) -> Option<&Binding> {
        self.bindings()
            .into_iter()
            .find(|binding| binding.position == position)
    }
}

/// One way of presenting a filtered record set.
pub trait ViewProjector {
    fn mode(&self) -> ViewMode;

    /// Projects a non-empty, already numbered record set.
    fn project_units(&self, records: &[DisplayRecord<'_>]) -> RenderedView;

    /// Projects `records`, producing the placeholder when there are none.
    fn project(&self, records: &[&PaperRecord]) -> RenderedView {
        if records.is_empty() {
            return RenderedView::no_results();
        }
        self.project_units(&index_records(records))
    }
}

/// The projector for `mode`.
pub fn projector(mode: ViewMode, images: &ImageResolver) -> Box<dyn ViewProjector> {
    match mode {
        ViewMode::Card => Box::new(CardProjector::new(images.clone())),
        ViewMode::Table => Box::new(TableProjector),
    }
}

/// Projects `records` with the projector for `mode`.
pub fn project(mode: ViewMode, records: &[&PaperRecord], images: &ImageResolver) -> RenderedView {
    projector(mode, images).project(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, doi: Option<&str>) -> PaperRecord {
        PaperRecord {
            title: Some(title.into()),
            doi: doi.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn empty_input_is_placeholder_in_both_modes() {
        let images = ImageResolver::new();
        for mode in [ViewMode::Card, ViewMode::Table] {
            let view = project(mode, &[], &images);
            assert!(view.is_empty());
            assert_eq!(view.mode(), None);
            assert_eq!(view.len(), 0);
            assert_eq!(
                view,
                RenderedView::NoResults {
                    message: "No matching papers found.".into()
                }
            );
        }
    }

    #[test]
    fn modes_share_bindings() {
        let a = paper("A", Some("https://doi.org/10.1/a"));
        let b = paper("B", None);
        let records = [&a, &b];
        let images = ImageResolver::new();

        let cards = project(ViewMode::Card, &records, &images);
        let table = project(ViewMode::Table, &records, &images);
        assert_eq!(cards.mode(), Some(ViewMode::Card));
        assert_eq!(table.mode(), Some(ViewMode::Table));
        assert_eq!(cards.bindings(), table.bindings());
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn activation_resolves_by_position() {
        let a = paper("A", Some("https://doi.org/10.1/a"));
        let b = paper("B", None);
        let view = project(ViewMode::Table, &[&a, &b], &ImageResolver::new());

        assert_eq!(
            view.activate(1).and_then(|b| b.target.as_deref()),
            Some("https://doi.org/10.1/a")
        );
        assert_eq!(view.activate(2).map(|b| b.target.clone()), Some(None));
        assert!(view.activate(3).is_none());
        assert!(view.activate(0).is_none());
    }

    #[test]
    fn view_mode_parses_and_displays() {
        assert_eq!("card".parse::<ViewMode>().unwrap(), ViewMode::Card);
        assert_eq!("TABLE".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert!("grid".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Table.to_string(), "table");
        assert_eq!(ViewMode::default(), ViewMode::Card);
    }
}
