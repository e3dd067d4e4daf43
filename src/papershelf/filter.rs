//! Facet filtering.
//!
//! A [`FilterSelection`] holds one [`Selection`] per facet. A record passes
//! when every facet is either unconstrained or holds exactly the selected value
//! (case-sensitive). Records without a value for a constrained facet never
//! pass. Filtering keeps the input order and never touches the records.

use crate::model::{Facet, PaperRecord};
use std::fmt;

/// Literal that stands for "no constraint" in controls and on the command line.
pub const NO_CONSTRAINT: &str = "all";

/// The constraint chosen for a single facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Reads control text: `all` is no constraint, anything else is a value.
    pub fn parse(text: &str) -> Self {
        if text == NO_CONSTRAINT {
            Selection::All
        } else {
            Selection::Value(text.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether a record's value for the facet satisfies this selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// Control text for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => NO_CONSTRAINT,
            Selection::Value(v) => v,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-facet selections. Starts (and resets) with every facet unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    choices: [Selection; Facet::COUNT],
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSelection::set`].
    pub fn with(mut self, facet: Facet, selection: Selection) -> Self {
        self.set(facet, selection);
        self
    }

    pub fn get(&self, facet: Facet) -> &Selection {
        &self.choices[facet.position()]
    }

    pub fn set(&mut self, facet: Facet, selection: Selection) {
        self.choices[facet.position()] = selection;
    }

    pub fn clear(&mut self, facet: Facet) {
        self.set(facet, Selection::All);
    }

    pub fn reset(&mut self) {
        self.choices = Default::default();
    }

    /// True when no facet is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.choices.iter().all(Selection::is_all)
    }

    /// The constrained facets and their values, in facet order.
    pub fn constraints(&self) -> impl Iterator<Item = (Facet, &str)> {
        Facet::ALL
            .into_iter()
            .filter_map(move |facet| match self.get(facet) {
                Selection::All => None,
                Selection::Value(v) => Some((facet, v.as_str())),
            })
    }

    /// Whether `record` satisfies every facet's selection.
    pub fn matches(&self, record: &PaperRecord) -> bool {
        Facet::ALL
            .into_iter()
            .all(|facet| self.get(facet).matches(record.facet(facet)))
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return f.write_str(NO_CONSTRAINT);
        }
        let parts: Vec<String> = self
            .constraints()
            .map(|(facet, value)| format!("{}={}", facet.key(), value))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// The records matching `selection`, in input order.
pub fn filter<'a, I>(records: I, selection: &FilterSelection) -> Vec<&'a PaperRecord>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    records
        .into_iter()
        .filter(|record| selection.matches(record))
        .collect()
}
