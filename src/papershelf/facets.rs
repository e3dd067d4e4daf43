//! Facet indexing: the distinct values offered by each filter control.
//!
//! Options are derived once from the full catalog at load time and are not
//! narrowed when a selection changes, so every value in the catalog stays
//! selectable regardless of the current filter.

use crate::model::{Facet, PaperRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct, non-empty values of `facet` across `records`, sorted ascending.
pub fn index<'a, I>(records: I, facet: Facet) -> Vec<String>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    records
        .into_iter()
        .filter_map(|record| record.facet(facet))
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Options for every facet, in [`Facet::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    options: [Vec<String>; Facet::COUNT],
}

impl FacetOptions {
    pub fn build(records: &[PaperRecord]) -> Self {
        Self {
            options: Facet::ALL.map(|facet| index(records, facet)),
        }
    }

    pub fn get(&self, facet: Facet) -> &[String] {
        &self.options[facet.position()]
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.get(facet).iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
        Facet::ALL
            .into_iter()
            .map(move |facet| (facet, self.get(facet)))
    }

    /// Snapshot for presentation, optionally limited to one facet.
    pub fn entries(&self, only: Option<Facet>) -> Vec<FacetEntry> {
        self.iter()
            .filter(|(facet, _)| only.map_or(true, |wanted| wanted == *facet))
            .map(|(facet, values)| FacetEntry {
                facet,
                key: facet.key(),
                label: facet.label(),
                values: values.to_vec(),
            })
            .collect()
    }
}

/// One filter control: a facet and the values it offers (besides "all").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetEntry {
    pub facet: Facet,
    pub key: &'static str,
    pub label: &'static str,
    pub values: Vec<String>,
}
