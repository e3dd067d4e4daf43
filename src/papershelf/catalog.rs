//! The load-once catalog: the only owner of paper records for a session.
//!
//! A [`Catalog`] is built from a [`CatalogSource`] exactly once. Facet options
//! are computed at the same time and never again. Everything downstream
//! (filtering, projection, sessions) borrows the catalog; nothing mutates it.

use crate::error::Result;
use crate::facets::FacetOptions;
use crate::filter::{filter, FilterSelection};
use crate::model::PaperRecord;
use crate::store::CatalogSource;
use tracing::{debug, error};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PaperRecord>,
    options: FacetOptions,
}

impl Catalog {
    pub fn new(records: Vec<PaperRecord>) -> Self {
        let options = FacetOptions::build(&records);
        Self { records, options }
    }

    /// An empty catalog: no records, no options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the catalog, propagating source errors.
    pub fn load<S: CatalogSource>(source: &S) -> Result<Self> {
        let records = source.load()?;
        debug!(source = %source.describe(), records = records.len(), "catalog loaded");
        Ok(Self::new(records))
    }

    /// Loads the catalog, logging a failure and falling back to an empty catalog.
    ///
    /// A failed load leaves the browser in its empty initial state; the error
    /// goes to the log only.
    pub fn load_or_empty<S: CatalogSource>(source: &S) -> Self {
        match Self::load(source) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(source = %source.describe(), error = %e, "failed to load catalog");
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `selection`, in catalog order.
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&PaperRecord> {
        let matched = filter(&self.records, selection);
        debug!(%selection, matched = matched.len(), total = self.len(), "filter applied");
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::model::Facet;
    use crate::store::memory::InMemorySource;

    fn paper(title: &str, material: &str) -> PaperRecord {
        PaperRecord {
            title: Some(title.into()),
            material: Some(material.into()),
            ..Default::default()
        }
    }

    #[test]
    fn options_are_built_at_load() {
        let source = InMemorySource::new(vec![paper("A", "PET"), paper("B", "Paper")]);
        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.options().get(Facet::Material), ["PET", "Paper"]);
    }

    #[test]
    fn options_ignore_the_current_selection() {
        let catalog = Catalog::new(vec![paper("A", "PET"), paper("B", "Paper")]);
        let selection =
            FilterSelection::new().with(Facet::Material, Selection::Value("PET".into()));
        assert_eq!(catalog.filter(&selection).len(), 1);
        assert_eq!(catalog.options().get(Facet::Material).len(), 2);
    }

    #[test]
    fn failed_load_yields_empty_catalog() {
        let source = InMemorySource::failing("network unreachable");
        assert!(Catalog::load(&source).is_err());

        let catalog = Catalog::load_or_empty(&source);
        assert!(catalog.is_empty());
        for (_, values) in catalog.options().iter() {
            assert!(values.is_empty());
        }
    }
}
