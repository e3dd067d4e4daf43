use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::model::Facet;

/// The options each filter control offers, optionally for a single facet.
pub fn run(catalog: &Catalog, only: Option<Facet>) -> CmdResult {
    CmdResult::default().with_facets(catalog.options().entries(only))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaperRecord;

    #[test]
    fn lists_every_facet_in_order() {
        let catalog = Catalog::new(vec![PaperRecord {
            origami_or_kirigami: Some("Kirigami".into()),
            output: Some("Shape change".into()),
            ..Default::default()
        }]);
        let result = run(&catalog, None);
        let keys: Vec<_> = result.facets.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec!["origami", "material", "manufacturing", "input", "output", "function"]
        );
        assert_eq!(result.facets[0].values, vec!["Kirigami"]);
        assert!(result.facets[1].values.is_empty());
    }

    #[test]
    fn empty_catalog_lists_empty_options() {
        let result = run(&Catalog::empty(), None);
        assert_eq!(result.facets.len(), Facet::COUNT);
        assert!(result.facets.iter().all(|e| e.values.is_empty()));
    }

    #[test]
    fn single_facet() {
        let result = run(&Catalog::empty(), Some(Facet::Function));
        assert_eq!(result.facets.len(), 1);
        assert_eq!(result.facets[0].label, "Function");
    }
}
