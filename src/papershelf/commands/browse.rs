use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::filter::FilterSelection;
use crate::view::{project, ImageResolver, ViewMode};

/// Filters the catalog and projects the matches in `mode`.
///
/// Selected values the catalog never offers are still applied (they match
/// nothing) but are reported as warnings.
pub fn run(
    catalog: &Catalog,
    images: &ImageResolver,
    selection: &FilterSelection,
    mode: ViewMode,
) -> CmdResult {
    let mut result = CmdResult::default();

    for (facet, value) in selection.constraints() {
        if !catalog.options().contains(facet, value) {
            result.add_message(CmdMessage::warning(format!(
                "No paper has {} \"{}\"",
                facet.label(),
                value
            )));
        }
    }

    let matched = catalog.filter(selection);
    let view = project(mode, &matched, images);
    result.add_message(CmdMessage::info(format!(
        "Showing {} of {} papers",
        matched.len(),
        catalog.len()
    )));
    result.with_view(view)
}
