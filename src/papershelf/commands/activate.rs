use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filter::FilterSelection;
use crate::view::{project, ImageResolver, ViewMode};

/// Resolves the DOI bound to unit `position` of the view `selection` produces.
pub fn run(
    catalog: &Catalog,
    images: &ImageResolver,
    selection: &FilterSelection,
    mode: ViewMode,
    position: usize,
) -> Result<CmdResult> {
    let matched = catalog.filter(selection);
    let view = project(mode, &matched, images);

    let binding = view.activate(position).ok_or_else(|| {
        ShelfError::Activation(format!(
            "no paper #{} in the current view ({} shown)",
            position,
            view.len()
        ))
    })?;
    let target = binding
        .target
        .clone()
        .ok_or_else(|| ShelfError::Activation(format!("paper #{} has no DOI link", position)))?;

    let title = matched[position - 1].label();
    let mut result = CmdResult::default().with_target(target.clone());
    result.add_message(CmdMessage::success(format!(
        "Opening #{} {}: {}",
        position, title, target
    )));
    Ok(result)
}
