//! Static HTML page for a filtered view.
//!
//! The page mirrors the browser layout: six filter controls listing `all` plus
//! every option (the exported selection is pre-selected), a reset control, and
//! the results area holding cards, a table, or the placeholder paragraph. The
//! controls describe the snapshot; the page itself does no filtering.

use super::templates::{PAGE_TEMPLATE, PAGE_TEMPLATE_NAME};
use papershelf::browser::is_openable;
use papershelf::error::{Result, ShelfError};
use papershelf::facets::FacetOptions;
use papershelf::filter::{FilterSelection, NO_CONSTRAINT};
use papershelf::model::Facet;
use papershelf::view::{Card, RenderedView, Table};
use serde::Serialize;
use shelfstyle::{Renderer, Theme};

pub const PAGE_TITLE: &str = "Origami & Kirigami Engineering Papers";

#[derive(Serialize)]
struct PageData {
    title: &'static str,
    summary: String,
    filters: Vec<FilterControl>,
    mode: &'static str,
    cards: Vec<PageCard>,
    columns: Vec<&'static str>,
    rows: Vec<PageRow>,
    message: String,
}

#[derive(Serialize)]
struct FilterControl {
    key: &'static str,
    label: &'static str,
    options: Vec<FilterOption>,
}

#[derive(Serialize)]
struct FilterOption {
    value: String,
    selected: bool,
}

#[derive(Serialize)]
struct PageCard {
    title: String,
    meta: String,
    image: String,
    fallback: String,
    link: String,
    tags: Vec<PageTag>,
}

#[derive(Serialize)]
struct PageTag {
    class: &'static str,
    value: String,
}

#[derive(Serialize)]
struct PageRow {
    index: usize,
    cells: Vec<String>,
    link: String,
}

/// Renders `view` as a complete HTML document.
pub fn render_page(
    view: &RenderedView,
    options: &FacetOptions,
    selection: &FilterSelection,
    total: usize,
) -> Result<String> {
    let mut data = PageData {
        title: PAGE_TITLE,
        summary: format!("Showing {} of {} papers", view.len(), total),
        filters: filter_controls(options, selection),
        mode: "empty",
        cards: Vec::new(),
        columns: Vec::new(),
        rows: Vec::new(),
        message: String::new(),
    };

    match view {
        RenderedView::NoResults { message } => data.message = message.clone(),
        RenderedView::Cards { cards } => {
            data.mode = "cards";
            data.cards = cards.iter().map(page_card).collect();
        }
        RenderedView::Table { table } => {
            data.mode = "table";
            data.columns = table.columns.clone();
            data.rows = page_rows(table);
        }
    }

    let mut renderer = Renderer::with_color(Theme::new(), false);
    renderer
        .add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .map_err(|e| ShelfError::Render(e.to_string()))?;
    renderer
        .render(PAGE_TEMPLATE_NAME, &data)
        .map_err(|e| ShelfError::Render(e.to_string()))
}

fn filter_controls(options: &FacetOptions, selection: &FilterSelection) -> Vec<FilterControl> {
    Facet::ALL
        .into_iter()
        .map(|facet| {
            let chosen = selection.get(facet).as_str();
            let values = options.get(facet).iter().map(String::as_str);
            let mut choices: Vec<FilterOption> = std::iter::once(NO_CONSTRAINT)
                .chain(values)
                .map(|value| FilterOption {
                    value: value.to_string(),
                    selected: value == chosen,
                })
                .collect();
            // A selected value the catalog does not offer still shows as chosen.
            if !choices.iter().any(|choice| choice.selected) {
                choices.push(FilterOption {
                    value: chosen.to_string(),
                    selected: true,
                });
            }
            FilterControl {
                key: facet.key(),
                label: facet.label(),
                options: choices,
            }
        })
        .collect()
}

fn web_link(target: Option<&String>) -> String {
    target
        .filter(|link| is_openable(link))
        .cloned()
        .unwrap_or_default()
}

fn page_card(card: &Card) -> PageCard {
    PageCard {
        title: card.title.clone(),
        meta: card.meta.clone(),
        image: card.image.clone(),
        fallback: card.fallback_image.clone(),
        link: web_link(card.binding.target.as_ref()),
        tags: card
            .tags
            .iter()
            .map(|tag| PageTag {
                class: tag.class,
                value: tag.value.clone(),
            })
            .collect(),
    }
}

fn page_rows(table: &Table) -> Vec<PageRow> {
    table
        .rows
        .iter()
        .map(|row| PageRow {
            index: row.index,
            cells: row.cells.clone(),
            link: web_link(row.link.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use papershelf::catalog::Catalog;
    use papershelf::filter::Selection;
    use papershelf::model::PaperRecord;
    use papershelf::view::{project, ImageResolver, ViewMode};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            PaperRecord {
                title: Some("Folding <robots>".into()),
                authors: Some("Rus, Tolley".into()),
                year: Some("2018".into()),
                venue: Some("Nature".into()),
                origami_or_kirigami: Some("Origami".into()),
                material: Some("PET".into()),
                doi: Some("https://doi.org/10.1/a".into()),
                image_ref: Some("images/robots.jpg".into()),
                ..Default::default()
            },
            PaperRecord {
                title: Some("Cut sheets".into()),
                origami_or_kirigami: Some("Kirigami".into()),
                material: Some("Paper".into()),
                doi: Some("javascript:alert(1)".into()),
                ..Default::default()
            },
        ])
    }

    fn page(catalog: &Catalog, selection: &FilterSelection, mode: ViewMode) -> String {
        let matched = catalog.filter(selection);
        let view = project(mode, &matched, &ImageResolver::new());
        render_page(&view, catalog.options(), selection, catalog.len()).unwrap()
    }

    #[test]
    fn card_page_has_controls_cards_and_links() {
        let catalog = catalog();
        let html = page(&catalog, &FilterSelection::new(), ViewMode::Card);

        assert!(html.starts_with("<!DOCTYPE html>"));
        for facet in Facet::ALL {
            assert!(html.contains(&format!("id=\"{}-filter\"", facet.key())));
        }
        assert!(html.contains("<option value=\"all\" selected>all</option>"));
        assert!(html.contains("id=\"reset-button\""));
        assert!(html.contains("class=\"paper-card\" href=\"https:"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("<span class=\"tag origami-type\">Origami</span>"));
        assert!(html.contains("Rus et al. | 2018 | Nature"));
        assert!(html.contains("data-fallback=\"images"));
        assert!(html.contains("Showing 2 of 2 papers"));
    }

    #[test]
    fn text_is_escaped() {
        let html = page(&catalog(), &FilterSelection::new(), ViewMode::Card);
        assert!(html.contains("Folding &lt;robots&gt;"));
        assert!(!html.contains("<robots>"));
    }

    #[test]
    fn non_web_targets_are_not_linked() {
        let html = page(&catalog(), &FilterSelection::new(), ViewMode::Table);
        assert!(!html.contains("javascript:"));
        assert_eq!(html.matches(">Link</a>").count(), 1);
    }

    #[test]
    fn table_page_lists_rows() {
        let html = page(&catalog(), &FilterSelection::new(), ViewMode::Table);
        assert!(html.contains("<th>Origami/Kirigami</th>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(!html.contains("paper-card\""));
    }

    #[test]
    fn linked_table_rows_open_their_target() {
        let html = page(&catalog(), &FilterSelection::new(), ViewMode::Table);
        assert_eq!(html.matches("<tr class=\"paper-row\"").count(), 1);
        assert!(html.contains("<tr class=\"paper-row\" data-href=\"https:"));
        assert!(html.contains("onclick=\"window.open(this.dataset.href,'_blank')\""));
        // The second row's target is not a web link, so the row stays inert.
        assert!(html.contains("<tr>\n      <td>2</td>"));
    }

    #[test]
    fn selection_is_preselected() {
        let catalog = catalog();
        let selection = FilterSelection::new().with(Facet::Material, Selection::parse("PET"));
        let html = page(&catalog, &selection, ViewMode::Card);
        assert!(html.contains("<option value=\"PET\" selected>PET</option>"));
        assert!(html.contains("<option value=\"Paper\">Paper</option>"));
        assert!(html.contains("Showing 1 of 2 papers"));
    }

    #[test]
    fn empty_result_is_placeholder_paragraph() {
        let catalog = catalog();
        let selection = FilterSelection::new()
            .with(Facet::Material, Selection::parse("PET"))
            .with(Facet::OrigamiOrKirigami, Selection::parse("Kirigami"));
        let html = page(&catalog, &selection, ViewMode::Table);
        assert!(html.contains("<p class=\"no-results\">No matching papers found.</p>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn unknown_selected_value_still_shows() {
        let catalog = catalog();
        let selection = FilterSelection::new().with(Facet::Input, Selection::parse("Steam"));
        let html = page(&catalog, &selection, ViewMode::Card);
        assert!(html.contains("<option value=\"Steam\" selected>Steam</option>"));
    }
}
