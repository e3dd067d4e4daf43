use super::{Binding, RenderedView, ViewMode, ViewProjector};
use crate::index::DisplayRecord;
use crate::model::{Facet, PaperRecord};
use serde::Serialize;

/// Headers of the data columns, in cell order. The index and link columns
/// are not part of the cells.
pub const TABLE_COLUMNS: [&str; 10] = [
    "Title",
    "Authors",
    "Year",
    "Venue",
    "Origami/Kirigami",
    "Material",
    "Manufacturing",
    "Input",
    "Output",
    "Function",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub binding: Binding,
    pub index: usize,
    /// One cell per entry of [`TABLE_COLUMNS`]; absent values are empty.
    pub cells: Vec<String>,
    /// The explicit link control, when the record has a DOI.
    pub link: Option<String>,
}

pub struct TableProjector;

impl ViewProjector for TableProjector {
    fn mode(&self) -> ViewMode {
        ViewMode::Table
    }

    fn project_units(&self, records: &[DisplayRecord<'_>]) -> RenderedView {
        RenderedView::Table {
            table: Table {
                columns: TABLE_COLUMNS.to_vec(),
                rows: records.iter().map(row).collect(),
            },
        }
    }
}

fn row(display: &DisplayRecord<'_>) -> TableRow {
    TableRow {
        binding: Binding::for_record(display),
        index: display.position,
        cells: cells(display.record),
        link: display.record.doi.clone(),
    }
}

fn cells(record: &PaperRecord) -> Vec<String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut cells = vec![
        text(&record.title),
        text(&record.authors),
        text(&record.year),
        text(&record.venue),
    ];
    cells.extend(
        Facet::ALL
            .into_iter()
            .map(|facet| record.facet(facet).unwrap_or_default().to_string()),
    );
    cells
}
