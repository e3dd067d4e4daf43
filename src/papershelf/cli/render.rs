//! # Rendering Module
//!
//! Styled terminal output for views, facet listings and messages, using the
//! `shelfstyle` templates and theme.
//!
//! Layout calculations (column widths, truncation) stay in Rust because they
//! need Unicode-aware processing. Templates only place the pre-computed text
//! and choose styles by name.

use super::styles::{names, SHELF_THEME};
use super::templates::{
    CARDS_TEMPLATE, FACETS_TEMPLATE, HELP_TEMPLATE, MESSAGES_TEMPLATE, NO_RESULTS_TEMPLATE,
    TABLE_TEMPLATE,
};
use papershelf::api::{CmdMessage, MessageLevel};
use papershelf::facets::FacetEntry;
use papershelf::session::INTERACTION_HELP;
use papershelf::view::{Card, RenderedView, Table};
use serde::Serialize;
use shelfstyle::render_with_color;
use unicode_width::UnicodeWidthStr;

/// Widest a table column may grow, by header. Unlisted columns use
/// [`DEFAULT_COLUMN_WIDTH`].
const COLUMN_LIMITS: &[(&str, usize)] = &[
    ("#", 4),
    ("Title", 40),
    ("Authors", 24),
    ("Year", 4),
    ("Venue", 20),
    ("DOI", 48),
];
const DEFAULT_COLUMN_WIDTH: usize = 16;

/// Header of the link column in the terminal table.
pub const LINK_COLUMN: &str = "DOI";

#[derive(Serialize)]
struct CardData {
    index: String,
    title: String,
    meta: String,
    tags: Vec<TagData>,
    image: String,
    link: String,
}

#[derive(Serialize)]
struct TagData {
    text: String,
    style: String,
}

#[derive(Serialize)]
struct CardsData {
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct ColumnData {
    name: String,
    width: usize,
}

#[derive(Serialize)]
struct CellData {
    text: String,
    width: usize,
    style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    cells: Vec<CellData>,
}

#[derive(Serialize)]
struct TableData {
    columns: Vec<ColumnData>,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct FacetsData<'a> {
    facets: &'a [FacetEntry],
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpLine {
    usage: &'static str,
    text: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    lines: Vec<HelpLine>,
    width: usize,
}

#[derive(Serialize)]
struct NoResultsData<'a> {
    message: &'a str,
}

/// Renders a view: cards, a table, or the placeholder line.
pub fn render_view(view: &RenderedView, use_color: bool) -> String {
    match view {
        RenderedView::NoResults { message } => render_no_results(message, use_color),
        RenderedView::Cards { cards } => render_cards(cards, use_color),
        RenderedView::Table { table } => render_table(table, use_color),
    }
}

fn render_no_results(message: &str, use_color: bool) -> String {
    let data = NoResultsData { message };
    let line = render_with_color(NO_RESULTS_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|_| message.to_string());
    format!("{}\n", line)
}

fn render_cards(cards: &[Card], use_color: bool) -> String {
    let data = CardsData {
        cards: cards
            .iter()
            .map(|card| CardData {
                index: format!("{}.", card.binding.position),
                title: if card.title.is_empty() {
                    "(untitled)".to_string()
                } else {
                    card.title.clone()
                },
                meta: card.meta.clone(),
                tags: card
                    .tags
                    .iter()
                    .map(|tag| TagData {
                        text: format!("[{}]", tag.value),
                        style: names::tag(tag.class),
                    })
                    .collect(),
                image: card.image.clone(),
                link: card.binding.target.clone().unwrap_or_default(),
            })
            .collect(),
    };

    render_with_color(CARDS_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_table(table: &Table, use_color: bool) -> String {
    let headers: Vec<&str> = std::iter::once("#")
        .chain(table.columns.iter().copied())
        .chain(std::iter::once(LINK_COLUMN))
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.index.to_string())
                .chain(row.cells.iter().cloned())
                .chain(std::iter::once(row.link.clone().unwrap_or_default()))
                .collect()
        })
        .collect();

    let widths = column_widths(&headers, &rows);

    let data = TableData {
        columns: headers
            .iter()
            .zip(&widths)
            .map(|(name, &width)| ColumnData {
                name: name.to_string(),
                width,
            })
            .collect(),
        rows: rows
            .into_iter()
            .map(|cells| RowData {
                cells: cells
                    .into_iter()
                    .zip(headers.iter().zip(&widths))
                    .map(|(text, (header, &width))| CellData {
                        text,
                        width,
                        style: cell_style(header),
                    })
                    .collect(),
            })
            .collect(),
    };

    render_with_color(TABLE_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Each column is as wide as its widest value (header included), capped by
/// its limit.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0);
            widest.min(column_limit(header).max(header.width()))
        })
        .collect()
}

fn column_limit(header: &str) -> usize {
    COLUMN_LIMITS
        .iter()
        .find(|(name, _)| *name == header)
        .map(|(_, limit)| *limit)
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
}

fn cell_style(header: &str) -> &'static str {
    match header {
        "#" => names::INDEX,
        "Title" => names::TITLE,
        LINK_COLUMN => names::LINK,
        _ => names::CELL,
    }
}

pub fn render_facets(entries: &[FacetEntry], use_color: bool) -> String {
    let data = FacetsData { facets: entries };
    render_with_color(FACETS_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &SHELF_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Usage of the interactive shell.
pub fn render_help(use_color: bool) -> String {
    let width = INTERACTION_HELP
        .iter()
        .map(|(usage, _)| usage.width())
        .max()
        .unwrap_or(0);
    let data = HelpData {
        lines: INTERACTION_HELP
            .iter()
            .map(|&(usage, text)| HelpLine { usage, text })
            .collect(),
        width,
    };
    render_with_color(HELP_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}
