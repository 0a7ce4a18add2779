// src/extract/mod.rs

mod raw_table;

pub use raw_table::RawTable;

use anyhow::Result;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector should parse"));

/// Upper bound on `colspan` so a hostile attribute can't blow up a row.
const MAX_COLSPAN: usize = 1_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no <table> element found in document")]
    NoTables,
}

/// Parse `html` and return the first `<table>` as a [`RawTable`].
///
/// Header labels come from `<thead>`, or from leading rows made only of
/// `<th>` cells when there is no `<thead>`. Every other row owned by the
/// table (rows of nested tables excluded) is data. Cells spanning several
/// columns are repeated, short rows are padded with empty cells.
#[instrument(level = "info", skip(html), fields(bytes = html.len()))]
pub fn extract_first_table(html: &str) -> Result<RawTable> {
    let doc = Html::parse_document(html);
    let tables: Vec<ElementRef> = doc.select(&TABLE).collect();
    debug!(count = tables.len(), "found tables");

    let table = tables.first().copied().ok_or(ExtractError::NoTables)?;
    let table = table_from_element(table);
    info!(
        columns = table.width(),
        rows = table.rows.len(),
        "extracted first table"
    );
    Ok(table)
}

enum Section {
    Head,
    Body,
}

fn table_from_element(table: ElementRef<'_>) -> RawTable {
    let mut head_rows: Vec<Vec<String>> = Vec::new();
    let mut body_rows: Vec<(bool, Vec<String>)> = Vec::new();

    for (section, tr) in direct_rows(table) {
        let (all_th, cells) = row_cells(tr);
        match section {
            Section::Head => head_rows.push(cells),
            Section::Body => body_rows.push((all_th, cells)),
        }
    }

    // No <thead>: leading all-<th> rows act as the header.
    if head_rows.is_empty() {
        let leading = body_rows
            .iter()
            .take_while(|(all_th, cells)| *all_th && !cells.is_empty())
            .count();
        head_rows = body_rows.drain(..leading).map(|(_, cells)| cells).collect();
    }

    let mut headers = head_rows.pop().unwrap_or_default();
    let mut rows: Vec<Vec<String>> = body_rows
        .into_iter()
        .map(|(_, cells)| cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    let width = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    headers.resize(width, String::new());
    for row in &mut rows {
        row.resize(width, String::new());
    }

    RawTable { headers, rows }
}

/// `<tr>` elements belonging to `table` itself, tagged by section.
fn direct_rows<'a>(table: ElementRef<'a>) -> Vec<(Section, ElementRef<'a>)> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => out.extend(child_rows(child).map(|tr| (Section::Head, tr))),
            "tbody" | "tfoot" => out.extend(child_rows(child).map(|tr| (Section::Body, tr))),
            "tr" => out.push((Section::Body, child)),
            _ => {}
        }
    }
    out
}

fn child_rows<'a>(section: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
}

/// Cell texts of one row, plus whether every cell was a `<th>`.
fn row_cells(tr: ElementRef<'_>) -> (bool, Vec<String>) {
    let mut all_th = true;
    let mut cells = Vec::new();
    for cell in tr.children().filter_map(ElementRef::wrap) {
        let name = cell.value().name();
        if name != "td" && name != "th" {
            continue;
        }
        all_th &= name == "th";
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_COLSPAN);
        let text = cell_text(cell);
        cells.extend(std::iter::repeat(text).take(span));
    }
    (all_th, cells)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
