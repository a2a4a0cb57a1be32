//! Owned table model materialized from HTML.
//!
//! The resolver never works against a live page, so the table is parsed once
//! into plain owned data: header cells (label + optional `data-col` key) and
//! body rows of cells. Each cell keeps a positional CSS path so a click
//! side effect can be handed back to the runner as a selector.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, StepkitError};

/// A header cell: visible label plus the optional structured `data-col` key.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub label: String,
    pub data_key: Option<String>,
}

/// A body cell with everything the resolver can extract from it.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Whitespace-collapsed visible text.
    pub text: String,
    /// Raw inner markup.
    pub html: String,
    /// `href` of the first contained link, if any.
    pub href: Option<String>,
    /// `data-col` attribute, if any.
    pub data_key: Option<String>,
    /// Positional CSS path from the table root, e.g.
    /// `table > tbody > tr:nth-child(2) > td:nth-child(4)`.
    pub path: String,
}

/// A table materialized from HTML: ordered headers and ordered rows.
/// Rows may have varying cell counts.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parse an HTML document or fragment that is (or contains) exactly one
    /// `<table>`. Zero or multiple tables fail with `InvalidTarget`.
    pub fn parse(html: &str) -> Result<Self> {
        let doc = Html::parse_document(html);
        let table_sel = Selector::parse("table").unwrap();

        let mut tables = doc.select(&table_sel);
        let table = tables
            .next()
            .ok_or_else(|| StepkitError::InvalidTarget("no <table> found in input".into()))?;
        let extra = tables.count();
        if extra > 0 {
            return Err(StepkitError::InvalidTarget(format!(
                "expected exactly one <table>, found {}",
                extra + 1
            )));
        }

        let th_sel = Selector::parse("thead th").unwrap();
        let headers = table
            .select(&th_sel)
            .map(|th| HeaderCell {
                label: collapse_ws(&th.text().collect::<String>()),
                data_key: th.value().attr("data-col").map(str::to_string),
            })
            .collect();

        // Body rows: prefer tbody (the HTML parser inserts one for bare
        // <table><tr> markup), otherwise every tr outside thead.
        let tbody_tr_sel = Selector::parse("tbody tr").unwrap();
        let tr_sel = Selector::parse("tr").unwrap();
        let mut body_rows: Vec<ElementRef<'_>> = table.select(&tbody_tr_sel).collect();
        if body_rows.is_empty() {
            body_rows = table
                .select(&tr_sel)
                .filter(|tr| !in_thead(tr))
                .collect();
        }

        let rows = body_rows
            .iter()
            .map(|tr| {
                tr.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| matches!(el.value().name(), "td" | "th"))
                    .map(|el| parse_cell(&el, tr))
                    .collect()
            })
            .collect();

        Ok(Table { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn parse_cell(el: &ElementRef<'_>, tr: &ElementRef<'_>) -> Cell {
    let link_sel = Selector::parse("a[href]").unwrap();
    let href = el
        .select(&link_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .filter(|h| !h.is_empty())
        .map(str::to_string);

    Cell {
        text: collapse_ws(&el.text().collect::<String>()),
        html: el.inner_html(),
        href,
        data_key: el.value().attr("data-col").map(str::to_string),
        path: cell_path(el, tr),
    }
}

/// Positional CSS path for a cell, rooted at the (unique) table element.
fn cell_path(cell: &ElementRef<'_>, tr: &ElementRef<'_>) -> String {
    let row_pos = element_position(tr);
    let cell_pos = element_position(cell);
    let cell_tag = cell.value().name();

    match tr.parent().and_then(ElementRef::wrap) {
        Some(parent) if parent.value().name() != "table" => format!(
            "table > {} > tr:nth-child({}) > {}:nth-child({})",
            parent.value().name(),
            row_pos,
            cell_tag,
            cell_pos
        ),
        _ => format!(
            "table > tr:nth-child({}) > {}:nth-child({})",
            row_pos, cell_tag, cell_pos
        ),
    }
}

/// 1-based position among element siblings (CSS nth-child semantics).
fn element_position(el: &ElementRef<'_>) -> usize {
    el.prev_siblings()
        .filter(|n| n.value().is_element())
        .count()
        + 1
}

fn in_thead(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "thead")
}

/// Trim and collapse runs of whitespace to single spaces.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
