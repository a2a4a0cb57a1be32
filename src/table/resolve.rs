//! Row/column resolution and action dispatch.

use std::collections::HashMap;

use regex::RegexBuilder;
use scraper::{Html, Selector};

use crate::error::{Result, StepkitError};
use crate::table::model::{Cell, Table};
use crate::table::options::{Action, MatchMode, ReturnMode, TableOptions};

/// Result of one resolver invocation. The caller writes `value` and
/// `row_index` into its output mapping under the configured key names and
/// dispatches `side_effect` if present.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Extracted cell value. Absent for `getRowIndex`.
    pub value: Option<String>,
    /// Resolved row index, already converted to the caller's base.
    pub row_index: i64,
    /// Pending DOM interaction for the runner to dispatch.
    pub side_effect: Option<SideEffect>,
}

/// A DOM interaction the resolver prepared but cannot perform itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Click {
        /// Positional CSS selector of the element to click.
        selector: String,
        /// Dispatch `dblclick` instead of a single click.
        double_click: bool,
        /// Best-effort scroll before clicking; dispatch failures here are
        /// cosmetic and must not fail the step.
        scroll_into_view: bool,
    },
}

/// Resolve a cell in the (single) table contained in `html` and perform the
/// configured action. Fails with a descriptive error on any unsatisfiable
/// precondition; never returns partial results.
pub fn resolve(html: &str, opts: &TableOptions) -> Result<Resolution> {
    validate_options(opts)?;
    let table = Table::parse(html)?;

    let found = find_row(&table, opts)?;
    let display_index = to_display_index(found, opts.row_base());

    if opts.action == Action::GetRowIndex {
        return Ok(Resolution {
            value: None,
            row_index: display_index,
            side_effect: None,
        });
    }

    let target_column = opts.target_column.as_deref().unwrap_or_default();
    let tgt_idx = resolve_column(&table, target_column, opts.column_base()).ok_or_else(|| {
        StepkitError::ColumnResolution(format!("targetColumn {:?}", target_column))
    })?;

    let row = &table.rows[found];
    if row.len() <= tgt_idx {
        return Err(StepkitError::ColumnResolution(format!(
            "target column index {} out of range for row with {} cells",
            tgt_idx,
            row.len()
        )));
    }
    let cell = &row[tgt_idx];
    let value = extract_value(cell, opts.return_mode);

    match opts.action {
        Action::Click => {
            let selector = click_selector(cell, opts.click_query.as_deref())?;
            Ok(Resolution {
                value: Some(value),
                row_index: display_index,
                side_effect: Some(SideEffect::Click {
                    selector,
                    double_click: opts.double_click,
                    scroll_into_view: opts.scroll_into_view,
                }),
            })
        }
        Action::Validate => {
            if let Some(expected) = opts.expected_value.as_deref() {
                let mode = opts.effective_expected_match_type();
                if !value_matches(&value, expected, mode, opts.case_insensitive) {
                    return Err(StepkitError::Validation {
                        actual: value,
                        expected: expected.to_string(),
                        match_mode: mode.to_string(),
                    });
                }
            }
            // No expected value: successful extraction alone is success.
            Ok(Resolution {
                value: Some(value),
                row_index: display_index,
                side_effect: None,
            })
        }
        Action::Get => Ok(Resolution {
            value: Some(value),
            row_index: display_index,
            side_effect: None,
        }),
        Action::GetRowIndex => unreachable!("handled before column resolution"),
    }
}

/// Eager parameter guards, checked before any resolution logic runs.
fn validate_options(opts: &TableOptions) -> Result<()> {
    if opts.action != Action::GetRowIndex && opts.target_column.is_none() {
        return Err(StepkitError::MissingParameter(format!(
            "targetColumn is required for action={}",
            opts.action
        )));
    }
    if opts.row_index.is_none() {
        if opts.source_column.is_none() {
            return Err(StepkitError::MissingParameter(
                "sourceColumn is required when rowIndex is not provided".into(),
            ));
        }
        if opts.search_value.is_none() {
            return Err(StepkitError::MissingParameter(
                "searchValue is required to locate the row when rowIndex is not provided".into(),
            ));
        }
    }
    Ok(())
}

/// Locate the target row, returning its zero-based index.
///
/// An explicit `row_index` wins over the search fields; this is intentional
/// precedence, not a validation error.
fn find_row(table: &Table, opts: &TableOptions) -> Result<usize> {
    let rows = &table.rows;

    if let Some(raw) = opts.row_index {
        let base = opts.row_base();
        let idx = if base == 0 { raw } else { raw - 1 };
        if idx < 0 || idx as usize >= rows.len() {
            return Err(StepkitError::RowIndexOutOfRange {
                index: raw,
                rows: rows.len(),
                base,
            });
        }
        return Ok(idx as usize);
    }

    // Guards ran already, so both fields are present in search mode.
    let source_column = opts.source_column.as_deref().unwrap_or_default();
    let search_value = opts.search_value.as_deref().unwrap_or_default();

    let src_idx = resolve_column(table, source_column, opts.column_base()).ok_or_else(|| {
        StepkitError::ColumnResolution(format!("sourceColumn {:?}", source_column))
    })?;

    let mut remaining = opts.effective_occurrence();
    for (i, row) in rows.iter().enumerate() {
        // Rows too short to contain the source column are skipped, not errors.
        let Some(cell) = row.get(src_idx) else {
            continue;
        };
        if value_matches(&cell.text, search_value, opts.match_type, opts.case_insensitive) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(i);
            }
        }
    }

    Err(StepkitError::RowNotFound {
        source_column: source_column.to_string(),
        search_value: search_value.to_string(),
        match_mode: opts.match_type.to_string(),
        occurrence: opts.effective_occurrence(),
    })
}

/// Resolve a column specifier to a zero-based index.
///
/// Numeric specifiers (or numeric strings) are direct indices adjusted by
/// the column base and clamped at zero; they bypass label lookup entirely.
/// Everything else goes through a lookup map built from the header (or, when
/// no header exists, the first body row), keyed by raw `data-col` key,
/// normalized and slugified key, normalized and slugified label, and the
/// positional index as a string.
fn resolve_column(table: &Table, spec: &str, column_base: u8) -> Option<usize> {
    if let Some(idx) = numeric_index(spec, column_base) {
        return Some(idx);
    }

    let mut map: HashMap<String, usize> = HashMap::new();
    let mut add = |key: &str, idx: usize, map: &mut HashMap<String, usize>| {
        if !key.is_empty() {
            map.insert(norm(key), idx);
            map.insert(slug(key), idx);
        }
    };

    if !table.headers.is_empty() {
        for (i, header) in table.headers.iter().enumerate() {
            if let Some(key) = header.data_key.as_deref() {
                add(key, i, &mut map);
            }
            add(&header.label, i, &mut map);
            add(&i.to_string(), i, &mut map);
        }
    } else if let Some(first_row) = table.rows.first() {
        for (i, cell) in first_row.iter().enumerate() {
            if let Some(key) = cell.data_key.as_deref() {
                add(key, i, &mut map);
            }
            add(&i.to_string(), i, &mut map);
        }
    }

    // Raw, normalized, then slugified; first hit wins.
    for candidate in [spec.to_string(), norm(spec), slug(spec)] {
        if let Some(&idx) = map.get(&norm(&candidate)) {
            return Some(idx);
        }
    }
    None
}

/// Numeric (or numeric-string) specifier to a zero-based index, base-adjusted
/// and clamped at zero. `None` when the specifier is not purely digits.
fn numeric_index(spec: &str, column_base: u8) -> Option<usize> {
    let trimmed = spec.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n: i64 = trimmed.parse().ok()?;
    Some((n - column_base as i64).max(0) as usize)
}

/// Compare cell text against a search/expected value.
///
/// Regex mode compiles the value as a pattern (case-insensitivity becomes a
/// regex flag); an invalid pattern fails safe as "no match". The remaining
/// modes normalize both sides when case-insensitive, then do plain
/// substring/prefix/suffix/equality tests.
pub(crate) fn value_matches(
    hay: &str,
    needle: &str,
    mode: MatchMode,
    case_insensitive: bool,
) -> bool {
    if mode == MatchMode::Regex {
        return match RegexBuilder::new(needle)
            .case_insensitive(case_insensitive)
            .build()
        {
            Ok(re) => re.is_match(hay),
            Err(_) => false,
        };
    }

    let (hay, needle) = if case_insensitive {
        (norm(hay), norm(needle))
    } else {
        (hay.to_string(), needle.to_string())
    };

    match mode {
        MatchMode::Includes => hay.contains(&needle),
        MatchMode::Startswith => hay.starts_with(&needle),
        MatchMode::Endswith => hay.ends_with(&needle),
        MatchMode::Exact | MatchMode::Regex => hay == needle,
    }
}

fn extract_value(cell: &Cell, mode: ReturnMode) -> String {
    match mode {
        ReturnMode::Text => cell.text.clone(),
        ReturnMode::Html => cell.html.clone(),
        ReturnMode::Href => cell
            .href
            .clone()
            .unwrap_or_else(|| cell.text.clone()),
    }
}

/// Selector for the click target: the cell itself, or the first element
/// inside it matching `click_query`. An unmatched query falls back to the
/// cell; an unparseable query is a `ClickTarget` error.
fn click_selector(cell: &Cell, click_query: Option<&str>) -> Result<String> {
    let Some(query) = click_query.filter(|q| !q.is_empty()) else {
        return Ok(cell.path.clone());
    };

    let selector = Selector::parse(query).map_err(|_| {
        StepkitError::ClickTarget(format!("invalid click selector {:?}", query))
    })?;

    let fragment = Html::parse_fragment(&cell.html);
    if fragment.select(&selector).next().is_some() {
        Ok(format!("{} {}", cell.path, query))
    } else {
        Ok(cell.path.clone())
    }
}

fn to_display_index(zero_based: usize, row_base: u8) -> i64 {
    if row_base == 0 {
        zero_based as i64
    } else {
        zero_based as i64 + 1
    }
}

fn norm(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Slugify: lowercase with all non-alphanumeric characters stripped, used
/// for fuzzy key matching ("Account Name" -> "accountname").
fn slug(s: &str) -> String {
    norm(s).chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNTS: &str = r#"
    <table>
      <thead>
        <tr>
          <th>Account Name</th>
          <th>Account Site</th>
          <th>Billing State/Province</th>
          <th data-col="phone_number">Phone</th>
          <th>Type</th>
        </tr>
      </thead>
      <tbody>
        <tr><td><a href="/a/1">ABC INC</a></td><td></td><td>California</td><td>11111</td><td>Direct</td></tr>
        <tr><td>EFG INC</td><td></td><td>Kanzas</td><td>22222</td><td>Direct</td></tr>
        <tr><td>HIJ INC</td><td></td><td>Oregon</td><td>33333</td><td>Direct</td></tr>
      </tbody>
    </table>
    "#;

    fn search_opts(source: &str, value: &str, target: &str) -> TableOptions {
        TableOptions {
            source_column: Some(source.to_string()),
            search_value: Some(value.to_string()),
            target_column: Some(target.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn worked_example_phone_search_returns_account_name() {
        let res = resolve(ACCOUNTS, &search_opts("Phone", "22222", "Account Name")).unwrap();
        assert_eq!(res.value.as_deref(), Some("EFG INC"));
        assert_eq!(res.row_index, 2); // 1-based by default
        assert!(res.side_effect.is_none());
    }

    #[test]
    fn column_resolves_by_label_normalized_label_and_index_identically() {
        for target in ["Account Name", "  account name  ", "accountname", "0"] {
            let res = resolve(ACCOUNTS, &search_opts("Phone", "22222", target)).unwrap();
            assert_eq!(res.value.as_deref(), Some("EFG INC"), "target={target:?}");
        }
    }

    #[test]
    fn column_resolves_by_data_col_key() {
        let res = resolve(ACCOUNTS, &search_opts("phone_number", "33333", "phonenumber")).unwrap();
        assert_eq!(res.value.as_deref(), Some("33333"));
        assert_eq!(res.row_index, 3);
    }

    #[test]
    fn numeric_specifier_bypasses_label_lookup_and_honors_base() {
        // Base 1: "1" means the first column.
        let opts = TableOptions {
            column_index_base: 1,
            ..search_opts("4", "22222", "1")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.value.as_deref(), Some("EFG INC"));
    }

    #[test]
    fn unresolvable_target_column_fails_never_returns_empty() {
        let err = resolve(ACCOUNTS, &search_opts("Phone", "22222", "NoSuchColumn")).unwrap_err();
        assert!(matches!(err, StepkitError::ColumnResolution(_)));
    }

    #[test]
    fn explicit_row_index_wins_over_search_fields() {
        let opts = TableOptions {
            row_index: Some(1),
            ..search_opts("Phone", "33333", "Account Name")
        };
        // Search fields point at row 3, explicit index at row 1.
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.value.as_deref(), Some("ABC INC"));
        assert_eq!(res.row_index, 1);
    }

    #[test]
    fn row_bases_differ_by_exactly_one_for_the_same_row() {
        let base1 = resolve(ACCOUNTS, &search_opts("Phone", "22222", "Phone")).unwrap();
        let base0 = resolve(
            ACCOUNTS,
            &TableOptions {
                row_index_base: 0,
                ..search_opts("Phone", "22222", "Phone")
            },
        )
        .unwrap();
        assert_eq!(base1.row_index - base0.row_index, 1);
    }

    #[test]
    fn explicit_index_is_interpreted_in_the_configured_base() {
        let base0 = TableOptions {
            row_index: Some(0),
            row_index_base: 0,
            target_column: Some("0".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(ACCOUNTS, &base0).unwrap().value.as_deref(),
            Some("ABC INC")
        );

        let base1 = TableOptions {
            row_index: Some(1),
            target_column: Some("0".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(ACCOUNTS, &base1).unwrap().value.as_deref(),
            Some("ABC INC")
        );
    }

    #[test]
    fn out_of_range_row_index_reports_count_and_base() {
        let opts = TableOptions {
            row_index: Some(9),
            target_column: Some("Phone".into()),
            ..Default::default()
        };
        let err = resolve(ACCOUNTS, &opts).unwrap_err();
        assert!(matches!(
            err,
            StepkitError::RowIndexOutOfRange { index: 9, rows: 3, base: 1 }
        ));
    }

    #[test]
    fn occurrence_selects_the_kth_match_in_document_order() {
        let opts = TableOptions {
            match_type: MatchMode::Includes,
            occurrence: 2,
            ..search_opts("Type", "direct", "Account Name")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.value.as_deref(), Some("EFG INC"));
        assert_eq!(res.row_index, 2);
    }

    #[test]
    fn insufficient_occurrences_is_row_not_found() {
        let opts = TableOptions {
            match_type: MatchMode::Includes,
            occurrence: 9,
            ..search_opts("Type", "Direct", "Account Name")
        };
        let err = resolve(ACCOUNTS, &opts).unwrap_err();
        assert!(matches!(
            err,
            StepkitError::RowNotFound { occurrence: 9, .. }
        ));
    }

    #[test]
    fn no_match_reports_the_search_parameters() {
        let err = resolve(ACCOUNTS, &search_opts("Phone", "99999", "Account Name")).unwrap_err();
        match err {
            StepkitError::RowNotFound {
                source_column,
                search_value,
                match_mode,
                occurrence,
            } => {
                assert_eq!(source_column, "Phone");
                assert_eq!(search_value, "99999");
                assert_eq!(match_mode, "exact");
                assert_eq!(occurrence, 1);
            }
            other => panic!("expected RowNotFound, got {other:?}"),
        }
    }

    #[test]
    fn match_modes_cover_substring_prefix_suffix() {
        assert!(value_matches("ABC INC", "abc", MatchMode::Startswith, true));
        assert!(!value_matches("ABC INC", "abc", MatchMode::Startswith, false));
        assert!(value_matches("ABC INC", "INC", MatchMode::Endswith, false));
        assert!(value_matches("ABC INC", "C I", MatchMode::Includes, true));
        assert!(value_matches("  ABC INC ", "abc inc", MatchMode::Exact, true));
    }

    #[test]
    fn regex_mode_maps_case_insensitivity_to_a_flag() {
        assert!(value_matches("ABC INC", "^abc", MatchMode::Regex, true));
        assert!(!value_matches("ABC INC", "^abc", MatchMode::Regex, false));
    }

    #[test]
    fn invalid_regex_pattern_fails_safe_as_no_match() {
        let opts = TableOptions {
            match_type: MatchMode::Regex,
            ..search_opts("Phone", "(unclosed", "Account Name")
        };
        let err = resolve(ACCOUNTS, &opts).unwrap_err();
        assert!(matches!(err, StepkitError::RowNotFound { .. }));
    }

    #[test]
    fn get_row_index_skips_column_resolution() {
        let opts = TableOptions {
            action: Action::GetRowIndex,
            target_column: None,
            ..search_opts("Phone", "33333", "unused")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.row_index, 3);
        assert!(res.value.is_none());
    }

    #[test]
    fn target_column_is_required_for_other_actions() {
        let opts = TableOptions {
            source_column: Some("Phone".into()),
            search_value: Some("22222".into()),
            ..Default::default()
        };
        let err = resolve(ACCOUNTS, &opts).unwrap_err();
        assert!(matches!(err, StepkitError::MissingParameter(_)));
    }

    #[test]
    fn search_fields_are_required_without_explicit_row_index() {
        let missing_value = TableOptions {
            source_column: Some("Phone".into()),
            target_column: Some("0".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(ACCOUNTS, &missing_value).unwrap_err(),
            StepkitError::MissingParameter(_)
        ));

        let missing_column = TableOptions {
            search_value: Some("22222".into()),
            target_column: Some("0".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(ACCOUNTS, &missing_column).unwrap_err(),
            StepkitError::MissingParameter(_)
        ));
    }

    #[test]
    fn validate_without_expected_value_succeeds_on_extraction() {
        let opts = TableOptions {
            action: Action::Validate,
            ..search_opts("Phone", "22222", "Account Name")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.value.as_deref(), Some("EFG INC"));
    }

    #[test]
    fn validate_mismatch_carries_actual_and_expected() {
        let opts = TableOptions {
            action: Action::Validate,
            expected_value: Some("XYZ CORP".into()),
            ..search_opts("Phone", "22222", "Account Name")
        };
        match resolve(ACCOUNTS, &opts).unwrap_err() {
            StepkitError::Validation {
                actual,
                expected,
                match_mode,
            } => {
                assert_eq!(actual, "EFG INC");
                assert_eq!(expected, "XYZ CORP");
                assert_eq!(match_mode, "exact");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn validate_uses_separately_configured_expected_match_type() {
        let opts = TableOptions {
            action: Action::Validate,
            expected_value: Some("EFG".into()),
            expected_match_type: Some(MatchMode::Startswith),
            ..search_opts("Phone", "22222", "Account Name")
        };
        assert!(resolve(ACCOUNTS, &opts).is_ok());
    }

    #[test]
    fn click_example_targets_second_cell_of_first_row() {
        // rowIndex=0 base 0, targetColumn=1 (base 0): second cell, first row.
        let opts = TableOptions {
            action: Action::Click,
            row_index: Some(0),
            row_index_base: 0,
            target_column: Some("1".into()),
            ..Default::default()
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        assert_eq!(res.row_index, 0);
        assert_eq!(res.value.as_deref(), Some("")); // empty Account Site cell
        match res.side_effect.unwrap() {
            SideEffect::Click {
                selector,
                double_click,
                scroll_into_view,
            } => {
                assert_eq!(selector, "table > tbody > tr:nth-child(1) > td:nth-child(2)");
                assert!(!double_click);
                assert!(scroll_into_view);
            }
        }
    }

    #[test]
    fn click_query_narrows_to_inner_element_when_matched() {
        let opts = TableOptions {
            action: Action::Click,
            click_query: Some("a".into()),
            double_click: true,
            ..search_opts("Phone", "11111", "Account Name")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        match res.side_effect.unwrap() {
            SideEffect::Click {
                selector,
                double_click,
                ..
            } => {
                assert_eq!(selector, "table > tbody > tr:nth-child(1) > td:nth-child(1) a");
                assert!(double_click);
            }
        }
    }

    #[test]
    fn unmatched_click_query_falls_back_to_the_cell() {
        let opts = TableOptions {
            action: Action::Click,
            click_query: Some("button".into()),
            ..search_opts("Phone", "22222", "Account Name")
        };
        let res = resolve(ACCOUNTS, &opts).unwrap();
        match res.side_effect.unwrap() {
            SideEffect::Click { selector, .. } => {
                assert_eq!(selector, "table > tbody > tr:nth-child(2) > td:nth-child(1)");
            }
        }
    }

    #[test]
    fn unparseable_click_query_is_a_click_target_error() {
        let opts = TableOptions {
            action: Action::Click,
            click_query: Some(":::".into()),
            ..search_opts("Phone", "22222", "Account Name")
        };
        assert!(matches!(
            resolve(ACCOUNTS, &opts).unwrap_err(),
            StepkitError::ClickTarget(_)
        ));
    }

    #[test]
    fn return_modes_extract_text_html_and_href() {
        let text = resolve(ACCOUNTS, &search_opts("Phone", "11111", "Account Name")).unwrap();
        assert_eq!(text.value.as_deref(), Some("ABC INC"));

        let html = resolve(
            ACCOUNTS,
            &TableOptions {
                return_mode: ReturnMode::Html,
                ..search_opts("Phone", "11111", "Account Name")
            },
        )
        .unwrap();
        assert!(html.value.unwrap().contains(r#"<a href="/a/1">"#));

        let href = resolve(
            ACCOUNTS,
            &TableOptions {
                return_mode: ReturnMode::Href,
                ..search_opts("Phone", "11111", "Account Name")
            },
        )
        .unwrap();
        assert_eq!(href.value.as_deref(), Some("/a/1"));

        // No link: href falls back to text.
        let fallback = resolve(
            ACCOUNTS,
            &TableOptions {
                return_mode: ReturnMode::Href,
                ..search_opts("Phone", "22222", "Account Name")
            },
        )
        .unwrap();
        assert_eq!(fallback.value.as_deref(), Some("EFG INC"));
    }

    #[test]
    fn headerless_table_resolves_columns_by_data_col_of_first_row() {
        let html = r#"
        <table><tbody>
          <tr><td data-col="name">ABC INC</td><td data-col="phone">11111</td></tr>
          <tr><td>EFG INC</td><td>22222</td></tr>
        </tbody></table>
        "#;
        let opts = search_opts("phone", "22222", "name");
        let res = resolve(html, &opts).unwrap();
        assert_eq!(res.value.as_deref(), Some("EFG INC"));
    }

    #[test]
    fn short_rows_are_skipped_during_search() {
        let html = r#"
        <table>
          <thead><tr><th>A</th><th>B</th></tr></thead>
          <tbody>
            <tr><td>only-one-cell</td></tr>
            <tr><td>x</td><td>hit</td></tr>
          </tbody>
        </table>
        "#;
        let res = resolve(html, &search_opts("B", "hit", "A")).unwrap();
        assert_eq!(res.value.as_deref(), Some("x"));
        assert_eq!(res.row_index, 2);
    }

    #[test]
    fn target_cell_out_of_range_is_an_error_not_a_default() {
        let html = r#"
        <table>
          <thead><tr><th>A</th><th>B</th></tr></thead>
          <tbody><tr><td>solo</td></tr></tbody>
        </table>
        "#;
        let opts = TableOptions {
            row_index: Some(1),
            target_column: Some("B".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(html, &opts).unwrap_err(),
            StepkitError::ColumnResolution(_)
        ));
    }
}
