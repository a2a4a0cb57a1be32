use clap::ValueEnum;
use serde::Deserialize;

/// What to do with the resolved cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Extract the cell value.
    Get,
    /// Extract and compare against an expected value.
    Validate,
    /// Prepare a click on the cell (or an element inside it).
    Click,
    /// Report only the resolved row index.
    #[serde(alias = "getRowIndex", alias = "get-row-index")]
    GetRowIndex,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Get => "get",
            Action::Validate => "validate",
            Action::Click => "click",
            Action::GetRowIndex => "getRowIndex",
        };
        f.write_str(s)
    }
}

/// How a search value (or expected value) is compared against cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    Includes,
    #[serde(alias = "startsWith")]
    Startswith,
    #[serde(alias = "endsWith")]
    Endswith,
    Regex,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchMode::Exact => "exact",
            MatchMode::Includes => "includes",
            MatchMode::Startswith => "startswith",
            MatchMode::Endswith => "endswith",
            MatchMode::Regex => "regex",
        };
        f.write_str(s)
    }
}

/// What part of the cell to return as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMode {
    /// Whitespace-collapsed visible text (default).
    Text,
    /// Raw inner markup.
    Html,
    /// `href` of the first contained link, falling back to text.
    Href,
}

/// Typed parameter bag for one resolver invocation.
///
/// Mirrors the flat configuration map a test runner injects per step.
/// Every field has a documented default; validation happens eagerly in
/// [`resolve`](super::resolve) before any resolution logic runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Action to perform. Default: `get`.
    pub action: Action,

    /// Target column specifier: label, `data-col` key, or (base-adjusted)
    /// numeric index. Required unless `action` is `getRowIndex`.
    pub target_column: Option<String>,

    /// Column to search when no explicit `row_index` is given.
    pub source_column: Option<String>,

    /// Value to search for in `source_column`.
    pub search_value: Option<String>,

    /// Search comparison mode. Default: `exact`.
    pub match_type: MatchMode,

    /// Case-insensitive comparison (applies to regex as a flag). Default: true.
    pub case_insensitive: bool,

    /// 1-based ordinal selecting the Nth matching row. Values below 1 are
    /// treated as 1. The historical `occurence` spelling is accepted.
    #[serde(alias = "occurence")]
    pub occurrence: u32,

    /// Explicit row index. Takes precedence over the search fields.
    pub row_index: Option<i64>,

    /// Base for interpreting and reporting row indices: 0 or 1 (default 1).
    /// Any value other than 0 is treated as 1.
    pub row_index_base: u8,

    /// Base for numeric column specifiers: 0 (default) or 1.
    /// Any value other than 1 is treated as 0.
    pub column_index_base: u8,

    /// What to extract from the target cell. Default: `text`.
    pub return_mode: ReturnMode,

    /// Expected value for `validate`. Absent means extraction alone is success.
    pub expected_value: Option<String>,

    /// Comparison mode for `expected_value`. Defaults to `match_type`.
    pub expected_match_type: Option<MatchMode>,

    /// CSS selector for a click target inside the cell (e.g. `a`, `button`).
    /// Falls back to the cell itself when absent or unmatched.
    pub click_query: Option<String>,

    /// Emit a double-click instead of a single click. Default: false.
    pub double_click: bool,

    /// Request a best-effort scroll-into-view before clicking. Default: true.
    /// Dispatch failures are cosmetic and must be ignored by the runner.
    pub scroll_into_view: bool,

    /// Output key for the cell value. Default: `cellValue`.
    pub return_variable_name: String,

    /// Output key for the resolved row index. Default: `rowIndex`.
    pub row_index_variable_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            action: Action::Get,
            target_column: None,
            source_column: None,
            search_value: None,
            match_type: MatchMode::Exact,
            case_insensitive: true,
            occurrence: 1,
            row_index: None,
            row_index_base: 1,
            column_index_base: 0,
            return_mode: ReturnMode::Text,
            expected_value: None,
            expected_match_type: None,
            click_query: None,
            double_click: false,
            scroll_into_view: true,
            return_variable_name: "cellValue".to_string(),
            row_index_variable_name: "rowIndex".to_string(),
        }
    }
}

impl TableOptions {
    /// Effective row index base: 0 stays 0, everything else is 1.
    pub fn row_base(&self) -> u8 {
        if self.row_index_base == 0 {
            0
        } else {
            1
        }
    }

    /// Effective column index base: 1 stays 1, everything else is 0.
    pub fn column_base(&self) -> u8 {
        if self.column_index_base == 1 {
            1
        } else {
            0
        }
    }

    /// Occurrence ordinal clamped to a minimum of 1.
    pub fn effective_occurrence(&self) -> u32 {
        self.occurrence.max(1)
    }

    /// Comparison mode for `validate`, defaulting to the search mode.
    pub fn effective_expected_match_type(&self) -> MatchMode {
        self.expected_match_type.unwrap_or(self.match_type)
    }
}
