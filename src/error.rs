use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepkitError {
    #[error("Target must be (or contain) exactly one <table>: {0}")]
    InvalidTarget(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Column could not be resolved: {0}")]
    ColumnResolution(String),

    #[error("rowIndex out of range: {index} (rows={rows}, base={base})")]
    RowIndexOutOfRange { index: i64, rows: usize, base: u8 },

    #[error(
        "No row matched: sourceColumn={source_column:?} searchValue={search_value:?} \
         matchType={match_mode} occurrence={occurrence}"
    )]
    RowNotFound {
        source_column: String,
        search_value: String,
        match_mode: String,
        occurrence: u32,
    },

    #[error("Validation failed: got={actual:?} expected({match_mode})={expected:?}")]
    Validation {
        actual: String,
        expected: String,
        match_mode: String,
    },

    #[error("Click target not found/clickable: {0}")]
    ClickTarget(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Marker found at line {line}: {text}")]
    MarkerFound { line: usize, text: String },

    #[error("Key not found in store '{store}': {key}")]
    KeyNotFound { store: String, key: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StepkitError>;
