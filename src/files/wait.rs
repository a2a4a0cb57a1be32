//! Wait for a downloaded file, then validate its content.
//!
//! The wait is a single fixed-interval polling loop with a timeout; content
//! decoding is delegated to an injected [`DocumentInspector`] so that binary
//! formats (PDF and friends) stay outside this crate.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{Result, StepkitError};

/// Polling parameters for the wait loop.
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(20_000),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Decoded view of a downloaded document, produced by an injected inspector.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Page count, when the format has one and the inspector can read it.
    pub pages: Option<u32>,
    /// Extracted text content.
    pub text: String,
}

/// Turns raw file bytes into a [`DocumentSummary`].
///
/// The runner injects its own implementation for binary formats; the
/// built-in [`PlainTextInspector`] covers text files.
pub trait DocumentInspector {
    fn inspect(&self, bytes: &[u8]) -> Result<DocumentSummary>;
}

/// Treats the file as UTF-8 text (lossily); page count is unknown.
#[derive(Debug, Default)]
pub struct PlainTextInspector;

impl DocumentInspector for PlainTextInspector {
    fn inspect(&self, bytes: &[u8]) -> Result<DocumentSummary> {
        Ok(DocumentSummary {
            pages: None,
            text: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}

/// Poll until `path` exists, then read and return its bytes.
///
/// Polls on a fixed interval; fails with `Timeout` naming the path once the
/// limit is exceeded.
pub async fn wait_for_file(path: &Path, opts: &WaitOptions) -> Result<Vec<u8>> {
    let start = Instant::now();
    while !path.exists() {
        tokio::time::sleep(opts.poll_interval).await;
        if start.elapsed() > opts.timeout {
            return Err(StepkitError::Timeout(format!(
                "waiting for file: {}",
                path.display()
            )));
        }
    }

    tracing::debug!("File ready: {}", path.display());
    Ok(std::fs::read(path)?)
}

/// Check an inspected document against the expectations. Each check only
/// runs when its expectation was supplied.
pub fn validate_document(
    summary: &DocumentSummary,
    expected_pages: Option<u32>,
    expected_text: Option<&str>,
) -> Result<()> {
    if let Some(expected) = expected_pages {
        match summary.pages {
            Some(got) if got == expected => {}
            Some(got) => {
                return Err(StepkitError::Validation {
                    actual: got.to_string(),
                    expected: expected.to_string(),
                    match_mode: "pages".to_string(),
                })
            }
            None => {
                return Err(StepkitError::Validation {
                    actual: "unknown".to_string(),
                    expected: expected.to_string(),
                    match_mode: "pages".to_string(),
                })
            }
        }
    }

    if let Some(expected) = expected_text {
        if !summary.text.contains(expected) {
            let mut snippet: String = summary.text.chars().take(80).collect();
            if summary.text.chars().count() > 80 {
                snippet.push('…');
            }
            return Err(StepkitError::Validation {
                actual: snippet,
                expected: expected.to_string(),
                match_mode: "includes".to_string(),
            });
        }
    }

    Ok(())
}
