//! Scan a local text log for an error marker.

use std::path::Path;

use crate::error::{Result, StepkitError};

/// Result of a clean scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanReport {
    pub lines_scanned: usize,
}

/// Read `path` (tolerating both `\r\n` and `\n` endings) and fail with
/// `MarkerFound` on the first line containing `marker`, reporting the line
/// number and the line itself. A clean file returns the line count.
pub fn scan(path: &Path, marker: &str) -> Result<ScanReport> {
    let text = std::fs::read_to_string(path)?;

    let mut lines_scanned = 0;
    for (i, line) in text.lines().enumerate() {
        lines_scanned += 1;
        let line = line.trim_end_matches('\r');
        if line.contains(marker) {
            tracing::error!("{}:{}: {}", path.display(), i + 1, line);
            return Err(StepkitError::MarkerFound {
                line: i + 1,
                text: line.to_string(),
            });
        }
    }

    Ok(ScanReport { lines_scanned })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn clean_log_reports_line_count() {
        let (_dir, path) = write_log("INFO start\nINFO done\n");
        let report = scan(&path, "ERROR").unwrap();
        assert_eq!(report.lines_scanned, 2);
    }

    #[test]
    fn first_marker_line_is_reported_with_its_number() {
        let (_dir, path) = write_log("INFO ok\nERROR boom\nERROR later\n");
        match scan(&path, "ERROR").unwrap_err() {
            StepkitError::MarkerFound { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "ERROR boom");
            }
            other => panic!("expected MarkerFound, got {other:?}"),
        }
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let (_dir, path) = write_log("INFO ok\r\nERROR boom\r\n");
        match scan(&path, "ERROR").unwrap_err() {
            StepkitError::MarkerFound { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "ERROR boom");
            }
            other => panic!("expected MarkerFound, got {other:?}"),
        }
    }

    #[test]
    fn custom_markers_are_honored() {
        let (_dir, path) = write_log("WARN disk almost full\n");
        assert!(scan(&path, "ERROR").is_ok());
        assert!(scan(&path, "WARN").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan(&dir.path().join("absent.log"), "ERROR").unwrap_err();
        assert!(matches!(err, StepkitError::IoError(_)));
    }
}
