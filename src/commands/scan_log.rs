use std::path::Path;

use colored::Colorize;

use crate::cli::Cli;
use crate::error::Result;
use crate::files::logscan;
use crate::outputs::Outputs;

pub async fn run(cli: &Cli, path: &str, marker: &str) -> Result<()> {
    let report = logscan::scan(Path::new(path), marker)?;

    let mut outputs = Outputs::new();
    outputs.set("linesScanned", report.lines_scanned);

    if !cli.json {
        println!(
            "{} No {:?} lines in {} ({} lines scanned)",
            "✓".green(),
            marker,
            path,
            report.lines_scanned
        );
    }
    outputs.print(cli.json)
}
