use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;

use crate::cli::{Cli, WaitFileArgs};
use crate::config::Config;
use crate::error::Result;
use crate::files::wait::{
    validate_document, wait_for_file, DocumentInspector, PlainTextInspector, WaitOptions,
};
use crate::outputs::Outputs;

pub async fn run(cli: &Cli, args: &WaitFileArgs) -> Result<()> {
    let config = Config::load()?;

    let dir = args
        .dir
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.downloads_dir());
    let path = dir.join(&args.file_name);

    let opts = WaitOptions {
        timeout: Duration::from_millis(args.timeout_ms.unwrap_or(config.downloads.timeout_ms)),
        poll_interval: Duration::from_millis(
            args.poll_interval_ms
                .unwrap_or(config.downloads.poll_interval_ms),
        ),
    };

    tracing::info!(
        "Waiting for file: {} (timeout {}ms)",
        path.display(),
        opts.timeout.as_millis()
    );

    let spinner = (!cli.json).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Waiting for {}", path.display()));
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    });

    let waited = wait_for_file(&path, &opts).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let bytes = waited?;

    let mut outputs = Outputs::new();
    outputs.set("filePath", path.display().to_string());
    outputs.set("fileSize", bytes.len());

    if args.expected_text.is_some() || args.expected_pages.is_some() {
        let summary = PlainTextInspector.inspect(&bytes)?;
        validate_document(&summary, args.expected_pages, args.expected_text.as_deref())?;
        if let Some(pages) = summary.pages {
            outputs.set("pages", pages);
        }
        tracing::info!("Validation passed for {}", args.file_name);
    }

    if !cli.json {
        println!("{} File ready: {}", "✓".green(), path.display());
    }
    outputs.print(cli.json)
}
