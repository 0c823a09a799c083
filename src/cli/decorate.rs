//! `brickwork decorate`: write decorated copies of HTML pages.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::DecorateArgs;
use super::common::{SourceFile, collect_html_files, decorate_file, plural_count};
use crate::config::BrickConfig;
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Totals across a decorate run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecorateSummary {
    pub files: usize,
    pub blocks: usize,
    pub failed: usize,
}

/// Decorate every input page.
///
/// With `--stdout` the decorated HTML is printed; otherwise each page is
/// written under the output directory, mirroring the input layout.
pub async fn run_decorate(args: &DecorateArgs, config: &BrickConfig) -> Result<DecorateSummary> {
    let files = collect_html_files(&args.paths)?;
    if files.is_empty() {
        log!("decorate"; "no html files found");
        return Ok(DecorateSummary::default());
    }

    let progress = (!args.stdout).then(|| ProgressLine::new("decorate", &[("files", files.len())]));
    let mut summary = DecorateSummary::default();

    for file in &files {
        let (doc, report) = decorate_file(&file.path, config).await?;
        debug!("decorate"; "{}: {}", file.path.display(), plural_count(report.blocks.len(), "block"));

        summary.files += 1;
        summary.blocks += report.decorated();
        summary.failed += report.failed();

        let html = doc.to_html();
        if args.stdout {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}")?;
        } else {
            write_output(&args.output, file, &html)?;
        }
        if let Some(progress) = &progress {
            progress.inc("files");
        }
    }

    if let Some(progress) = progress {
        progress.finish();
    }
    log!(
        "decorate";
        "{}, {} decorated, {} failed",
        plural_count(summary.files, "file"),
        plural_count(summary.blocks, "block"),
        summary.failed
    );
    Ok(summary)
}

fn write_output(output: &Path, file: &SourceFile, html: &str) -> Result<()> {
    let target = output.join(&file.relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&target, html).with_context(|| format!("failed to write {}", target.display()))
}
