//! `brickwork inspect`: report block decisions as JSON.

use std::io::Write;

use anyhow::Result;

use super::InspectArgs;
use super::common::{decorate_file, plural_count};
use crate::config::BrickConfig;
use crate::page::PageReport;
use crate::debug;

/// Decorate the page in memory and print its report.
pub async fn run_inspect(args: &InspectArgs, config: &BrickConfig) -> Result<PageReport> {
    let (_, report) = decorate_file(&args.path, config).await?;
    debug!("inspect"; "{}", plural_count(report.blocks.len(), "block"));

    let json = render_report(&report, args.pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(report)
}

fn render_report(report: &PageReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
