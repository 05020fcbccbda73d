use anyhow::{Ok, Result};

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::core::ScanContext;

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;

    let records = ctx.index().records();
    let load_failures = ctx.sources().failures.clone();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            format: cmd.format,
            records,
            files_scanned: ctx.sources().units.len(),
        }),
        failure_count: load_failures.len(),
        load_failures,
    })
}
