use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{AttributePin, LoadFailure, ModelDeclaration};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub format: OutputFormat,
    /// One record per indexed model, sorted by model name.
    pub records: Vec<ModelDeclaration>,
    pub files_scanned: usize,
}

impl ScanSummary {
    pub fn attribute_count(&self) -> usize {
        self.records.iter().map(|r| r.attributes.len()).sum()
    }
}

#[derive(Debug)]
pub struct LookupSummary {
    pub model: String,
    pub attribute: Option<String>,
    pub model_found: bool,
    /// Matching pins; empty when nothing matched.
    pub pins: Vec<AttributePin>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an annopin command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that could not be read.
    pub load_failures: Vec<LoadFailure>,
    /// Problems that should turn the exit status into `Failure`.
    pub failure_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_failure_count(self.failure_count)
    }
}
