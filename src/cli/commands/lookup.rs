use anyhow::{Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::core::{AttributePin, ScanContext};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let index = ctx.index();

    let model_found = index.contains_model(&cmd.model);
    let pins: Vec<AttributePin> = match &cmd.attribute {
        Some(attribute) => index.lookup(&cmd.model, attribute).into_iter().cloned().collect(),
        None => index.attributes_of(&cmd.model).to_vec(),
    };

    // A model with no annotated attributes is still a hit when listing
    let missed = !model_found || (cmd.attribute.is_some() && pins.is_empty());
    let load_failures = ctx.sources().failures.clone();

    Ok(CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            model: cmd.model,
            attribute: cmd.attribute,
            model_found,
            pins,
        }),
        failure_count: load_failures.len() + usize::from(missed),
        load_failures,
    })
}
