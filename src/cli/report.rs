//! Report formatting and printing utilities.
//!
//! Kept apart from the indexing engine so annopin can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, LookupSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{AttributePin, DeclaredAttribute, LoadFailure, Location, ModelDeclaration};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers (`out` for results, `err` for problems).
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    print_load_failures(&result.load_failures, verbose, err);

    match &result.summary {
        CommandSummary::Scan(summary) => match summary.format {
            OutputFormat::Text => print_scan_text(summary, out),
            OutputFormat::Json => print_scan_json(summary, out),
        },
        CommandSummary::Lookup(summary) => print_lookup(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn print_load_failures<E: Write>(failures: &[LoadFailure], verbose: bool, err: &mut E) {
    if failures.is_empty() {
        return;
    }
    if verbose {
        for failure in failures {
            let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), failure.message);
        }
    } else {
        let _ = writeln!(
            err,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            failures.len(),
            "-v".cyan()
        );
    }
}

fn print_scan_text<W: Write>(summary: &ScanSummary, out: &mut W) {
    for record in &summary.records {
        print_model(record, out);
        let _ = writeln!(out);
    }

    let files = plural(summary.files_scanned, "file", "files");
    let msg = if summary.records.is_empty() {
        format!(
            "Scanned {} {} - no annotated models found",
            summary.files_scanned, files
        )
    } else {
        let attributes = summary.attribute_count();
        format!(
            "Indexed {} {} on {} {} from {} {}",
            attributes,
            plural(attributes, "attribute", "attributes"),
            summary.records.len(),
            plural(summary.records.len(), "model", "models"),
            summary.files_scanned,
            files
        )
    };
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_model<W: Write>(record: &ModelDeclaration, out: &mut W) {
    let _ = writeln!(out, "{}", record.model_name.bold());

    let name_width = column_width(record.attributes.iter().map(|a| a.name.as_str()));
    let type_width = column_width(record.attributes.iter().map(|a| a.semantic_type.as_str()));

    for DeclaredAttribute {
        name,
        semantic_type,
        location,
    } in &record.attributes
    {
        let _ = writeln!(
            out,
            "  {}  {}  {}",
            pad(name, name_width),
            pad(semantic_type.as_str(), type_width).cyan(),
            display_location(location).dimmed()
        );
    }
}

fn print_scan_json<W: Write>(summary: &ScanSummary, out: &mut W) {
    match serde_json::to_string_pretty(&summary.records) {
        Ok(json) => {
            let _ = writeln!(out, "{}", json);
        }
        Err(e) => {
            let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), e);
        }
    }
}

fn print_lookup<W: Write, E: Write>(summary: &LookupSummary, out: &mut W, err: &mut E) {
    if !summary.model_found {
        let _ = writeln!(
            err,
            "{} no annotated model named `{}`",
            "error:".bold().red(),
            summary.model
        );
        return;
    }

    if let Some(attribute) = &summary.attribute
        && summary.pins.is_empty()
    {
        let _ = writeln!(
            err,
            "{} `{}` has no annotated attribute `{}`",
            "error:".bold().red(),
            summary.model,
            attribute
        );
        return;
    }

    if summary.pins.is_empty() {
        let _ = writeln!(out, "{} has no annotated attributes", summary.model.bold());
        return;
    }

    for pin in &summary.pins {
        print_pin(pin, out);
    }
}

fn print_pin<W: Write>(pin: &AttributePin, out: &mut W) {
    let _ = writeln!(
        out,
        "{}: {}",
        pin.path().bold(),
        pin.return_type.as_str().cyan()
    );
    let _ = writeln!(out, "  {}", pin.comments().dimmed());
    let _ = writeln!(
        out,
        "  {} {}",
        "-->".blue(),
        display_location(&pin.location)
    );
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// `path:line`, with the 0-indexed line shown 1-indexed.
fn display_location(location: &Location) -> String {
    format!("{}:{}", location.source_id, location.start_line + 1)
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", value, " ".repeat(fill))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
