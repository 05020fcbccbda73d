//! Single-line classification rules for annotation blocks.
//!
//! Every rule is a pure function of one line so it can be tested on its own.
//! `classify` combines them in the order the annotation parser applies them.

use std::{fmt, sync::LazyLock};

use regex::Regex;

// `#` after optional indentation
static COMMENT_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*").unwrap());

static BARE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#\s*$").unwrap());

// Ruby magic comments:
// - # frozen_string_literal: true
// - # encoding: utf-8
// - # -*- coding: utf-8 -*-
static MAGIC_DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#.*\b(?:frozen[_ -]string[_ -]literal|(?:en)?coding\s*[:=])").unwrap()
});

// Capture group 1: model class name
static MODEL_CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s*?([A-Z][A-Za-z0-9_]+)\s*<\s*(?:ActiveRecord::Base|ApplicationRecord)")
        .unwrap()
});

/// Why a line carries no annotation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    SchemaHeader,
    BareComment,
    MagicDirective,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Blank => "blank line",
            Self::SchemaHeader => "schema header",
            Self::BareComment => "bare comment marker",
            Self::MagicDirective => "magic comment",
        };
        f.write_str(reason)
    }
}

/// How the annotation parser treats a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Structural noise, no state change.
    Skip(SkipReason),
    /// Comment that may describe an attribute.
    Comment,
    /// First code line; ends the annotation block.
    Terminal,
}

pub fn classify(line: &str) -> LineKind {
    if let Some(reason) = skip_reason(line) {
        LineKind::Skip(reason)
    } else if is_comment(line) {
        LineKind::Comment
    } else {
        LineKind::Terminal
    }
}

pub fn skip_reason(line: &str) -> Option<SkipReason> {
    if is_blank(line) {
        Some(SkipReason::Blank)
    } else if is_schema_header(line) {
        Some(SkipReason::SchemaHeader)
    } else if is_bare_comment(line) {
        Some(SkipReason::BareComment)
    } else if is_magic_directive(line) {
        Some(SkipReason::MagicDirective)
    } else {
        None
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True if `Schema` or `Table` appears anywhere in the line.
///
/// Unanchored and case-sensitive, so `# Table name: accounts` is skipped and
/// so is an attribute line mentioning either word.
pub fn is_schema_header(line: &str) -> bool {
    line.contains("Schema") || line.contains("Table")
}

pub fn is_bare_comment(line: &str) -> bool {
    BARE_COMMENT_REGEX.is_match(line)
}

pub fn is_magic_directive(line: &str) -> bool {
    MAGIC_DIRECTIVE_REGEX.is_match(line)
}

pub fn is_comment(line: &str) -> bool {
    COMMENT_MARKER_REGEX.is_match(line)
}

/// Text after the leading comment marker and its following whitespace.
///
/// Lines without a leading marker are returned unchanged.
pub fn strip_comment_marker(line: &str) -> &str {
    match COMMENT_MARKER_REGEX.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

/// First two whitespace-separated tokens of a comment: `(name, type)`.
pub fn attribute_tokens(line: &str) -> Option<(&str, &str)> {
    let mut tokens = strip_comment_marker(line).split_whitespace();
    let name = tokens.next()?;
    let declared_type = tokens.next()?;
    Some((name, declared_type))
}

/// Model class declared by `line`, e.g. `Account` for
/// `class Account < ApplicationRecord`.
///
/// A leading comment marker is tolerated so commented-out blocks still resolve.
pub fn model_name(line: &str) -> Option<&str> {
    MODEL_CLASS_REGEX
        .captures(strip_comment_marker(line))
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}
