//! Diagnostics emitted while parsing annotation blocks.
//!
//! The parser never logs directly. It reports `ParseEvent`s to whatever
//! `ParseObserver` the caller hands it; events never influence parse results.

use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

use super::parsers::line::SkipReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
}

/// Something the parser noticed while scanning one source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEvent<'a> {
    /// A line is about to be classified.
    LineProcessed { line: usize, text: &'a str },
    LineSkipped { line: usize, reason: SkipReason },
    AttributeParsed {
        line: usize,
        name: &'a str,
        declared_type: &'a str,
    },
    /// Comment line whose second token is not a known column type.
    UnrecognizedType { line: usize, text: &'a str },
    ModelResolved { line: usize, model_name: &'a str },
    /// The block ended on a line that does not declare a model class;
    /// everything collected so far is dropped.
    UnresolvedEntity { line: usize, text: &'a str },
    AttributesEmitted { count: usize },
}

impl ParseEvent<'_> {
    pub fn level(&self) -> Level {
        match self {
            Self::UnresolvedEntity { .. } => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for ParseEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineProcessed { line, text } => write!(f, "processing line {}: {}", line, text),
            Self::LineSkipped { line, reason } => write!(f, "skipping line {} ({})", line, reason),
            Self::AttributeParsed {
                line,
                name,
                declared_type,
            } => write!(
                f,
                "parsed name: {} type: {} (line {})",
                name, declared_type, line
            ),
            Self::UnrecognizedType { line, .. } => {
                write!(f, "could not find annotation in comment (line {})", line)
            }
            Self::ModelResolved { line, model_name } => {
                write!(f, "found model {} (line {})", model_name, line)
            }
            Self::UnresolvedEntity { line, text } => {
                write!(f, "unable to find model name in line {}: {}", line, text)
            }
            Self::AttributesEmitted { count } => write!(f, "adding {} attributes as pins", count),
        }
    }
}

/// Receiver for parse diagnostics.
pub trait ParseObserver {
    fn observe(&self, source_id: &str, event: &ParseEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn observe(&self, _source_id: &str, _event: &ParseEvent<'_>) {}
}

/// Forwards events to `tracing` at the event's level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn observe(&self, source_id: &str, event: &ParseEvent<'_>) {
        match event.level() {
            Level::Info => tracing::info!(source = source_id, "{}", event),
            Level::Warn => tracing::warn!(source = source_id, "{}", event),
        }
    }
}

/// An event captured by `RecordingObserver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub source_id: String,
    pub level: Level,
    pub message: String,
}

/// Keeps every event in memory, mostly useful in tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn warnings(&self) -> Vec<RecordedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level == Level::Warn)
            .collect()
    }
}

impl ParseObserver for RecordingObserver {
    fn observe(&self, source_id: &str, event: &ParseEvent<'_>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedEvent {
                source_id: source_id.to_string(),
                level: event.level(),
                message: event.to_string(),
            });
    }
}
