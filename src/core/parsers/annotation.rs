//! Schema annotation parser.
//!
//! Scans the comment block a schema annotator writes above a model class:
//!
//! ```text
//! # == Schema Information
//! #
//! # id      integer
//! # balance decimal
//! class Account < ApplicationRecord
//! ```
//!
//! Attribute lines are collected until the first code line. That line both
//! ends the scan and names the model; if it does not declare a model class,
//! the collected attributes are dropped.

use super::line::{self, LineKind};
use crate::core::{
    data::{AttributeAnnotation, Location, ModelDeclaration, TypeMapping},
    observer::{ParseEvent, ParseObserver},
};

/// Where a scan stands. `Resolved` and `Discarded` end the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Resolved(String),
    Discarded,
}

impl ScanState {
    fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning)
    }
}

/// Parses annotation blocks against a fixed type mapping.
///
/// Holds no per-parse state, so one parser can be shared across threads when
/// its observer is `Sync`.
pub struct AnnotationParser<'a, O: ?Sized> {
    mapping: &'a TypeMapping,
    observer: &'a O,
}

impl<'a, O: ParseObserver + ?Sized> AnnotationParser<'a, O> {
    pub fn new(mapping: &'a TypeMapping, observer: &'a O) -> Self {
        Self { mapping, observer }
    }

    /// Parse one complete source unit.
    ///
    /// Returns at most one declaration. Malformed input yields an empty
    /// result rather than an error.
    pub fn parse(&self, source_id: &str, text: &str) -> Vec<ModelDeclaration> {
        let mut pending: Vec<AttributeAnnotation> = Vec::new();
        let mut state = ScanState::Scanning;

        for (line_idx, line) in text.lines().enumerate() {
            self.emit(
                source_id,
                ParseEvent::LineProcessed {
                    line: line_idx,
                    text: line,
                },
            );

            match line::classify(line) {
                LineKind::Skip(reason) => {
                    self.emit(
                        source_id,
                        ParseEvent::LineSkipped {
                            line: line_idx,
                            reason,
                        },
                    );
                }
                LineKind::Comment => {
                    if let Some(annotation) = self.annotation(source_id, line_idx, line) {
                        pending.push(annotation);
                    } else {
                        self.emit(
                            source_id,
                            ParseEvent::UnrecognizedType {
                                line: line_idx,
                                text: line,
                            },
                        );
                    }
                }
                LineKind::Terminal => {
                    state = self.resolve_terminal(source_id, line_idx, line);
                }
            }

            if state.is_terminal() {
                break;
            }
        }

        let ScanState::Resolved(model_name) = state else {
            self.emit(source_id, ParseEvent::AttributesEmitted { count: 0 });
            return Vec::new();
        };

        let attributes: Vec<_> = pending
            .iter()
            .filter_map(|annotation| annotation.resolve(self.mapping))
            .collect();
        self.emit(
            source_id,
            ParseEvent::AttributesEmitted {
                count: attributes.len(),
            },
        );

        vec![ModelDeclaration {
            model_name,
            attributes,
        }]
    }

    fn annotation(
        &self,
        source_id: &str,
        line_idx: usize,
        line: &str,
    ) -> Option<AttributeAnnotation> {
        let (name, declared_type) = line::attribute_tokens(line)?;
        if !self.mapping.contains(declared_type) {
            return None;
        }

        self.emit(
            source_id,
            ParseEvent::AttributeParsed {
                line: line_idx,
                name,
                declared_type,
            },
        );

        Some(AttributeAnnotation {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            span: Location::whole_line(source_id, line_idx, line),
        })
    }

    fn resolve_terminal(&self, source_id: &str, line_idx: usize, line: &str) -> ScanState {
        match line::model_name(line) {
            Some(model_name) => {
                self.emit(
                    source_id,
                    ParseEvent::ModelResolved {
                        line: line_idx,
                        model_name,
                    },
                );
                ScanState::Resolved(model_name.to_string())
            }
            None => {
                self.emit(
                    source_id,
                    ParseEvent::UnresolvedEntity {
                        line: line_idx,
                        text: line,
                    },
                );
                ScanState::Discarded
            }
        }
    }

    fn emit(&self, source_id: &str, event: ParseEvent<'_>) {
        self.observer.observe(source_id, &event);
    }
}

/// Parse `text` with the Rails type mapping and no diagnostics.
pub fn parse_annotations(source_id: &str, text: &str) -> Vec<ModelDeclaration> {
    AnnotationParser::new(&TypeMapping::RAILS, &crate::core::observer::NoopObserver)
        .parse(source_id, text)
}
